use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{
    ANGLE_JITTER, EMISSION_BATCH_SIZE, PARTICLE_SIZE_MAX, PARTICLE_SIZE_MIN, SPEED_JITTER,
};
use crate::control::panel::ControlPanel;
use crate::control::scenario::ScenarioConfig;
use crate::utils::vector2d::Vector2D;

use super::particle::Particle;
use super::splash::Splash;
use super::viewport::Viewport;

/// Ground strike of one droplet, reported the tick it happens. The engine
/// spawns its own splash burst from it; a rendering host may subscribe for
/// sound or extra effects.
#[derive(Debug, Clone, Copy)]
pub struct ImpactEvent {
    pub position: Vector2D,
    pub speed: f64,
    pub scenario_id: u8,
}

/// One droplet's drawing data for the current frame.
#[derive(Debug, Clone)]
pub struct ParticleSample {
    pub screen_x: f64,
    pub screen_y: f64,
    pub impact: bool,
    pub approx_speed: f64,
    pub visual_size: f64,
    pub trail: Vec<Vector2D>,
}

/// Everything the rendering surface consumes for one tick.
#[derive(Debug, Clone)]
pub struct FrameReport {
    pub samples: Vec<ParticleSample>,
    pub impacts: Vec<ImpactEvent>,
    pub live_particles: usize,
    pub live_splashes: usize,
}

/// The simulation context: owns every mutable piece of run state and
/// exposes exactly three mutation points — emit (inside `tick` while the
/// panel is launching), step (`tick`), and `clear`.
pub struct SimulationEngine {
    viewport: Viewport,
    particles: Vec<Particle>,
    splashes: Vec<Splash>,
    clock: f64,
    rng: StdRng,
}

impl SimulationEngine {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic engine for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        SimulationEngine {
            viewport: Viewport::default(),
            particles: Vec::new(),
            splashes: Vec::new(),
            clock: 0.0,
            rng,
        }
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn live_particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn splashes(&self) -> &[Splash] {
        &self.splashes
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.splashes.clear();
    }

    /// Advance the simulation by `dt` seconds: emit while launching,
    /// evaluate every live droplet, remove the dead within this same tick,
    /// and age the decorative splashes.
    pub fn tick(&mut self, panel: &ControlPanel, dt: f64) -> FrameReport {
        self.clock += dt;

        if panel.is_launching() {
            self.emit_batch(panel.scenario(), panel.angle_degrees(), panel.speed());
        }

        let mut survivors = Vec::with_capacity(self.particles.len());
        let mut samples = Vec::with_capacity(self.particles.len());
        let mut impacts = Vec::new();

        for mut particle in self.particles.drain(..) {
            if particle.expired(self.clock) {
                continue;
            }

            let state = match particle.evaluate(self.clock, &self.viewport) {
                Some(state) => state,
                None => {
                    survivors.push(particle);
                    continue;
                }
            };

            if state.impact {
                particle.alive = false;
                particle.clear_trail();
                impacts.push(ImpactEvent {
                    position: Vector2D::new(state.screen_x, state.screen_y),
                    speed: state.approx_speed,
                    scenario_id: particle.scenario_id,
                });
                samples.push(ParticleSample {
                    screen_x: state.screen_x,
                    screen_y: state.screen_y,
                    impact: true,
                    approx_speed: state.approx_speed,
                    visual_size: particle.visual_size,
                    trail: Vec::new(),
                });
            } else {
                particle.record_trail(Vector2D::new(state.screen_x, state.screen_y));
                samples.push(ParticleSample {
                    screen_x: state.screen_x,
                    screen_y: state.screen_y,
                    impact: false,
                    approx_speed: state.approx_speed,
                    visual_size: particle.visual_size,
                    trail: particle.trail_points(),
                });
                survivors.push(particle);
            }
        }
        self.particles = survivors;

        for event in &impacts {
            let burst = Splash::burst(&mut self.rng, event.position, event.speed);
            self.splashes.extend(burst);
        }
        for splash in self.splashes.iter_mut() {
            splash.step(dt);
        }
        self.splashes.retain(|splash| !splash.expired());

        FrameReport {
            live_particles: self.particles.len(),
            live_splashes: self.splashes.len(),
            samples,
            impacts,
        }
    }

    fn emit_batch(&mut self, scenario: &ScenarioConfig, angle_deg: f64, speed: f64) {
        let start = Vector2D::new(
            scenario.horizontal_position,
            self.viewport.screen_y(scenario.emission_height),
        );
        let base_angle = angle_deg.to_radians();

        for _ in 0..EMISSION_BATCH_SIZE {
            let angle = base_angle + self.rng.gen_range(-ANGLE_JITTER..ANGLE_JITTER);
            let jittered_speed = speed + self.rng.gen_range(-SPEED_JITTER..SPEED_JITTER);
            let size = self.rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX);
            self.particles.push(Particle::new(
                self.clock,
                scenario,
                angle,
                jittered_speed,
                start,
                size,
            ));
        }
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}
