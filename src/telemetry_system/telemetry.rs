use crate::constants::RANGE_DISPLAY_MAX;
use crate::control::scenario::ScenarioConfig;
use crate::simulation::engine::FrameReport;
use crate::trajectory_system::solver;

/// Display-ready flight figures for one scenario: distances and times to
/// two decimals, exit-velocity efficiency as a whole percent.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioReadout {
    pub scenario_id: u8,
    pub range: f64,
    pub height: f64,
    pub time: f64,
    pub efficiency_percent: u32,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The solver is trusted to be best-effort, not sane: non-finite or
/// negative figures are clamped to zero before display, and range is
/// capped at a plausibility bound.
fn sanitize(value: f64, cap: f64) -> f64 {
    if !value.is_finite() || value < 0.0 {
        0.0
    } else {
        value.min(cap)
    }
}

fn efficiency_percent(v_final: f64, v0: f64) -> u32 {
    if v0 <= 0.0 || !v_final.is_finite() {
        return 0;
    }
    (v_final / v0 * 100.0).round().max(0.0) as u32
}

/// Headline figures for the active scenario at the current panel settings.
pub fn scenario_readout(scenario: &ScenarioConfig, angle_deg: f64, speed: f64) -> ScenarioReadout {
    let summary = solver::solve(scenario, angle_deg, speed);
    ScenarioReadout {
        scenario_id: scenario.id,
        range: round2(sanitize(summary.range, RANGE_DISPLAY_MAX)),
        height: round2(sanitize(summary.height, RANGE_DISPLAY_MAX)),
        time: round2(sanitize(summary.time, f64::MAX)),
        efficiency_percent: efficiency_percent(summary.v_final, speed),
    }
}

/// All three scenarios at the same settings, for the comparison bars.
/// Recomputed whenever angle or speed changes.
pub fn comparison(angle_deg: f64, speed: f64) -> [ScenarioReadout; 3] {
    let scenarios = ScenarioConfig::all();
    [
        scenario_readout(&scenarios[0], angle_deg, speed),
        scenario_readout(&scenarios[1], angle_deg, speed),
        scenario_readout(&scenarios[2], angle_deg, speed),
    ]
}

/// Run log and peak metrics collected over a simulation pass.
pub struct Telemetry {
    pub log: Vec<String>,
    max_live_particles: usize,
    total_impacts: usize,
    peak_impact_speed: f64,
    simulation_time: f64,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            max_live_particles: 0,
            total_impacts: 0,
            peak_impact_speed: 0.0,
            simulation_time: 0.0,
        }
    }

    pub fn collect_frame(&mut self, report: &FrameReport, delta_time: f64) {
        self.simulation_time += delta_time;

        if report.live_particles > self.max_live_particles {
            self.max_live_particles = report.live_particles;
        }
        self.total_impacts += report.impacts.len();
        for event in &report.impacts {
            if event.speed > self.peak_impact_speed {
                self.peak_impact_speed = event.speed;
            }
        }

        if !report.impacts.is_empty() {
            self.log.push(format!(
                "t={:.2}s | {} strike(s) | {} in flight | {} splashes",
                self.simulation_time,
                report.impacts.len(),
                report.live_particles,
                report.live_splashes
            ));
        }
    }

    pub fn total_impacts(&self) -> usize {
        self.total_impacts
    }

    pub fn max_live_particles(&self) -> usize {
        self.max_live_particles
    }

    pub fn display_data(&self, headline: &ScenarioReadout, comparison: &[ScenarioReadout; 3]) {
        println!("--- Impact Log ---");
        for entry in &self.log {
            println!("{}", entry);
        }

        println!("\n--- Flight Summary (scenario {}) ---", headline.scenario_id);
        println!("Range: {:.2} m", headline.range);
        println!("Peak Height: {:.2} m", headline.height);
        println!("Flight Time: {:.2} s", headline.time);
        println!("Exit-Velocity Efficiency: {}%", headline.efficiency_percent);

        println!("\n--- Scenario Comparison ---");
        for readout in comparison {
            println!(
                "Scenario {}: range {:.2} m | peak {:.2} m | flight {:.2} s | efficiency {}%",
                readout.scenario_id,
                readout.range,
                readout.height,
                readout.time,
                readout.efficiency_percent
            );
        }

        println!("\n--- Run Summary ---");
        println!("Simulated Time: {:.2} s", self.simulation_time);
        println!("Max Droplets In Flight: {}", self.max_live_particles);
        println!("Total Ground Strikes: {}", self.total_impacts);
        println!("Peak Impact Speed: {:.2} m/s", self.peak_impact_speed);
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}
