use rand::rngs::StdRng;
use rand::Rng;

use crate::constants::{SPLASH_DROPLETS_PER_IMPACT, SPLASH_MAX_AGE, SPLASH_PULL};
use crate::utils::vector2d::Vector2D;

/// Decorative droplet scattered off an impact. Visual only: stepped in
/// normalized screen space with a simple downward pull, no physical
/// contract.
#[derive(Debug, Clone, Copy)]
pub struct Splash {
    pub position: Vector2D,
    velocity: Vector2D,
    pub age: f64,
    pub max_age: f64,
    pub size: f64,
}

impl Splash {
    /// Scatter for one impact: a handful of droplets kicked up and sideways,
    /// livelier for faster impacts.
    pub fn burst(rng: &mut StdRng, position: Vector2D, impact_speed: f64) -> Vec<Splash> {
        let vigor = 0.4 + (impact_speed.min(6.0) / 6.0) * 0.6;
        (0..SPLASH_DROPLETS_PER_IMPACT)
            .map(|_| Splash {
                position,
                velocity: Vector2D::new(
                    rng.gen_range(-0.06..0.06) * vigor,
                    -rng.gen_range(0.02..0.10) * vigor,
                ),
                age: 0.0,
                max_age: rng.gen_range(0.25..SPLASH_MAX_AGE),
                size: rng.gen_range(0.8..2.0),
            })
            .collect()
    }

    pub fn step(&mut self, dt: f64) {
        self.velocity += Vector2D::new(0.0, SPLASH_PULL * dt);
        self.position += self.velocity * dt;
        self.age += dt;
    }

    pub fn expired(&self) -> bool {
        self.age >= self.max_age
    }

    /// Fade factor for rendering, 1.0 fresh down to 0.0 expired.
    pub fn opacity(&self) -> f64 {
        (1.0 - self.age / self.max_age).max(0.0)
    }
}
