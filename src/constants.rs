// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const LINEAR_DRAG_COEFFICIENT: f64 = 10.0; // 1/s, terminal fall speed g/β ≈ 0.98 m/s (fine spray)

// Impact Detection
pub const IMPACT_PLANE_HEIGHT: f64 = 0.45; // m, shared ground plane for all scenarios

// Root Finding
pub const NEWTON_MAX_ITERATIONS: usize = 15;
pub const NEWTON_TOLERANCE: f64 = 1e-9; // m, residual height at the solved root
pub const NEWTON_SEED_LOW: f64 = 0.36; // s, flights solved relative to emission height
pub const NEWTON_SEED_HIGH: f64 = 0.65; // s, flights solved down from 1.0 m

// Particle Lifecycle
pub const EMISSION_BATCH_SIZE: usize = 8; // particles per tick while launching
pub const MAX_PARTICLE_AGE: f64 = 3.0; // s
pub const TRAIL_CAPACITY: usize = 15; // recent screen positions kept per particle

// Launch Jitter
pub const ANGLE_JITTER: f64 = 0.03; // rad, uniform half-width around the set angle
pub const SPEED_JITTER: f64 = 0.12; // m/s, uniform half-width around the set speed
pub const PARTICLE_SIZE_MIN: f64 = 1.5; // px
pub const PARTICLE_SIZE_MAX: f64 = 3.5; // px

// Viewport Mapping
pub const GROUND_LINE_NORM: f64 = 0.78; // normalized screen row of the ground line
pub const NOZZLE_TOP_NORM: f64 = 0.30; // normalized screen row of the nozzle top
pub const PHYS_RANGE_BOTTOM: f64 = 0.25; // m, lowest height the vertical map covers
pub const PHYS_RANGE_TOP: f64 = 1.0; // m, highest height the vertical map covers
pub const HORIZONTAL_COMPRESSION: f64 = 0.22; // empirical, preserved for visual parity

// Control Panel
pub const ANGLE_CHOICES: [u32; 5] = [15, 30, 45, 60, 75]; // degrees
pub const SPEED_MIN: f64 = 1.0; // m/s
pub const SPEED_MAX: f64 = 6.0; // m/s

// Splash (decorative only)
pub const SPLASH_DROPLETS_PER_IMPACT: usize = 6;
pub const SPLASH_MAX_AGE: f64 = 0.5; // s
pub const SPLASH_PULL: f64 = 1.6; // normalized units/s², downward pull on droplets

// Display
pub const RANGE_DISPLAY_MAX: f64 = 10.0; // m, defensive clamp for implausible solver output
