pub mod constants;
pub mod control;
pub mod errors;
pub mod simulation;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::panel::ControlPanel;
pub use control::scenario::ScenarioConfig;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::model::{apex_time, flight_state, BallisticState, DragRegime};
pub use trajectory_system::solver::{newton_raphson, solve, FlightSummary, RootEstimate};

// Re-export commonly used items from simulation
pub use simulation::engine::{FrameReport, ImpactEvent, ParticleSample, SimulationEngine};
pub use simulation::particle::{Particle, ParticleState};
pub use simulation::splash::Splash;
pub use simulation::viewport::Viewport;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{comparison, scenario_readout, ScenarioReadout, Telemetry};

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
