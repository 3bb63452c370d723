use crate::constants::{NEWTON_SEED_HIGH, NEWTON_SEED_LOW};
use crate::errors::SimulationError;
use crate::trajectory_system::model::DragRegime;

/// One of the three preset sprinkler mounts. Immutable, selected by id.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioConfig {
    pub id: u8,
    pub emission_height: f64,      // m, physical release height
    pub horizontal_position: f64,  // normalized [0,1] screen-space anchor
    pub direction_sign: f64,       // -1.0 fires leftward
    pub drag_regime: DragRegime,
    solver_reference_height: f64,  // m, the h0 the closed-form solver lands at zero from
}

const SCENARIOS: [ScenarioConfig; 3] = [
    ScenarioConfig {
        id: 1,
        emission_height: 0.45,
        horizontal_position: 0.18,
        direction_sign: 1.0,
        drag_regime: DragRegime::Ballistic,
        solver_reference_height: 0.0,
    },
    ScenarioConfig {
        id: 2,
        emission_height: 0.45,
        horizontal_position: 0.50,
        direction_sign: 1.0,
        drag_regime: DragRegime::LinearDrag,
        solver_reference_height: 0.0,
    },
    ScenarioConfig {
        id: 3,
        emission_height: 1.0,
        horizontal_position: 0.82,
        direction_sign: -1.0,
        drag_regime: DragRegime::LinearDrag,
        solver_reference_height: 1.0,
    },
];

impl ScenarioConfig {
    pub fn get(id: u8) -> Result<&'static ScenarioConfig, SimulationError> {
        SCENARIOS
            .iter()
            .find(|scenario| scenario.id == id)
            .ok_or(SimulationError::UnknownScenario(id))
    }

    pub fn all() -> &'static [ScenarioConfig; 3] {
        &SCENARIOS
    }

    pub fn solver_height(&self) -> f64 {
        self.solver_reference_height
    }

    /// Newton seed for the time-of-flight search, tuned per mount height.
    pub fn newton_seed(&self) -> f64 {
        if self.solver_reference_height > 0.0 {
            NEWTON_SEED_HIGH
        } else {
            NEWTON_SEED_LOW
        }
    }
}
