use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Unknown scenario id: {0}")]
    UnknownScenario(u8),

    #[error("Control error: {0}")]
    ControlError(String),
}
