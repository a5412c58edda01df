use lift_core::{ConfigError, Rejection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid start floor: {0}")]
    StartFloor(Rejection),
}

pub type SimResult<T> = Result<T, SimError>;
