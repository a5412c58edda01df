use lift_core::{Floor, TripId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MotionError {
    #[error("car is already moving on {0}")]
    AlreadyMoving(TripId),

    #[error("car is already at floor {0}")]
    ZeroDistance(Floor),
}

pub type MotionResult<T> = Result<T, MotionError>;
