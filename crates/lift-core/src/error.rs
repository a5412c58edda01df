//! Error and rejection types.
//!
//! The simulator has no fatal failure modes.  Everything a caller can get
//! wrong is a [`Rejection`]: the operation is ignored, logged, and state is
//! left exactly as it was.  [`ConfigError`] covers boundary validation of
//! configuration values and is wrapped by `Rejection::InvalidConfig`.

use thiserror::Error;

use crate::{Direction, Floor, Mode, TripId};

/// An out-of-bounds configuration value.  The previous value is retained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("floor count {0} is outside {min}..={max}", min = crate::MIN_FLOORS, max = crate::MAX_FLOORS)]
    FloorCount(u32),

    #[error("{0} ms per floor is outside 1..={max}", max = crate::MAX_MS_PER_FLOOR)]
    Speed(u64),

    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
}

/// Why an operation was ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("floor {floor} is outside 1..={floor_count}")]
    FloorOutOfRange { floor: u32, floor_count: u8 },

    #[error("car is already at floor {0}")]
    AlreadyAtFloor(Floor),

    #[error("floor {0} already has a pending request")]
    AlreadyQueued(Floor),

    #[error("floor {floor} has no {direction} call button")]
    NoHallButton { floor: Floor, direction: Direction },

    #[error("{0} mode is active")]
    SuppressedByMode(Mode),

    #[error("stale {timer} timer for {trip}")]
    StaleTimer { timer: &'static str, trip: TripId },

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl Rejection {
    /// `true` for the three ways a floor request can be invalid.
    pub fn is_invalid_floor(&self) -> bool {
        matches!(
            self,
            Rejection::FloorOutOfRange { .. }
                | Rejection::AlreadyAtFloor(_)
                | Rejection::AlreadyQueued(_)
        )
    }
}
