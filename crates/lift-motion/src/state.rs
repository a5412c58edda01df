//! Car state, trips, and motion phases.

use lift_core::{Direction, Floor, Tick, TripId};

/// The car as the rest of the system sees it.
///
/// Exactly one exists per simulation, owned by the
/// [`MotionEngine`][crate::MotionEngine].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarState {
    /// The floor the car is at, or departed from while moving.
    pub current_floor: Floor,

    /// Where the car is heading.  `None` unless moving.
    pub target_floor: Option<Floor>,

    pub direction: Direction,

    pub moving: bool,
}

impl CarState {
    /// A car standing idle at `floor`.
    pub fn parked(floor: Floor) -> Self {
        Self {
            current_floor: floor,
            target_floor:  None,
            direction:     Direction::Idle,
            moving:        false,
        }
    }
}

/// One journey between two floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    pub id:          TripId,
    pub from:        Floor,
    pub to:          Floor,
    pub direction:   Direction,
    pub departed_at: Tick,
    /// `departed_at + distance * ms_per_floor`, fixed at departure.
    pub arrives_at:  Tick,
}

impl Trip {
    #[inline]
    pub fn distance(&self) -> u32 {
        self.from.distance(self.to)
    }

    #[inline]
    pub fn duration_ms(&self) -> u64 {
        self.arrives_at - self.departed_at
    }

    /// Fraction of the trip completed at `now`, clamped to `[0.0, 1.0]`.
    pub fn progress(&self, now: Tick) -> f32 {
        let total = self.duration_ms();
        if total == 0 {
            return 1.0;
        }
        let elapsed = now.since(self.departed_at) as f32;
        (elapsed / total as f32).clamp(0.0, 1.0)
    }

    /// Interpolated floor position at `now` (e.g. `2.5` = halfway 2→3).
    pub fn position(&self, now: Tick) -> f32 {
        let from = self.from.0 as f32;
        let to = self.to.0 as f32;
        from + (to - from) * self.progress(now)
    }
}

/// Which phase of the Idle → Moving → Dwelling cycle the car is in.
///
/// `Dwelling` keeps the trip that just completed so that the dwell timer it
/// armed can be matched against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPhase {
    #[default]
    Idle,
    Moving(Trip),
    Dwelling(Trip),
}
