//! Pull-based view of the whole simulator.

use lift_core::{Direction, Floor, Modes, Tick};
use lift_metrics::Stats;

/// What the operator panel shows as the car's status.
///
/// Emergency takes precedence over maintenance, which takes precedence over
/// motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Emergency,
    Maintenance,
    Moving,
    Idle,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Emergency   => "EMERGENCY",
            Status::Maintenance => "MAINTENANCE",
            Status::Moving      => "Moving",
            Status::Idle        => "Idle",
        }
    }
}

/// A pending floor and how long it has waited so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingRequest {
    pub floor:        Floor,
    pub waiting_secs: u64,
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub at:            Tick,
    pub floor_count:   u8,
    pub ms_per_floor:  u64,

    pub current_floor: Floor,
    pub target_floor:  Option<Floor>,
    pub direction:     Direction,
    pub moving:        bool,
    pub status:        Status,
    /// Interpolated fractional floor (equals `current_floor` unless moving).
    pub position:      f32,

    /// Pending floors in dispatch order.
    pub queue_floors:  Vec<Floor>,
    /// Same floors as `queue_floors`, same order, with waiting time.
    pub pending:       Vec<PendingRequest>,

    pub modes:         Modes,
    pub stats:         Stats,

    pub average_wait_secs:       u64,
    /// Energy to one decimal place.
    pub energy_display:          f64,
    pub estimated_wait_secs:     u64,
    pub speed_floors_per_minute: u32,
    pub uptime_minutes:          u64,
}
