//! Plain data row types written by output backends.

use lift_core::Direction;

/// One completed trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRow {
    pub trip_id:     u64,
    pub from_floor:  u8,
    pub to_floor:    u8,
    pub direction:   Direction,
    pub departed_ms: u64,
    pub arrived_ms:  u64,
    /// Empty in the file when the arrival served no pending request.
    pub wait_ms:     Option<u64>,
}

/// One periodic metrics sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsRow {
    pub tick:                u64,
    pub unix_time_ms:        i64,
    pub floor:               u8,
    pub status:              &'static str,
    pub queue_len:           u32,
    pub total_trips:         u64,
    pub average_wait_secs:   u64,
    pub energy:              f64,
    pub estimated_wait_secs: u64,
}

/// One operator log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub tick:         u64,
    pub unix_time_ms: i64,
    pub message:      String,
}
