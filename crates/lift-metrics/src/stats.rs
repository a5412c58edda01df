//! Run-lifetime accumulators.

use lift_core::Tick;

/// Energy proxy charged per floor travelled.
pub const ENERGY_PER_FLOOR: f64 = 0.5;

/// Monotonic counters for one run.  Replaced wholesale on reset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Completed trips (Moving → Dwelling transitions).
    pub total_trips:   u64,
    /// Sum of request-to-arrival times of served requests.
    pub total_wait_ms: u64,
    /// Accepted requests, served or not.
    pub request_count: u64,
    pub energy_usage:  f64,
    pub started_at:    Tick,
}

impl Stats {
    pub fn new(started_at: Tick) -> Self {
        Self {
            total_trips:   0,
            total_wait_ms: 0,
            request_count: 0,
            energy_usage:  0.0,
            started_at,
        }
    }

    #[inline]
    pub fn record_request(&mut self) {
        self.request_count += 1;
    }

    /// Charge energy for a trip of `floors` floors.
    #[inline]
    pub fn record_departure(&mut self, floors: u32) {
        self.energy_usage += floors as f64 * ENERGY_PER_FLOOR;
    }

    /// Count a completed trip, adding the served request's wait time if any.
    pub fn record_arrival(&mut self, wait_ms: Option<u64>) {
        self.total_trips += 1;
        if let Some(w) = wait_ms {
            self.total_wait_ms += w;
        }
    }

    /// Whole seconds of wait per accepted request, rounded down.
    ///
    /// The denominator counts every accepted request, including ones still
    /// pending or flushed by a mode change.
    pub fn average_wait_secs(&self) -> u64 {
        if self.request_count == 0 {
            return 0;
        }
        self.total_wait_ms / self.request_count / 1_000
    }

    /// Energy rounded to one decimal place for display.
    pub fn energy_rounded(&self) -> f64 {
        (self.energy_usage * 10.0).round() / 10.0
    }

    /// Whole minutes since the run started.
    pub fn uptime_minutes(&self, now: Tick) -> u64 {
        now.since(self.started_at) / 60_000
    }
}
