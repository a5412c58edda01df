//! Simulator configuration and boundary validation.

use crate::{ConfigError, Floor, Rejection};

/// Smallest building the simulator accepts.
pub const MIN_FLOORS: u8 = 5;
/// Largest building the simulator accepts.
pub const MAX_FLOORS: u8 = 20;
/// Slowest travel time per floor the simulator accepts: one floor a minute.
pub const MAX_MS_PER_FLOOR: u64 = 60_000;

/// Top-level simulator configuration.
///
/// Typically built in code by the application crate, or deserialized from
/// JSON/TOML with the `serde` feature, then passed to `SimBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LiftConfig {
    /// Number of floors, in `[MIN_FLOORS, MAX_FLOORS]`.  Changing it requires
    /// a reset.
    pub floor_count: u8,

    /// Travel time per floor in milliseconds, in `1..=MAX_MS_PER_FLOOR`.
    pub ms_per_floor: u64,

    /// Door-open pause after each arrival.
    pub dwell_ms: u64,

    /// Cadence of the periodic metrics tick (`SimObserver::on_metrics`).
    pub metrics_interval_ms: u64,

    /// Cadence of the floors-per-minute display gauge.
    pub speed_interval_ms: u64,

    /// Cadence of position updates while the car is moving.
    pub frame_interval_ms: u64,

    /// Number of operator log lines retained (newest first).
    pub log_capacity: usize,

    /// Unix timestamp for tick 0.
    pub start_unix_secs: i64,
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self {
            floor_count:         6,
            ms_per_floor:        1_000,
            dwell_ms:            1_000,
            metrics_interval_ms: 1_000,
            speed_interval_ms:   500,
            frame_interval_ms:   100,
            log_capacity:        50,
            start_unix_secs:     0,
        }
    }
}

impl LiftConfig {
    /// Check every bound.  Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_floor_count(self.floor_count as u32)?;
        validate_speed(self.ms_per_floor)?;
        for (name, value) in [
            ("dwell_ms", self.dwell_ms),
            ("metrics_interval_ms", self.metrics_interval_ms),
            ("speed_interval_ms", self.speed_interval_ms),
            ("frame_interval_ms", self.frame_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroInterval(name));
            }
        }
        Ok(())
    }

    /// Resolve a raw floor number against this building.
    pub fn floor(&self, n: u32) -> Result<Floor, Rejection> {
        if n == 0 || n > self.floor_count as u32 {
            return Err(Rejection::FloorOutOfRange {
                floor:       n,
                floor_count: self.floor_count,
            });
        }
        Ok(Floor(n as u8))
    }
}

/// Accept `n` as a floor count, or explain why not.
pub fn validate_floor_count(n: u32) -> Result<u8, ConfigError> {
    if (MIN_FLOORS as u32..=MAX_FLOORS as u32).contains(&n) {
        Ok(n as u8)
    } else {
        Err(ConfigError::FloorCount(n))
    }
}

/// Accept `ms` as a per-floor travel time, or explain why not.
pub fn validate_speed(ms: u64) -> Result<u64, ConfigError> {
    if (1..=MAX_MS_PER_FLOOR).contains(&ms) {
        Ok(ms)
    } else {
        Err(ConfigError::Speed(ms))
    }
}
