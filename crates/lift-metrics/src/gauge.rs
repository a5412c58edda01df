//! Live floors-per-minute display value.

/// A display-only speed reading, refreshed on its own cadence.
///
/// The value lags reality by up to one refresh interval in both directions;
/// it is never used for timing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpeedGauge {
    floors_per_minute: u32,
}

impl SpeedGauge {
    /// Refresh from the car's state: `round(60000 / ms_per_floor)` while
    /// moving, otherwise 0.
    pub fn sample(&mut self, moving: bool, ms_per_floor: u64) {
        self.floors_per_minute = if moving && ms_per_floor > 0 {
            (60_000.0 / ms_per_floor as f64).round() as u32
        } else {
            0
        };
    }

    /// Drop to zero immediately (arrival, halt, reset).
    pub fn stop(&mut self) {
        self.floors_per_minute = 0;
    }

    /// The last sampled reading.
    pub fn floors_per_minute(&self) -> u32 {
        self.floors_per_minute
    }
}
