//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter where one tick is one
//! simulated millisecond.  The mapping to wall-clock time is held in
//! `SimClock`:
//!
//!   wall_time_ms = start_unix_secs * 1000 + tick
//!
//! Integer milliseconds keep every trip and dwell computation exact, and the
//! clock only moves forward when the timer queue says something is due.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation time in milliseconds since the start of the process.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Unix time in milliseconds of this tick, given the Unix second of tick 0.
    #[inline]
    pub fn unix_ms(self, start_unix_secs: i64) -> i64 {
        start_unix_secs.saturating_mul(1_000).saturating_add(self.0 as i64)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0.saturating_add(rhs))
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation's notion of "now".
///
/// Only the run loop advances the clock, and only forward.  Everything else
/// reads `current_tick`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Unix timestamp (seconds since epoch) of tick 0.
    pub start_unix_secs: i64,
    pub current_tick:    Tick,
}

impl SimClock {
    pub fn new(start_unix_secs: i64) -> Self {
        Self {
            start_unix_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Move the clock to `tick`.  Ticks in the past are ignored.
    #[inline]
    pub fn advance_to(&mut self, tick: Tick) {
        if tick > self.current_tick {
            self.current_tick = tick;
        }
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.current_tick
    }

    /// Break `tick` into (hours, minutes, seconds, millis) from tick 0.
    /// Used for human-readable log timestamps without a datetime library.
    pub fn hms(tick: Tick) -> (u64, u32, u32, u32) {
        let ms = tick.0;
        let hours = ms / 3_600_000;
        let minutes = ((ms % 3_600_000) / 60_000) as u32;
        let seconds = ((ms % 60_000) / 1_000) as u32;
        let millis = (ms % 1_000) as u32;
        (hours, minutes, seconds, millis)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s, ms) = Self::hms(self.current_tick);
        write!(f, "{} ({:02}:{:02}:{:02}.{:03})", self.current_tick, h, m, s, ms)
    }
}
