//! Strongly typed identifiers.

use std::fmt;

/// Monotonic identifier of one car trip.
///
/// Every call to `MotionEngine::begin_trip` hands out a fresh id.  Timers
/// carry the id of the trip that armed them, so a timer whose trip has been
/// interrupted (or superseded) can recognise itself as stale when it fires.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripId(pub u64);

impl TripId {
    /// The id that follows `self`.
    #[inline]
    pub fn next(self) -> TripId {
        TripId(self.0 + 1)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripId({})", self.0)
    }
}
