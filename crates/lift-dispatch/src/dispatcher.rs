//! Choosing the next stop and starting the trip.

use log::{debug, warn};

use lift_core::{Floor, Modes, Tick};
use lift_motion::{MotionEngine, MotionError, Trip};

use crate::{DirectionalScan, DispatchPolicy, RequestQueue};

/// Wraps a [`DispatchPolicy`] and applies it to the queue.
///
/// # Type parameter
///
/// `P` defaults to [`DirectionalScan`].  Swap it at compile time for a
/// different ordering with no runtime overhead.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher<P: DispatchPolicy = DirectionalScan> {
    pub policy: P,
}

impl<P: DispatchPolicy> Dispatcher<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// The floor dispatch would pick, without starting anything.
    ///
    /// `None` if the car is moving, nothing is pending, or a mode is on.
    pub fn next_target(&self, queue: &RequestQueue, engine: &MotionEngine, modes: Modes) -> Option<Floor> {
        if engine.is_moving() || queue.is_empty() || modes.any_active() {
            return None;
        }
        queue
            .peek_ordered(&self.policy, engine.car().direction)
            .first()
            .copied()
    }

    /// Pick the next target and start a trip to it.
    ///
    /// Idempotent: returns `None` and changes nothing whenever
    /// [`next_target`][Self::next_target] does.
    pub fn dispatch(
        &self,
        queue:        &RequestQueue,
        engine:       &mut MotionEngine,
        modes:        Modes,
        now:          Tick,
        ms_per_floor: u64,
    ) -> Option<Trip> {
        let target = self.next_target(queue, engine, modes)?;
        match engine.begin_trip(target, now, ms_per_floor) {
            Ok(trip) => {
                debug!("dispatch: {} → {} ({} ms)", trip.from, trip.to, trip.duration_ms());
                Some(trip)
            }
            // The queue never holds the current floor, so this means the
            // caller broke that invariant.
            Err(e @ MotionError::ZeroDistance(_)) => {
                warn!("dispatch skipped: {e}");
                None
            }
            Err(e @ MotionError::AlreadyMoving(_)) => {
                debug!("dispatch skipped: {e}");
                None
            }
        }
    }
}
