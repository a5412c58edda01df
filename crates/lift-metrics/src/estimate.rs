//! Projected time to serve everything pending.

use lift_core::Modes;
use lift_dispatch::{DispatchPolicy, RequestQueue};
use lift_motion::MotionEngine;

/// Fixed per-stop overhead added for every queued floor.
pub const STOP_OVERHEAD_SECS: f64 = 1.0;

/// Seconds until the last pending request would be served, rounded.
///
/// Returns 0 with an empty queue or while a mode is on.  When the car is
/// moving, the remaining distance of the trip in flight is charged first and
/// the walk starts from its target; otherwise it starts from the current
/// floor.  The walk follows `policy`'s order for the car's direction, adding
/// `distance * ms_per_floor / 1000 + STOP_OVERHEAD_SECS` per stop.
pub fn estimate_wait_secs<P: DispatchPolicy + ?Sized>(
    queue:        &RequestQueue,
    engine:       &MotionEngine,
    modes:        Modes,
    ms_per_floor: u64,
    policy:       &P,
) -> u64 {
    if queue.is_empty() || modes.any_active() {
        return 0;
    }

    let secs_per_floor = ms_per_floor as f64 / 1_000.0;
    let car = engine.car();
    let mut total = 0.0;
    let mut cursor = car.current_floor;

    if let (true, Some(target)) = (car.moving, car.target_floor) {
        total += cursor.distance(target) as f64 * secs_per_floor;
        cursor = target;
    }

    for floor in queue.peek_ordered(policy, car.direction) {
        total += cursor.distance(floor) as f64 * secs_per_floor;
        total += STOP_OVERHEAD_SECS;
        cursor = floor;
    }

    total.round() as u64
}
