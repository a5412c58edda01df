//! The `DispatchPolicy` trait and the directional scan.

use lift_core::{Direction, Floor};

/// Orders pending floors for service.
///
/// The dispatcher takes the first floor of the result as its next target
/// and the wait-time estimator walks the whole result, so both always agree
/// on the service order.
pub trait DispatchPolicy {
    /// Return `pending` in service order for a car heading `direction`.
    fn order(&self, pending: &[Floor], direction: Direction) -> Vec<Floor>;
}

/// Serve the whole queue in one sweep in the current direction.
///
/// Ascending for `Up` and `Idle`, descending for `Down`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionalScan;

impl DispatchPolicy for DirectionalScan {
    fn order(&self, pending: &[Floor], direction: Direction) -> Vec<Floor> {
        let mut ordered = pending.to_vec();
        if direction.scans_ascending() {
            ordered.sort_unstable();
        } else {
            ordered.sort_unstable_by(|a, b| b.cmp(a));
        }
        ordered
    }
}
