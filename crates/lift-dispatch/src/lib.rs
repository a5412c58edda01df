//! `lift-dispatch`: pending requests and the choice of the next stop.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`queue`]      | `Request`, `RequestQueue`, `Admission`                  |
//! | [`policy`]     | `DispatchPolicy` trait, `DirectionalScan`               |
//! | [`dispatcher`] | `Dispatcher<P>`: picks a target and starts the trip     |
//!
//! # Scan ordering
//!
//! `DirectionalScan` sorts the *whole* pending set by the car's current
//! direction: ascending for `Up` and `Idle`, descending for `Down`.  It does
//! not first finish same-direction stops and then reverse; a request behind
//! the car is simply sorted into the same sweep.
//!
//! ```text
//! car at 3, Up,   pending {1, 5, 4}  →  [1, 4, 5]
//! car at 3, Down, pending {1, 5, 4}  →  [5, 4, 1]
//! ```

pub mod dispatcher;
pub mod policy;
pub mod queue;

#[cfg(test)]
mod tests;

pub use dispatcher::Dispatcher;
pub use policy::{DirectionalScan, DispatchPolicy};
pub use queue::{Admission, Request, RequestQueue};
