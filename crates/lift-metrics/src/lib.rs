//! `lift-metrics`: what the operator panel shows.
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`stats`]     | `Stats`: trip, wait, request, and energy accumulators   |
//! | [`estimate`]  | `estimate_wait_secs`: projected time to clear the queue  |
//! | [`gauge`]     | `SpeedGauge`: floors/minute display value               |
//!
//! Everything here is read-only with respect to the queue and the car:
//! estimates walk a copy of the dispatch order and never touch real state.

pub mod estimate;
pub mod gauge;
pub mod stats;


pub use estimate::{STOP_OVERHEAD_SECS, estimate_wait_secs};
pub use gauge::SpeedGauge;
pub use stats::{ENERGY_PER_FLOOR, Stats};
