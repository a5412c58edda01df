//! `lift-motion`: car state and the motion state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`state`]   | `CarState`, `Trip`, `MotionPhase`                         |
//! | [`engine`]  | `MotionEngine`: guarded Idle/Moving/Dwelling transitions  |
//! | [`error`]   | `MotionError`, `MotionResult<T>`                          |
//!
//! # Movement model (teleport at arrival)
//!
//! 1. `MotionEngine::begin_trip` fixes the trip's total duration once,
//!    `distance * ms_per_floor`, and records `arrives_at`.  Later speed
//!    changes never touch a trip already in flight.
//! 2. `car.current_floor` stays at the departure floor for the whole trip.
//! 3. `MotionEngine::arrive(trip)` moves the car to the target and enters
//!    `Dwelling`; `MotionEngine::finish_dwell(trip)` returns to `Idle`.
//! 4. `MotionEngine::halt` freezes the car in place from any phase.
//!
//! `arrive` and `finish_dwell` take the id of the trip whose timer fired.
//! If the engine has since moved on (halted, or started a newer trip) the
//! call is a no-op and returns `None` / `false`.
//!
//! For rendering, `MotionEngine::position(now)` interpolates a fractional
//! floor between departure and target.

pub mod engine;
pub mod error;
pub mod state;

#[cfg(test)]
mod tests;

pub use engine::MotionEngine;
pub use error::{MotionError, MotionResult};
pub use state::{CarState, MotionPhase, Trip};
