//! `lift-core`: foundational types for the `rust_lift` elevator simulator.
//!
//! Every other `lift-*` crate depends on this one.  It has no `lift-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`floor`]     | `Floor`, `Direction`                                  |
//! | [`ids`]       | `TripId`                                              |
//! | [`time`]      | `Tick` (1 tick = 1 simulated ms), `SimClock`          |
//! | [`config`]    | `LiftConfig`, floor-count and speed bounds            |
//! | [`mode`]      | `Mode`, `Modes` override flags                        |
//! | [`command`]   | `Command`: the single mutation vocabulary             |
//! | [`error`]     | `ConfigError`, `Rejection`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod command;
pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod mode;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use command::Command;
pub use config::{
    LiftConfig, MAX_FLOORS, MAX_MS_PER_FLOOR, MIN_FLOORS, validate_floor_count, validate_speed,
};
pub use error::{ConfigError, Rejection};
pub use floor::{Direction, Floor};
pub use ids::TripId;
pub use mode::{Mode, Modes};
pub use time::{SimClock, Tick};
