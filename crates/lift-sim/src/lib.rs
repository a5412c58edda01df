//! `lift-sim`: the elevator simulator's single owned aggregate.
//!
//! # Event loop
//!
//! ```text
//! external command ─▶ Sim::apply ─▶ RequestQueue ─▶ Dispatcher ─▶ MotionEngine
//!                                                                    │
//!                timers ◀── arrival / dwell scheduled ◀──────────────┘
//!                  │
//! Sim::advance_to ─┴▶ handle timer (guarded) ─▶ Stats ─▶ events ─▶ SimObserver
//! ```
//!
//! Every timer carries what it needs to re-check itself when it fires:
//!
//! | Timer          | Fires                         | Guard                             |
//! |----------------|-------------------------------|-----------------------------------|
//! | `Arrival(id)`  | `distance * ms_per_floor`     | no mode on, trip `id` still moving |
//! | `Dwell(id)`    | `dwell_ms` after arrival      | no mode on, still dwelling after `id` |
//! | `MetricsTick`  | every `metrics_interval_ms`   | —                                 |
//! | `SpeedTick`    | every `speed_interval_ms`     | —                                 |
//! | `Frame`        | every `frame_interval_ms`     | car moving                        |
//!
//! A timer whose guard fails is a stale fire: counted, logged at debug
//! level, and otherwise ignored.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{LiftConfig, Tick};
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(LiftConfig::default()).build()?;
//! sim.submit_request(4).ok();
//! sim.advance_to(Tick(3_000), &mut NoopObserver);
//! assert_eq!(sim.car().current_floor.0, 4);
//! ```

pub mod builder;
pub mod error;
pub mod journal;
pub mod modes;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use journal::{Journal, LogEntry};
pub use modes::{ModeChange, ModeController};
pub use observer::{NoopObserver, SimEvent, SimObserver, TripRecord};
pub use sim::{ScriptReport, Sim, TimerEvent};
pub use snapshot::{PendingRequest, Snapshot, Status};
