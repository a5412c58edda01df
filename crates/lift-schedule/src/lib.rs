//! `lift-schedule`: timers, call scripts, and synthetic traffic.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`timer`]    | `TimerQueue<E>` (`BTreeMap<Tick, VecDeque<Timer<E>>>`)     |
//! | [`script`]   | `ScriptedCommand`, `CallScript`                            |
//! | [`loader`]   | `load_script_csv`, `load_script_reader`                    |
//! | [`traffic`]  | `RandomTraffic`: seeded passenger call generator           |
//! | [`error`]    | `ScheduleError`, `ScheduleResult<T>`                       |
//!
//! # Timer model (summary)
//!
//! The timer queue is the simulator's only source of control flow.  Callers
//! arm one-shot timers with `schedule(now, delay, event)` and repeating ones
//! with `schedule_periodic(now, interval, event)`; the run loop repeatedly
//! pops the earliest due timer with `pop_due(until)`.  There is no cancel:
//! whoever handles a fired event re-checks whether it still applies.

pub mod error;
pub mod loader;
pub mod script;
pub mod timer;
pub mod traffic;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_script_csv, load_script_reader};
pub use script::{CallScript, ScriptedCommand};
pub use timer::TimerQueue;
pub use traffic::RandomTraffic;
