//! Simulation observer trait and the typed event stream behind it.

use lift_core::{Floor, Tick};
use lift_motion::Trip;

use crate::{LogEntry, Snapshot};

/// A completed trip, as reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRecord {
    pub trip:       Trip,
    pub arrived_at: Tick,
    /// Request-to-arrival time of the request this trip served.
    pub wait_ms:    Option<u64>,
}

/// Something the simulator wants the outside world to know about.
///
/// Events are buffered inside the `Sim` as they happen and handed to a
/// [`SimObserver`] by `Sim::flush` (which `advance_to`, `execute`, and
/// `run_script` call for you), or pulled with `Sim::take_events`.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    Log(LogEntry),
    TripStarted(Trip),
    Position {
        at:       Tick,
        progress: f32,
        position: f32,
    },
    Arrived {
        at:    Tick,
        floor: Floor,
    },
    TripCompleted(TripRecord),
    Metrics(Box<Snapshot>),
}

impl SimEvent {
    /// Invoke the matching observer callback.
    pub fn deliver<O: SimObserver + ?Sized>(&self, observer: &mut O) {
        match self {
            SimEvent::Log(entry)         => observer.on_log(entry),
            SimEvent::TripStarted(trip)  => observer.on_trip_start(trip),
            SimEvent::Position { at, progress, position } => {
                observer.on_position_update(*at, *progress, *position)
            }
            SimEvent::Arrived { at, floor } => observer.on_arrived(*at, *floor),
            SimEvent::TripCompleted(rec) => observer.on_trip_end(rec),
            SimEvent::Metrics(snapshot)  => observer.on_metrics(snapshot),
        }
    }
}

/// Callbacks for renderers, recorders, and output writers.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct Console;
///
/// impl SimObserver for Console {
///     fn on_arrived(&mut self, at: Tick, floor: Floor) {
///         println!("{at}: doors open at {floor}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// An operator log line was recorded.
    fn on_log(&mut self, _entry: &LogEntry) {}

    /// The car left a floor.
    fn on_trip_start(&mut self, _trip: &Trip) {}

    /// The car moved.  `progress` is the fraction of the current trip in
    /// `[0, 1]`; `position` is the interpolated fractional floor.
    fn on_position_update(&mut self, _at: Tick, _progress: f32, _position: f32) {}

    /// The car reached `floor` and opened its doors.
    fn on_arrived(&mut self, _at: Tick, _floor: Floor) {}

    /// Called right after `on_arrived` with the trip's bookkeeping.
    fn on_trip_end(&mut self, _record: &TripRecord) {}

    /// Periodic metrics tick (every `metrics_interval_ms`).
    fn on_metrics(&mut self, _snapshot: &Snapshot) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
