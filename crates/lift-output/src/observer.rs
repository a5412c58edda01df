//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use lift_core::LiftConfig;
use lift_sim::{LogEntry, SimObserver, Snapshot, TripRecord};

use crate::row::{EventRow, MetricsRow, TripRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes trips, metrics samples, and log lines to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  When the run is over, call
/// [`finish`][Self::finish] to flush the writer and surface the first error.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:          W,
    start_unix_secs: i64,
    last_error:      Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for wall-clock
    /// conversion.
    pub fn new(writer: W, config: &LiftConfig) -> Self {
        Self {
            writer,
            start_unix_secs: config.start_unix_secs,
            last_error:      None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes so far succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Returns the first stored write error, if any, in
    /// preference to the flush result.
    pub fn finish(&mut self) -> OutputResult<()> {
        let flushed = self.writer.finish();
        match self.last_error.take() {
            Some(e) => Err(e),
            None => flushed,
        }
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_log(&mut self, entry: &LogEntry) {
        let row = EventRow {
            tick:         entry.at.0,
            unix_time_ms: entry.at.unix_ms(self.start_unix_secs),
            message:      entry.message.clone(),
        };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn on_trip_end(&mut self, record: &TripRecord) {
        let trip = &record.trip;
        let row = TripRow {
            trip_id:     trip.id.0,
            from_floor:  trip.from.0,
            to_floor:    trip.to.0,
            direction:   trip.direction,
            departed_ms: trip.departed_at.0,
            arrived_ms:  record.arrived_at.0,
            wait_ms:     record.wait_ms,
        };
        let result = self.writer.write_trip(&row);
        self.store_err(result);
    }

    fn on_metrics(&mut self, snapshot: &Snapshot) {
        let row = MetricsRow {
            tick:                snapshot.at.0,
            unix_time_ms:        snapshot.at.unix_ms(self.start_unix_secs),
            floor:               snapshot.current_floor.0,
            status:              snapshot.status.label(),
            queue_len:           snapshot.queue_floors.len() as u32,
            total_trips:         snapshot.stats.total_trips,
            average_wait_secs:   snapshot.average_wait_secs,
            energy:              snapshot.energy_display,
            estimated_wait_secs: snapshot.estimated_wait_secs,
        };
        let result = self.writer.write_metrics(&row);
        self.store_err(result);
    }
}
