//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `trips.csv`
//! - `metrics.csv`
//! - `events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, MetricsRow, OutputResult, TripRow};

pub const TRIP_HEADER: [&str; 7] =
    ["trip_id", "from_floor", "to_floor", "direction", "departed_ms", "arrived_ms", "wait_ms"];

pub const METRICS_HEADER: [&str; 9] = [
    "tick",
    "unix_time_ms",
    "floor",
    "status",
    "queue_len",
    "total_trips",
    "average_wait_secs",
    "energy",
    "estimated_wait_secs",
];

pub const EVENT_HEADER: [&str; 3] = ["tick", "unix_time_ms", "message"];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    trips:    Writer<File>,
    metrics:  Writer<File>,
    events:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trips = Writer::from_path(dir.join("trips.csv"))?;
        trips.write_record(TRIP_HEADER)?;

        let mut metrics = Writer::from_path(dir.join("metrics.csv"))?;
        metrics.write_record(METRICS_HEADER)?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(EVENT_HEADER)?;

        Ok(Self {
            trips,
            metrics,
            events,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trip(&mut self, row: &TripRow) -> OutputResult<()> {
        self.trips.write_record(&[
            row.trip_id.to_string(),
            row.from_floor.to_string(),
            row.to_floor.to_string(),
            row.direction.to_string(),
            row.departed_ms.to_string(),
            row.arrived_ms.to_string(),
            row.wait_ms.map(|w| w.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()> {
        self.metrics.write_record(&[
            row.tick.to_string(),
            row.unix_time_ms.to_string(),
            row.floor.to_string(),
            row.status.to_string(),
            row.queue_len.to_string(),
            row.total_trips.to_string(),
            row.average_wait_secs.to_string(),
            format!("{:.1}", row.energy),
            row.estimated_wait_secs.to_string(),
        ])?;
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            row.unix_time_ms.to_string(),
            row.message.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trips.flush()?;
        self.metrics.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
