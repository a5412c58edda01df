//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EventRow, MetricsRow, OutputResult, TripRow};

/// Sink for the three output streams.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver]
/// because observer callbacks cannot return them.
pub trait OutputWriter {
    /// Write one completed trip.
    fn write_trip(&mut self, row: &TripRow) -> OutputResult<()>;

    /// Write one periodic metrics sample.
    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()>;

    /// Write one operator log line.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
