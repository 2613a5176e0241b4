//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, TickSummaryRow, TransmissionSnapshotRow};

/// Sink for transmission snapshots and per-tick summaries.
///
/// Errors are stored by the observer and retrieved with
/// [`MeshOutputObserver::take_error`][crate::MeshOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of transmission snapshots.
    fn write_snapshots(&mut self, rows: &[TransmissionSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.  Safe to call twice.
    fn finish(&mut self) -> OutputResult<()>;
}
