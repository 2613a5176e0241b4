//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `transmission_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, TickSummaryRow, TransmissionSnapshotRow};

pub const SNAPSHOT_HEADER: [&str; 11] = [
    "transmission_id", "tick", "hop", "hop_count", "from_node", "to_node",
    "fraction", "x", "y", "opacity", "mix",
];

pub const SUMMARY_HEADER: [&str; 7] =
    ["tick", "elapsed_ms", "visible", "active", "advanced", "completed", "spawned_id"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("transmission_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[TransmissionSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.transmission_id.to_string(),
                row.tick.to_string(),
                row.hop.to_string(),
                row.hop_count.to_string(),
                row.from_node.to_string(),
                row.to_node.to_string(),
                format!("{:.4}", row.fraction),
                format!("{:.2}", row.x),
                format!("{:.2}", row.y),
                format!("{:.4}", row.opacity),
                format!("{:.4}", row.mix),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        let spawned = if row.spawned_id == u64::MAX { String::new() } else { row.spawned_id.to_string() };
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_ms.to_string(),
            (row.visible as u8).to_string(),
            row.active.to_string(),
            row.advanced.to_string(),
            row.completed.to_string(),
            spawned,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
