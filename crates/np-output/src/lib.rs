//! `np-output` — simulation output writers for the node-path mesh.
//!
//! | Backend | Files created                                           |
//! |---------|---------------------------------------------------------|
//! | CSV     | `transmission_snapshots.csv`, `tick_summaries.csv`      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`MeshOutputObserver`], which implements `np_sim::MeshObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use np_output::{CsvWriter, MeshOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = MeshOutputObserver::new(writer, &config);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::MeshOutputObserver;
pub use row::{TickSummaryRow, TransmissionSnapshotRow};
pub use writer::OutputWriter;
