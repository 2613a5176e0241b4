//! `MeshOutputObserver<W>` — bridges `MeshObserver` to an `OutputWriter`.

use np_core::{MeshConfig, Tick, TransmissionId};
use np_sim::{MeshObserver, NodeStore, SpawnOutcome, TickSummary};
use np_transmit::TransmissionScheduler;

use crate::row::{TickSummaryRow, TransmissionSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`MeshObserver`] that writes transmission snapshots and tick summaries
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `MeshObserver`
/// methods have no return value.  After `sim.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct MeshOutputObserver<W: OutputWriter> {
    writer:           W,
    update_period_ms: u64,
    last_error:       Option<OutputError>,
}

impl<W: OutputWriter> MeshOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for tick to
    /// millisecond conversion.
    pub fn new(writer: W, config: &MeshConfig) -> Self {
        Self {
            writer,
            update_period_ms: config.update_period_ms as u64,
            last_error:       None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
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

impl<W: OutputWriter> MeshObserver for MeshOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        let spawned_id = match summary.spawn {
            SpawnOutcome::Spawned(id) => id,
            _ => TransmissionId::INVALID,
        };
        let row = TickSummaryRow {
            tick:       tick.0,
            elapsed_ms: tick.0 * self.update_period_ms,
            visible:    summary.visible,
            active:     summary.active as u64,
            advanced:   summary.advanced as u64,
            completed:  summary.completed as u64,
            spawned_id: spawned_id.0,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, nodes: &NodeStore, transmissions: &TransmissionScheduler) {
        let rows: Vec<TransmissionSnapshotRow> = transmissions
            .iter()
            .filter_map(|t| {
                let hop = t.active_segment()?;
                let marker = t.marker_position(&nodes.positions)?;
                Some(TransmissionSnapshotRow {
                    transmission_id: t.id().0,
                    tick:            tick.0,
                    hop:             hop.index as u32,
                    hop_count:       (t.len() - 1) as u32,
                    from_node:       hop.from.0,
                    to_node:         hop.to.0,
                    fraction:        hop.fraction,
                    x:               marker.x,
                    y:               marker.y,
                    opacity:         t.opacity(),
                    mix:             t.mix(),
                })
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
