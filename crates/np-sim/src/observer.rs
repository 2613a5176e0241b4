//! Simulation observer trait for progress reporting and data collection.

use np_core::Tick;
use np_transmit::{Transmission, TransmissionScheduler};

use crate::{NodeStore, TickSummary};

/// Callbacks invoked by [`MeshSim`][crate::MeshSim] at key points in the tick
/// loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — spawn counter
///
/// ```rust,ignore
/// struct SpawnCounter(usize);
///
/// impl MeshObserver for SpawnCounter {
///     fn on_spawn(&mut self, _tick: Tick, _t: &Transmission) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait MeshObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called right after a transmission is spawned, with its initial state.
    fn on_spawn(&mut self, _tick: Tick, _transmission: &Transmission) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`).
    ///
    /// Read-only access to node positions and every in-flight transmission,
    /// which is all a renderer or output writer needs.
    fn on_snapshot(
        &mut self,
        _tick:          Tick,
        _nodes:         &NodeStore,
        _transmissions: &TransmissionScheduler,
    ) {}

    /// Called once after the final tick of [`MeshSim::run`][crate::MeshSim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`MeshObserver`] that does nothing.
pub struct NoopObserver;

impl MeshObserver for NoopObserver {}
