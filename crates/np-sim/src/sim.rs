//! The `MeshSim` struct and its tick loop.

use np_core::{MeshConfig, NodeId, SimRng, Tick, TickClock};
use np_graph::{PathFinder, ProximityGraph};
use np_transmit::TransmissionScheduler;

use crate::{MeshObserver, NodeStore, SimResult, SpawnOutcome, SpawnTrigger};

// ── TickSummary ───────────────────────────────────────────────────────────────

/// Counters for one processed tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSummary {
    pub tick:      Tick,
    /// `false` if the tick was skipped because the host was hidden.
    pub visible:   bool,
    /// Transmissions in flight after the tick.
    pub active:    usize,
    /// Transmissions whose active segment moved.
    pub advanced:  usize,
    /// Transmissions reaped this tick.
    pub completed: usize,
    pub spawn:     SpawnOutcome,
}

// ── MeshSim ───────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `MeshSim<P>` owns the node field, the transmission scheduler and the spawn
/// trigger, and drives them one tick at a time.  `&mut self` on every step
/// means a tick can never re-enter itself; renderers read through `&self`
/// between steps.
///
/// Create via [`MeshSimBuilder`][crate::MeshSimBuilder].
pub struct MeshSim<P: PathFinder> {
    /// Global configuration (threshold, speed, spawn bounds, …).
    pub config: MeshConfig,

    /// Tick counter.
    pub clock: TickClock,

    /// Node positions and velocities.
    pub nodes: NodeStore,

    /// In-flight transmissions.
    pub scheduler: TransmissionScheduler,

    /// Search algorithm used for spawns.
    pub finder: P,

    pub(crate) rng:     SimRng,
    pub(crate) trigger: SpawnTrigger,

    visible:               bool,
    transmissions_enabled: bool,
    alpha:                 f32,
}

impl<P: PathFinder> MeshSim<P> {
    pub(crate) fn new(
        config:    MeshConfig,
        nodes:     NodeStore,
        scheduler: TransmissionScheduler,
        finder:    P,
        mut rng:   SimRng,
    ) -> Self {
        let mut trigger = SpawnTrigger::new(
            config.spawn_period_min_ticks,
            config.spawn_period_max_ticks,
            Tick::ZERO,
        );
        trigger.reschedule(Tick::ZERO, &mut rng);
        Self {
            clock: TickClock::new(config.update_period_ms),
            config,
            nodes,
            scheduler,
            finder,
            rng,
            trigger,
            visible: true,
            transmissions_enabled: true,
            alpha: 0.0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.total_ticks`.
    pub fn run<O: MeshObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < Tick(self.config.total_ticks) {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).
    pub fn run_ticks<O: MeshObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Process one tick and advance the clock.
    pub fn step<O: MeshObserver>(&mut self, observer: &mut O) -> SimResult<TickSummary> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let summary = self.process_tick(now, observer)?;
        observer.on_tick_end(now, &summary);

        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.nodes, &self.scheduler);
        }

        self.clock.advance();
        Ok(summary)
    }

    /// Mark the host as visible or hidden.  While hidden, ticks do nothing
    /// and due spawns are dropped.
    pub fn set_visible(&mut self, visible: bool) {
        if visible != self.visible {
            log::debug!("visibility → {visible} at {}", self.clock.current_tick);
        }
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Enable or disable spawning without stopping in-flight transmissions.
    pub fn set_transmissions_enabled(&mut self, enabled: bool) {
        self.transmissions_enabled = enabled;
    }

    pub fn transmissions_enabled(&self) -> bool {
        self.transmissions_enabled
    }

    /// Global fade-in alpha in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Proximity graph over the current node positions.
    pub fn graph(&self) -> ProximityGraph<'_> {
        ProximityGraph::new(&self.nodes.positions, self.config.max_conn_distance)
    }

    /// Repopulate a `width × height` field, dropping every in-flight
    /// transmission (their node indices would be meaningless) and restarting
    /// the fade-in.
    pub fn reset(&mut self, width: f32, height: f32) {
        self.config.width = width;
        self.config.height = height;
        self.nodes.populate(
            width,
            height,
            self.config.node_density,
            self.config.velocity_factor,
            &mut self.rng,
        );
        self.scheduler.clear();
        self.alpha = 0.0;
        self.trigger.reschedule(self.clock.current_tick, &mut self.rng);
        log::info!("reset to {width}×{height}: {} nodes", self.nodes.count());
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: MeshObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<TickSummary> {
        if !self.visible {
            let spawn = if self.trigger.is_due(now) {
                self.trigger.reschedule(now, &mut self.rng);
                SpawnOutcome::Suppressed
            } else {
                SpawnOutcome::NotDue
            };
            return Ok(TickSummary {
                tick: now,
                visible: false,
                active: self.scheduler.len(),
                advanced: 0,
                completed: 0,
                spawn,
            });
        }

        // ── Phase 1: kinematics ───────────────────────────────────────────
        self.nodes.update();

        // ── Phase 2: advance, then reap ───────────────────────────────────
        let outcome = self.scheduler.tick();

        // ── Phase 3: fade-in ──────────────────────────────────────────────
        self.alpha = (self.alpha + 1.0 / self.config.fade_in_ticks as f32).min(1.0);

        // ── Phase 4: spawn ────────────────────────────────────────────────
        let spawn = if self.trigger.is_due(now) {
            self.trigger.reschedule(now, &mut self.rng);
            self.try_spawn(now, observer)?
        } else {
            SpawnOutcome::NotDue
        };

        Ok(TickSummary {
            tick: now,
            visible: true,
            active: self.scheduler.len(),
            advanced: outcome.advanced,
            completed: outcome.completed.len(),
            spawn,
        })
    }

    /// Pick two distinct nodes and spawn a transmission along the current
    /// shortest path between them.  Unreachable pairs are skipped.
    fn try_spawn<O: MeshObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<SpawnOutcome> {
        if !self.transmissions_enabled {
            return Ok(SpawnOutcome::Suppressed);
        }
        let Some((a, b)) = self.rng.distinct_pair(self.nodes.count()) else {
            return Ok(SpawnOutcome::TooFewNodes);
        };
        // The store caps its population at MAX_NODES, so both indices fit.
        let (start, target) = (NodeId(a as u32), NodeId(b as u32));

        let graph = ProximityGraph::new(&self.nodes.positions, self.config.max_conn_distance);
        let path = match self.finder.shortest_path(&graph, start, target) {
            Ok(path) => path,
            Err(e) => {
                log::debug!("{now}: spawn skipped: {e}");
                return Ok(SpawnOutcome::NoPath);
            }
        };

        let mix = self.rng.random::<f32>();
        let id = self.scheduler.spawn(&path.nodes, mix)?;
        log::debug!("{now}: spawned {id} over {} hops", path.hops());
        if let Some(t) = self.scheduler.get(id) {
            observer.on_spawn(now, t);
        }
        Ok(SpawnOutcome::Spawned(id))
    }
}
