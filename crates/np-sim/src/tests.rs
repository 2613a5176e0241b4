//! Integration tests for np-sim.

use np_core::{MeshConfig, NodeId, PathStrategy, Point, SimRng, Tick, Velocity};
use np_graph::DijkstraPathFinder;
use np_transmit::{COMPLETE, Transmission};

use crate::{MeshObserver, MeshSim, MeshSimBuilder, NodeStore, NoopObserver, SpawnOutcome, TickSummary};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Deterministic config: spawn attempt every tick, 4 ticks per hop.
fn test_config(total_ticks: u64) -> MeshConfig {
    MeshConfig {
        width:                   100.0,
        height:                  100.0,
        max_conn_distance:       15.0,
        transmission_speed:      25.0,
        spawn_period_min_ticks:  1,
        spawn_period_max_ticks:  1,
        fade_in_ticks:           10,
        total_ticks,
        snapshot_interval_ticks: 5,
        ..MeshConfig::default()
    }
}

/// `n` stationary nodes in a horizontal line, 10 apart.  With a 15 threshold
/// every node links to its immediate neighbours only.
fn line_nodes(n: usize) -> (Vec<Point>, Vec<Velocity>) {
    let positions = (0..n).map(|i| Point::new(5.0 + 10.0 * i as f32, 50.0)).collect();
    (positions, vec![Velocity::default(); n])
}

fn line_sim(n: usize, total_ticks: u64) -> MeshSim<DijkstraPathFinder> {
    let (pos, vel) = line_nodes(n);
    MeshSimBuilder::new(test_config(total_ticks), DijkstraPathFinder)
        .nodes(pos, vel)
        .build()
        .unwrap()
}

/// Observer that records everything it is told.
#[derive(Default)]
struct Recorder {
    starts:    usize,
    summaries: Vec<TickSummary>,
    spawned:   Vec<Transmission>,
    snapshots: Vec<Tick>,
    ended:     Option<Tick>,
}

impl MeshObserver for Recorder {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.starts += 1;
    }
    fn on_spawn(&mut self, _tick: Tick, t: &Transmission) {
        self.spawned.push(t.clone());
    }
    fn on_tick_end(&mut self, _tick: Tick, summary: &TickSummary) {
        self.summaries.push(summary.clone());
    }
    fn on_snapshot(&mut self, tick: Tick, _n: &NodeStore, _t: &np_transmit::TransmissionScheduler) {
        self.snapshots.push(tick);
    }
    fn on_sim_end(&mut self, tick: Tick) {
        self.ended = Some(tick);
    }
}

fn spawn_count(summaries: &[TickSummary]) -> usize {
    summaries
        .iter()
        .filter(|s| matches!(s.spawn, SpawnOutcome::Spawned(_)))
        .count()
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn default_config_populates_by_density() {
        let sim = MeshSimBuilder::from_config(MeshConfig::default()).build().unwrap();
        // floor(1280 * 720 / 10_000 * 0.25) = floor(23.04)
        assert_eq!(sim.nodes.count(), 23);
        assert!(sim.scheduler.is_empty());
        assert_eq!(sim.alpha(), 0.0);
    }

    #[test]
    fn velocity_count_mismatch_errors() {
        let (pos, _) = line_nodes(3);
        let result = MeshSimBuilder::new(test_config(10), DijkstraPathFinder)
            .nodes(pos, vec![Velocity::default(); 2])
            .build();
        assert!(matches!(result, Err(crate::SimError::NodeCountMismatch { expected: 3, got: 2, .. })));
    }

    #[test]
    fn invalid_config_errors() {
        let config = MeshConfig { transmission_speed: 0.0, ..test_config(10) };
        assert!(MeshSimBuilder::new(config, DijkstraPathFinder).build().is_err());
    }

    #[test]
    fn greedy_strategy_selected_from_config() {
        let config = MeshConfig { path_strategy: PathStrategy::Greedy, ..test_config(10) };
        let sim = MeshSimBuilder::from_config(config).build().unwrap();
        assert!(matches!(sim.finder, np_graph::AnyPathFinder::Greedy(_)));
    }
}

// ── Kinematics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod nodes_tests {
    use super::*;

    #[test]
    fn populate_count_and_bounds() {
        let mut store = NodeStore::new(0.0, 0.0);
        let mut rng = SimRng::new(9);
        store.populate(400.0, 300.0, 1.0, 0.2, &mut rng);
        assert_eq!(store.count(), 12);
        for (p, v) in store.positions.iter().zip(&store.velocities) {
            assert!((0.0..400.0).contains(&p.x) && (0.0..300.0).contains(&p.y));
            assert_eq!(p.x, p.x.floor());
            assert!(v.dx.abs() <= 0.1 && v.dy.abs() <= 0.1);
        }
    }

    #[test]
    fn population_size_is_capped_at_node_id_range() {
        assert_eq!(crate::population_size(1280.0, 720.0, 0.25), 23);
        assert_eq!(crate::population_size(100.0, 100.0, -1.0), 0);
        assert_eq!(crate::population_size(1.0e6, 1.0e6, 1.0e6), crate::MAX_NODES);
        assert_eq!(crate::MAX_NODES, u32::MAX as usize);
    }

    #[test]
    fn oversized_population_is_rejected() {
        assert!(crate::nodes::check_population(crate::MAX_NODES).is_ok());
        assert!(matches!(
            crate::nodes::check_population(crate::MAX_NODES + 1),
            Err(crate::SimError::TooManyNodes { max, .. }) if max == crate::MAX_NODES,
        ));
    }

    #[test]
    fn nodes_bounce_off_edges() {
        let mut store = NodeStore::new(10.0, 10.0);
        store.positions = vec![Point::new(0.5, 5.0), Point::new(9.5, 5.0), Point::new(5.0, 9.8)];
        store.velocities = vec![
            Velocity::new(-1.0, 0.0),
            Velocity::new(1.0, 0.0),
            Velocity::new(0.0, 0.5),
        ];
        store.update();
        assert_eq!(store.positions[0], Point::new(1.5, 5.0));
        assert_eq!(store.velocities[0], Velocity::new(1.0, 0.0));
        assert_eq!(store.positions[1], Point::new(8.5, 5.0));
        assert!((store.positions[2].y - 9.3).abs() < 1e-5);
        assert_eq!(store.velocities[2].dy, -0.5);
    }

    #[test]
    fn nodes_stay_inside_field() {
        let mut store = NodeStore::new(0.0, 0.0);
        let mut rng = SimRng::new(4);
        store.populate(200.0, 200.0, 2.0, 3.0, &mut rng);
        for _ in 0..2_000 {
            store.update();
        }
        for p in &store.positions {
            assert!((-3.0..=203.0).contains(&p.x) && (-3.0..=203.0).contains(&p.y), "{p}");
        }
    }
}

// ── Run loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn runs_to_total_ticks_with_hooks() {
        let mut sim = line_sim(4, 12);
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(12));
        assert_eq!(rec.starts, 12);
        assert_eq!(rec.summaries.len(), 12);
        assert_eq!(rec.snapshots, vec![Tick(0), Tick(5), Tick(10)]);
        assert_eq!(rec.ended, Some(Tick(12)));
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut sim = line_sim(3, 100);
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(5));
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(8));
    }

    #[test]
    fn connected_line_spawns_every_due_tick() {
        let mut sim = line_sim(5, 100);
        let mut rec = Recorder::default();
        sim.run_ticks(10, &mut rec).unwrap();

        // First due at tick 1, then every tick.
        assert_eq!(rec.summaries[0].spawn, SpawnOutcome::NotDue);
        assert_eq!(spawn_count(&rec.summaries), 9);
        assert_eq!(rec.spawned.len(), 9);

        for t in &rec.spawned {
            let segs = t.segments();
            assert_eq!(segs[0].progress, COMPLETE);
            assert!(segs[1..].iter().all(|s| s.progress == 0.0));
            // On a line every hop is between index neighbours.
            let nodes: Vec<NodeId> = t.nodes().collect();
            for w in nodes.windows(2) {
                assert_eq!((w[0].0 as i64 - w[1].0 as i64).abs(), 1, "{nodes:?}");
            }
        }
    }

    #[test]
    fn transmissions_complete_and_are_reaped() {
        let mut sim = line_sim(3, 100);
        let mut rec = Recorder::default();
        sim.run_ticks(40, &mut rec).unwrap();
        let completed: usize = rec.summaries.iter().map(|s| s.completed).sum();
        assert!(completed > 0);
        assert_eq!(
            sim.scheduler.completed_total() + sim.scheduler.len() as u64,
            sim.scheduler.spawned_total(),
        );
    }

    #[test]
    fn disconnected_nodes_never_spawn() {
        let positions = vec![Point::new(0.0, 0.0), Point::new(90.0, 90.0)];
        let mut sim = MeshSimBuilder::new(test_config(20), DijkstraPathFinder)
            .nodes(positions, vec![Velocity::default(); 2])
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert!(sim.scheduler.is_empty());
        assert!(rec.summaries[1..].iter().all(|s| s.spawn == SpawnOutcome::NoPath));
    }

    #[test]
    fn single_node_is_too_few() {
        let mut sim = line_sim(1, 5);
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert!(rec.summaries[1..].iter().all(|s| s.spawn == SpawnOutcome::TooFewNodes));
    }

    #[test]
    fn disabled_transmissions_are_suppressed() {
        let mut sim = line_sim(4, 10);
        sim.set_transmissions_enabled(false);
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(spawn_count(&rec.summaries), 0);
        assert!(rec.summaries[1..].iter().all(|s| s.spawn == SpawnOutcome::Suppressed));
    }

    #[test]
    fn fade_in_reaches_one() {
        let mut sim = line_sim(2, 100);
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert!((sim.alpha() - 0.5).abs() < 1e-5);
        sim.run_ticks(20, &mut NoopObserver).unwrap();
        assert_eq!(sim.alpha(), 1.0);
    }

    #[test]
    fn same_seed_same_run() {
        let run = || {
            let config = MeshConfig {
                width: 300.0,
                height: 300.0,
                node_density: 2.0,
                max_conn_distance: 80.0,
                spawn_period_min_ticks: 0,
                spawn_period_max_ticks: 6,
                ..test_config(200)
            };
            let mut sim = MeshSimBuilder::from_config(config).build().unwrap();
            let mut rec = Recorder::default();
            sim.run(&mut rec).unwrap();
            (rec.summaries, sim.nodes.positions)
        };
        assert_eq!(run(), run());
    }
}

// ── Visibility & reset ────────────────────────────────────────────────────────

#[cfg(test)]
mod visibility_tests {
    use super::*;

    #[test]
    fn hidden_ticks_freeze_everything() {
        let mut sim = line_sim(4, 100);
        sim.nodes.velocities = vec![Velocity::new(0.1, 0.0); 4];
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        let active = sim.scheduler.len();
        let positions = sim.nodes.positions.clone();
        let progress: Vec<Vec<f32>> = sim
            .scheduler
            .iter()
            .map(|t| t.segments().iter().map(|s| s.progress).collect())
            .collect();

        sim.set_visible(false);
        let mut rec = Recorder::default();
        sim.run_ticks(10, &mut rec).unwrap();

        assert!(rec.summaries.iter().all(|s| !s.visible && s.advanced == 0));
        assert!(rec.summaries.iter().all(|s| s.spawn == SpawnOutcome::Suppressed));
        assert_eq!(sim.scheduler.len(), active);
        assert_eq!(sim.nodes.positions, positions);
        let after: Vec<Vec<f32>> = sim
            .scheduler
            .iter()
            .map(|t| t.segments().iter().map(|s| s.progress).collect())
            .collect();
        assert_eq!(after, progress);
    }

    #[test]
    fn missed_spawns_are_not_caught_up() {
        let config = MeshConfig { spawn_period_min_ticks: 5, spawn_period_max_ticks: 5, ..test_config(200) };
        let (pos, vel) = line_nodes(4);
        let mut sim = MeshSimBuilder::new(config, DijkstraPathFinder)
            .nodes(pos, vel)
            .build()
            .unwrap();

        sim.set_visible(false);
        sim.run_ticks(50, &mut NoopObserver).unwrap();
        assert_eq!(sim.scheduler.spawned_total(), 0);

        sim.set_visible(true);
        let mut rec = Recorder::default();
        sim.run_ticks(5, &mut rec).unwrap();
        assert_eq!(spawn_count(&rec.summaries), 1);
    }

    #[test]
    fn reset_repopulates_and_clears() {
        let mut sim = line_sim(5, 100);
        sim.run_ticks(6, &mut NoopObserver).unwrap();
        assert!(!sim.scheduler.is_empty());

        sim.reset(400.0, 200.0);
        assert!(sim.scheduler.is_empty());
        assert_eq!(sim.alpha(), 0.0);
        // floor(400 * 200 / 10_000 * 0.25) = 2
        assert_eq!(sim.nodes.count(), 2);
        assert_eq!((sim.config.width, sim.config.height), (400.0, 200.0));
    }

    #[test]
    fn graph_reflects_current_positions() {
        let mut sim = line_sim(3, 100);
        assert!(sim.graph().are_adjacent(NodeId(0), NodeId(1)));
        sim.nodes.positions[1] = Point::new(90.0, 5.0);
        assert!(!sim.graph().are_adjacent(NodeId(0), NodeId(1)));
        assert_eq!(sim.graph().edges().len(), 0);
    }
}
