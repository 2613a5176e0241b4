//! headless — run the mesh animation without a renderer.
//!
//! Usage: `headless [config.toml] [output-dir]`
//!
//! Loads a `MeshConfig` from TOML (defaults if no path is given), runs
//! `total_ticks` ticks with a simulated hidden-tab window in the middle, and
//! writes transmission snapshots and tick summaries as CSV.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use env_logger::Builder;
use log::{LevelFilter, info};

use np_core::{MeshConfig, Tick};
use np_output::{CsvWriter, MeshOutputObserver, OutputWriter};
use np_sim::{MeshObserver, MeshSimBuilder, NodeStore, SpawnOutcome, TickSummary};
use np_transmit::{Transmission, TransmissionScheduler};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUTPUT_DIR: &str = "output/headless";

/// Fraction of the run, as `[start, end)`, during which the host is hidden.
const HIDDEN_WINDOW: (f64, f64) = (0.4, 0.5);

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<MeshConfig> {
    let Some(path) = path else {
        return Ok(MeshConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: MeshConfig = toml::from_str(&content)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         MeshOutputObserver<W>,
    spawns:        usize,
    suppressed:    usize,
    no_path:       usize,
    longest_path:  usize,
    snapshot_rows: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: MeshOutputObserver<W>) -> Self {
        Self { inner, spawns: 0, suppressed: 0, no_path: 0, longest_path: 0, snapshot_rows: 0 }
    }
}

impl<W: OutputWriter> MeshObserver for CountingObserver<W> {
    fn on_spawn(&mut self, tick: Tick, transmission: &Transmission) {
        self.spawns += 1;
        self.longest_path = self.longest_path.max(transmission.len());
        self.inner.on_spawn(tick, transmission);
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        match summary.spawn {
            SpawnOutcome::Suppressed => self.suppressed += 1,
            SpawnOutcome::NoPath => self.no_path += 1,
            _ => {}
        }
        self.inner.on_tick_end(tick, summary);
    }

    fn on_snapshot(&mut self, tick: Tick, nodes: &NodeStore, transmissions: &TransmissionScheduler) {
        self.snapshot_rows += transmissions.len();
        self.inner.on_snapshot(tick, nodes, transmissions);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    let config = load_config(config_path.as_deref())?;
    info!(
        "field {}×{}, {} ticks of {} ms, strategy {:?}",
        config.width, config.height, config.total_ticks, config.update_period_ms, config.path_strategy,
    );

    let mut sim = MeshSimBuilder::from_config(config.clone()).build()?;
    let graph_edges = sim.graph().edges().len();
    println!("Mesh: {} nodes, {} links at start", sim.nodes.count(), graph_edges);

    let writer = CsvWriter::new(&output_dir)?;
    let mut obs = CountingObserver::new(MeshOutputObserver::new(writer, &config));

    let total = config.total_ticks;
    let hide_from = (total as f64 * HIDDEN_WINDOW.0) as u64;
    let hide_to = (total as f64 * HIDDEN_WINDOW.1) as u64;

    let t0 = Instant::now();
    while sim.clock.current_tick < Tick(total) {
        let now = sim.clock.current_tick.0;
        sim.set_visible(!(hide_from..hide_to).contains(&now));
        sim.step(&mut obs)?;
    }
    obs.on_sim_end(sim.clock.current_tick);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulated {} in {:.3} s", sim.clock, elapsed.as_secs_f64());
    println!(
        "  spawned {}  completed {}  in flight {}",
        sim.scheduler.spawned_total(),
        sim.scheduler.completed_total(),
        sim.scheduler.len(),
    );
    println!(
        "  spawn attempts: {} ok, {} no path, {} suppressed (hidden ticks {}..{})",
        obs.spawns, obs.no_path, obs.suppressed, hide_from, hide_to,
    );
    println!(
        "  longest path: {} nodes ({} ticks per hop, {} ms)",
        obs.longest_path,
        config.ticks_per_hop(),
        config.ticks_per_hop() * config.update_period_ms as u64,
    );
    println!("  output: {} ({} snapshot rows)", output_dir.display(), obs.snapshot_rows);
    println!();

    println!("{:<8} {:<6} {:<10} {:<8}", "Id", "Hop", "Opacity", "Marker");
    println!("{}", "-".repeat(40));
    for t in sim.scheduler.iter().take(10) {
        let hop = t.active_segment().map_or(0, |h| h.index);
        let marker = t
            .marker_position(&sim.nodes.positions)
            .map_or_else(|| "-".to_owned(), |p| p.to_string());
        println!("{:<8} {:<6} {:<10.3} {:<8}", t.id().0, hop, t.opacity(), marker);
    }

    Ok(())
}
