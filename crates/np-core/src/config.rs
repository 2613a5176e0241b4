//! Mesh configuration.
//!
//! Values only; no behavior is configured here.  Defaults are tuned for a
//! 10 ms update period on a 1280×720 canvas.  Applications load
//! this from TOML (with the `serde` feature) and call
//! [`MeshConfig::validate`] before building a simulation.

use crate::{CoreError, CoreResult};

// ── PathStrategy ──────────────────────────────────────────────────────────────

/// Which shortest-path implementation the spawn trigger uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PathStrategy {
    /// Binary-heap Dijkstra over the proximity graph.
    #[default]
    Dijkstra,
    /// Nearest-neighbour walk with a global-scan fallback, visiting nodes in
    /// walk order rather than by global minimum.
    Greedy,
}

// ── MeshConfig ────────────────────────────────────────────────────────────────

/// Top-level configuration for a mesh simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct MeshConfig {
    /// Field width; nodes bounce off `0` and `width`.
    pub width: f32,
    /// Field height; nodes bounce off `0` and `height`.
    pub height: f32,

    /// Nodes per 100×100 area unit.
    pub node_density: f32,
    /// Scale of the random per-tick velocity components.
    pub velocity_factor: f32,

    /// Proximity-graph threshold.  Two nodes are connected while they are at
    /// most this far apart.
    pub max_conn_distance: f32,

    /// Progress units (out of 100) added to the active segment per tick.
    /// One hop completes in `100 / transmission_speed` ticks.
    pub transmission_speed: f32,

    /// Lower bound of the jittered spawn period, in ticks.
    pub spawn_period_min_ticks: u64,
    /// Upper bound (inclusive) of the jittered spawn period, in ticks.
    pub spawn_period_max_ticks: u64,

    /// Ticks for the global fade-in alpha to reach 1.
    pub fade_in_ticks: u32,

    /// Search algorithm used when spawning transmissions.
    pub path_strategy: PathStrategy,

    /// Real milliseconds one tick represents.  Reporting only.
    pub update_period_ms: u32,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Ticks simulated by a full run (`MeshSim::run` in `np-sim`).
    pub total_ticks: u64,

    /// Snapshot every N ticks.  `0` disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            width:                   1280.0,
            height:                  720.0,
            node_density:            0.25,
            velocity_factor:         0.1,
            max_conn_distance:       140.0,
            transmission_speed:      2.0,
            spawn_period_min_ticks:  0,
            spawn_period_max_ticks:  200,
            fade_in_ticks:           100,
            path_strategy:           PathStrategy::Dijkstra,
            update_period_ms:        10,
            seed:                    42,
            total_ticks:             6_000,
            snapshot_interval_ticks: 10,
        }
    }
}

impl MeshConfig {
    /// Ticks a single hop takes at the configured speed (rounded up).
    pub fn ticks_per_hop(&self) -> u64 {
        (100.0 / self.transmission_speed).ceil() as u64
    }

    /// Check every value the engine relies on.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] naming the first offending field.
    pub fn validate(&self) -> CoreResult<()> {
        fn positive(name: &str, v: f32) -> CoreResult<()> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(CoreError::Config(format!("{name} must be positive, got {v}")))
            }
        }
        fn non_negative(name: &str, v: f32) -> CoreResult<()> {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(CoreError::Config(format!("{name} must be non-negative, got {v}")))
            }
        }

        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("max-conn-distance", self.max_conn_distance)?;
        positive("transmission-speed", self.transmission_speed)?;
        non_negative("node-density", self.node_density)?;
        non_negative("velocity-factor", self.velocity_factor)?;

        if self.spawn_period_min_ticks > self.spawn_period_max_ticks {
            return Err(CoreError::Config(format!(
                "spawn-period-min-ticks ({}) exceeds spawn-period-max-ticks ({})",
                self.spawn_period_min_ticks, self.spawn_period_max_ticks,
            )));
        }
        if self.fade_in_ticks == 0 {
            return Err(CoreError::Config("fade-in-ticks must be at least 1".into()));
        }
        Ok(())
    }
}
