//! `np-sim` — tick driver for the netpulse mesh engine.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   if hidden:
//!     skip everything; a due spawn is rescheduled, never queued
//!   else:
//!     ① Kinematics — every node moves by its velocity, bouncing off the
//!                    field edges.
//!     ② Transmit   — scheduler.tick(): advance each active segment, then
//!                    reap finished transmissions.
//!     ③ Fade-in    — global alpha steps towards 1.
//!     ④ Spawn      — if the jittered trigger is due: pick two distinct
//!                    nodes, search a path over the *current* proximity
//!                    graph, spawn on success, skip on failure.
//! ```
//!
//! Nothing schedules itself.  The host calls [`MeshSim::step`],
//! [`MeshSim::run_ticks`] or [`MeshSim::run`] at its own cadence and reads
//! state through shared references in between.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the kinematics update on Rayon's thread pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use np_core::MeshConfig;
//! use np_sim::{MeshSimBuilder, NoopObserver};
//!
//! let config = MeshConfig::default();
//! let finder = config.path_strategy.into();
//! let mut sim = MeshSimBuilder::new(config, finder).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod nodes;
pub mod observer;
pub mod sim;
pub mod spawn;

#[cfg(test)]
mod tests;

pub use builder::MeshSimBuilder;
pub use error::{SimError, SimResult};
pub use nodes::{MAX_NODES, NodeStore, population_size};
pub use observer::{MeshObserver, NoopObserver};
pub use sim::{MeshSim, TickSummary};
pub use spawn::{SpawnOutcome, SpawnTrigger};
