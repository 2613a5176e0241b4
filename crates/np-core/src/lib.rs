//! `np-core` — foundational types for the `netpulse` mesh animation engine.
//!
//! This crate is a dependency of every other `np-*` crate.  It has no `np-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `NodeId`, `TransmissionId`                                |
//! | [`point`]   | `Point`, `Velocity`, squared distance, interpolation      |
//! | [`time`]    | `Tick`, `TickClock`                                       |
//! | [`rng`]     | `SimRng` (seeded, reproducible)                           |
//! | [`config`]  | `MeshConfig`, `PathStrategy`                              |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types; required to load `MeshConfig` from a file. |

pub mod config;
pub mod error;
pub mod ids;
pub mod point;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{MeshConfig, PathStrategy};
pub use error::{CoreError, CoreResult};
pub use ids::{NodeId, TransmissionId};
pub use point::{Point, Velocity};
pub use rng::SimRng;
pub use time::{Tick, TickClock};
