//! `np-transmit` — the transmission progress state machine.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                     |
//! |------------------|--------------------------------------------------------------|
//! | [`transmission`] | `Transmission`, `Segment`, `ActiveHop` — one animated path   |
//! | [`scheduler`]    | `TransmissionScheduler` — spawn / advance / reap, `TickOutcome` |
//! | [`error`]        | `TransmitError`, `TransmitResult<T>`                         |
//!
//! # Progress model
//!
//! A transmission turns a path of `n` nodes into `n` segments, each holding a
//! progress value in `[0, 100]`.  Segment 0 (the start node) is complete from
//! the moment of spawn.  Each tick:
//!
//! 1. `advance()` adds the configured speed to the first incomplete segment
//!    of every transmission, clamped at 100.  Exactly one hop animates at a
//!    time.
//! 2. `reap()` removes every transmission whose last segment has reached 100.
//!
//! ```text
//! SPAWNED ──advance──▶ ADVANCING ──advance (last = 100)──▶ COMPLETE ──reap──▶ removed
//!                        ▲    │
//!                        └────┘
//! ```
//!
//! The scheduler never looks at node positions or the graph.  Renderers
//! combine [`Transmission::active_segment`] with current positions to place a
//! moving marker.

pub mod error;
pub mod scheduler;
pub mod transmission;


pub use error::{TransmitError, TransmitResult};
pub use scheduler::{TickOutcome, TransmissionScheduler};
pub use transmission::{ActiveHop, COMPLETE, Segment, Transmission};
