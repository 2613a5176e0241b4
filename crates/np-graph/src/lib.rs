//! `np-graph` — implicit proximity graph and shortest-path search.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`proximity`] | `ProximityGraph` (distance-threshold predicate), `ProximityEdge` |
//! | [`search`]    | `SearchContext` — per-call visited/distance/parent scratch    |
//! | [`path`]      | `PathFinder` trait, `Path`, `DijkstraPathFinder`, `GreedyPathFinder`, `AnyPathFinder` |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                                |
//!
//! # Graph model
//!
//! No edge list is ever stored.  An edge between two nodes exists *at query
//! time* iff their squared distance is within the squared threshold.  Node
//! positions move every tick, so a graph value borrows the current position
//! slice and is rebuilt (for free) whenever it is needed.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod path;
pub mod proximity;
pub mod search;


pub use error::{GraphError, GraphResult};
pub use path::{AnyPathFinder, DijkstraPathFinder, GreedyPathFinder, Path, PathFinder};
pub use proximity::{ProximityEdge, ProximityGraph};
pub use search::SearchContext;
