//! The implicit distance-threshold graph.
//!
//! # Data layout
//!
//! `ProximityGraph` borrows the node store's position slice; `NodeId` is the
//! index into it.  Adjacency is a pure predicate over the live coordinates:
//!
//! ```text
//! adjacent(i, j)  ⇔  i != j  ∧  |p_i - p_j|² <= max_conn_distance²
//! ```
//!
//! The squared threshold is computed once at construction so neither the
//! path-finding inner loop nor the per-frame edge listing takes a square root.
//!
//! # Edge listing
//!
//! Renderers draw every connection each frame.  [`ProximityGraph::edges`]
//! bulk-loads an R-tree (via `rstar`) over the current positions and runs one
//! radius query per node.  The tree lives only for that call; positions move
//! between ticks, so nothing is cached.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use np_core::{NodeId, Point};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the per-call spatial index: a `[x, y]` point with the
/// associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── ProximityEdge ─────────────────────────────────────────────────────────────

/// One undirected connection present at the instant [`ProximityGraph::edges`]
/// ran.  Always `a < b`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProximityEdge {
    pub a: NodeId,
    pub b: NodeId,
    pub squared_distance: f32,
    /// `1 - d² / threshold²`: `1.0` for coincident nodes, `0.0` right at the
    /// threshold.  Renderers use it to fade long connections.
    pub closeness: f32,
}

// ── ProximityGraph ────────────────────────────────────────────────────────────

/// Distance-threshold graph over a borrowed set of node positions.
///
/// Holds no state besides the slice and the threshold.  Cheap to construct;
/// build a fresh one whenever positions have moved.
#[derive(Copy, Clone, Debug)]
pub struct ProximityGraph<'a> {
    positions: &'a [Point],
    max_conn_distance: f32,
    squared_threshold: f32,
}

impl<'a> ProximityGraph<'a> {
    /// Wrap `positions` with the connection threshold `max_conn_distance`.
    ///
    /// The threshold is expected to be positive (`MeshConfig::validate`
    /// enforces this); a non-positive threshold yields a graph with no edges.
    /// `positions` must hold fewer than `u32::MAX` entries so every index is
    /// a valid `NodeId`; `np-sim`'s node store guarantees this.
    pub fn new(positions: &'a [Point], max_conn_distance: f32) -> Self {
        debug_assert!(positions.len() <= NodeId::INVALID.index());
        Self {
            positions,
            max_conn_distance,
            squared_threshold: max_conn_distance * max_conn_distance,
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn max_conn_distance(&self) -> f32 {
        self.max_conn_distance
    }

    pub fn squared_threshold(&self) -> f32 {
        self.squared_threshold
    }

    /// `true` if `node` indexes into the position slice.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.positions.len()
    }

    /// Current position of `node`.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    #[inline]
    pub fn position(&self, node: NodeId) -> Point {
        self.positions[node.index()]
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Squared Euclidean distance between the current positions of `a` and `b`.
    #[inline]
    pub fn squared_distance(&self, a: NodeId, b: NodeId) -> f32 {
        self.positions[a.index()].squared_distance(self.positions[b.index()])
    }

    /// `true` if `a` and `b` are distinct and within the threshold.
    ///
    /// Symmetric.  A node is never adjacent to itself.
    #[inline]
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        a != b && self.squared_distance(a, b) <= self.squared_threshold
    }

    /// Every node adjacent to `node`, in ascending `NodeId` order.
    ///
    /// A linear scan; the search loops call this once per visited node.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.positions.len())
            .map(|i| NodeId(i as u32))
            .filter(move |&other| self.are_adjacent(node, other))
    }

    // ── Edge listing ──────────────────────────────────────────────────────

    /// All connections present right now, sorted by `(a, b)`.
    pub fn edges(&self) -> Vec<ProximityEdge> {
        let entries: Vec<NodeEntry> = self
            .positions
            .iter()
            .enumerate()
            .map(|(i, p)| NodeEntry { point: p.to_array(), id: NodeId(i as u32) })
            .collect();
        let tree = RTree::bulk_load(entries);

        let mut edges = Vec::new();
        for (i, p) in self.positions.iter().enumerate() {
            let a = NodeId(i as u32);
            for entry in tree.locate_within_distance(p.to_array(), self.squared_threshold) {
                let b = entry.id;
                if b <= a {
                    continue;
                }
                let d2 = self.squared_distance(a, b);
                // The R-tree and the predicate use the same arithmetic, but
                // keep the predicate authoritative.
                if d2 > self.squared_threshold {
                    continue;
                }
                edges.push(ProximityEdge {
                    a,
                    b,
                    squared_distance: d2,
                    closeness: 1.0 - d2 / self.squared_threshold,
                });
            }
        }
        edges.sort_by_key(|e| (e.a, e.b));
        edges
    }
}
