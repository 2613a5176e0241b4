//! Per-search scratch state.
//!
//! Search bookkeeping (`visited`, `distance`, `parent`) is kept out of the
//! node store entirely.  Each `shortest_path` call allocates a fresh
//! `SearchContext`, so concurrent or interleaved searches can never observe
//! each other's state and nodes carry only kinematic data.

use np_core::NodeId;

/// Visited flags, best-known squared-distance sums and parent links for one
/// search, indexed by `NodeId`.
#[derive(Debug, Clone)]
pub struct SearchContext {
    pub visited: Vec<bool>,
    /// Sum of squared hop lengths from the start.  `f32::INFINITY` until the
    /// node is reached.
    pub distance: Vec<f32>,
    /// Predecessor on the best known route; `NodeId::INVALID` if none.
    pub parent: Vec<NodeId>,
}

impl SearchContext {
    /// Fresh state for `node_count` nodes with `start` at distance zero.
    pub fn new(node_count: usize, start: NodeId) -> Self {
        let mut distance = vec![f32::INFINITY; node_count];
        distance[start.index()] = 0.0;
        Self {
            visited: vec![false; node_count],
            distance,
            parent: vec![NodeId::INVALID; node_count],
        }
    }

    /// Record `via` as the predecessor of `node` if `candidate` beats the
    /// stored distance.  Returns `true` on improvement.
    #[inline]
    pub fn relax(&mut self, node: NodeId, via: NodeId, candidate: f32) -> bool {
        if candidate < self.distance[node.index()] {
            self.distance[node.index()] = candidate;
            self.parent[node.index()] = via;
            true
        } else {
            false
        }
    }

    /// Unvisited node with the smallest stored distance (ties → lowest id).
    ///
    /// Adjacency is ignored; unreached nodes at `INFINITY` still qualify.
    /// `None` once every node has been visited.
    pub fn nearest_unvisited(&self) -> Option<NodeId> {
        let mut best: Option<(usize, f32)> = None;
        for (i, (&seen, &d)) in self.visited.iter().zip(&self.distance).enumerate() {
            if seen {
                continue;
            }
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| NodeId(i as u32))
    }

    /// Walk parent links back from `target` to `start`.
    ///
    /// Returns the chain in `start → target` order, or `None` if a link is
    /// missing before `start` is reached (target in another component).
    pub fn reconstruct(&self, start: NodeId, target: NodeId) -> Option<Vec<NodeId>> {
        let mut chain = vec![target];
        let mut cur = target;
        while cur != start {
            let prev = self.parent[cur.index()];
            if prev == NodeId::INVALID || chain.len() > self.parent.len() {
                return None;
            }
            chain.push(prev);
            cur = prev;
        }
        chain.reverse();
        Some(chain)
    }
}
