//! Shortest-path search over the proximity graph.
//!
//! # Pluggability
//!
//! The spawn trigger calls search through the [`PathFinder`] trait, so the
//! algorithm can be swapped without touching the scheduler.  Two
//! implementations ship:
//!
//! | Finder                 | Frontier                                        |
//! |------------------------|-------------------------------------------------|
//! | [`DijkstraPathFinder`] | global min-heap (textbook Dijkstra), default    |
//! | [`GreedyPathFinder`]   | nearest in-range neighbour, global scan when stuck |
//!
//! # Cost units
//!
//! Edge weight is the **squared** Euclidean hop length.  Path costs are sums
//! of squares, which favours many short hops over a few long ones and is only
//! ever used for comparison, never reported as a real distance.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use np_core::{NodeId, PathStrategy};

use crate::{GraphError, GraphResult, ProximityGraph, SearchContext};

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a search: node indices from start to target, inclusive.
///
/// Always at least two nodes long, since searches reject `start == target`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub nodes: Vec<NodeId>,
    /// Sum of squared hop lengths at search time.
    pub total_cost: f32,
}

impl Path {
    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of hops (`len() - 1`).
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn target(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// `true` if every consecutive pair is adjacent in `graph` right now.
    ///
    /// Paths are never re-validated by the engine; this exists for callers
    /// that want to know whether a route has gone stale.
    pub fn is_connected_in(&self, graph: &ProximityGraph<'_>) -> bool {
        self.nodes.windows(2).all(|w| graph.are_adjacent(w[0], w[1]))
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; all search state lives in a
/// per-call [`SearchContext`], never in the finder.
pub trait PathFinder: Send + Sync {
    /// Find the cheapest route from `start` to `target` through in-range
    /// edges.
    ///
    /// # Errors
    /// - [`GraphError::NodeOutOfRange`] if either endpoint is not in `graph`.
    /// - [`GraphError::SameEndpoints`] if `start == target`.
    /// - [`GraphError::NoPath`] if `target` is in another component.  Never a
    ///   partial path.
    fn shortest_path(
        &self,
        graph: &ProximityGraph<'_>,
        start: NodeId,
        target: NodeId,
    ) -> GraphResult<Path>;
}

fn check_endpoints(graph: &ProximityGraph<'_>, start: NodeId, target: NodeId) -> GraphResult<()> {
    for node in [start, target] {
        if !graph.contains(node) {
            return Err(GraphError::NodeOutOfRange { node, count: graph.node_count() });
        }
    }
    if start == target {
        return Err(GraphError::SameEndpoints(start));
    }
    Ok(())
}

fn finish(
    ctx: &SearchContext,
    start: NodeId,
    target: NodeId,
) -> GraphResult<Path> {
    let nodes = ctx
        .reconstruct(start, target)
        .ok_or(GraphError::NoPath { from: start, to: target })?;
    log::trace!("path {start} → {target}: {} hops", nodes.len() - 1);
    Ok(Path { nodes, total_cost: ctx.distance[target.index()] })
}

// ── DijkstraPathFinder ────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm with a binary min-heap.
///
/// Terminates as soon as the target is settled.  Ties on cost are broken by
/// the lower `NodeId`, so identical snapshots always produce identical paths.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraPathFinder;

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// cost first, then the smallest `NodeId`.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Frontier {
    cost: f32,
    node: NodeId,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PathFinder for DijkstraPathFinder {
    fn shortest_path(
        &self,
        graph: &ProximityGraph<'_>,
        start: NodeId,
        target: NodeId,
    ) -> GraphResult<Path> {
        check_endpoints(graph, start, target)?;

        let mut ctx = SearchContext::new(graph.node_count(), start);
        let mut heap = BinaryHeap::new();
        heap.push(Frontier { cost: 0.0, node: start });

        while let Some(Frontier { cost, node }) = heap.pop() {
            // Skip stale heap entries.
            if ctx.visited[node.index()] {
                continue;
            }
            ctx.visited[node.index()] = true;

            if node == target {
                return finish(&ctx, start, target);
            }

            for neighbor in graph.neighbors(node) {
                if ctx.visited[neighbor.index()] {
                    continue;
                }
                let candidate = cost + graph.squared_distance(node, neighbor);
                if ctx.relax(neighbor, node, candidate) {
                    heap.push(Frontier { cost: candidate, node: neighbor });
                }
            }
        }

        Err(GraphError::NoPath { from: start, to: target })
    }
}

// ── GreedyPathFinder ──────────────────────────────────────────────────────────

/// Dijkstra-style relaxation with a local frontier.
///
/// After relaxing the current node's in-range neighbours, the walk moves to
/// the neighbour with the smallest candidate cost instead of popping a global
/// minimum.  Only when the current node has no unvisited neighbour in range
/// does it fall back to the unvisited node with the smallest stored distance
/// anywhere in the graph, reachable or not.  The walk always visits every
/// node before reconstructing.
///
/// Not guaranteed optimal in general; kept for runs that want walk-order
/// route choices.
#[derive(Copy, Clone, Debug, Default)]
pub struct GreedyPathFinder;

impl PathFinder for GreedyPathFinder {
    fn shortest_path(
        &self,
        graph: &ProximityGraph<'_>,
        start: NodeId,
        target: NodeId,
    ) -> GraphResult<Path> {
        check_endpoints(graph, start, target)?;

        let mut ctx = SearchContext::new(graph.node_count(), start);
        let mut current = start;

        loop {
            let mut nearest: Option<(NodeId, f32)> = None;
            let base = ctx.distance[current.index()];

            for neighbor in graph.neighbors(current) {
                if ctx.visited[neighbor.index()] {
                    continue;
                }
                let candidate = base + graph.squared_distance(current, neighbor);
                ctx.relax(neighbor, current, candidate);
                match nearest {
                    Some((_, d)) if candidate >= d => {}
                    _ => nearest = Some((neighbor, candidate)),
                }
            }

            ctx.visited[current.index()] = true;

            current = match nearest {
                Some((next, _)) => next,
                None => match ctx.nearest_unvisited() {
                    Some(next) => next,
                    None => break,
                },
            };
        }

        finish(&ctx, start, target)
    }
}

// ── AnyPathFinder ─────────────────────────────────────────────────────────────

/// Runtime-selected finder, built from [`PathStrategy`] in the config.
#[derive(Copy, Clone, Debug)]
pub enum AnyPathFinder {
    Dijkstra(DijkstraPathFinder),
    Greedy(GreedyPathFinder),
}

impl From<PathStrategy> for AnyPathFinder {
    fn from(strategy: PathStrategy) -> Self {
        match strategy {
            PathStrategy::Dijkstra => AnyPathFinder::Dijkstra(DijkstraPathFinder),
            PathStrategy::Greedy => AnyPathFinder::Greedy(GreedyPathFinder),
        }
    }
}

impl Default for AnyPathFinder {
    fn default() -> Self {
        PathStrategy::default().into()
    }
}

impl PathFinder for AnyPathFinder {
    fn shortest_path(
        &self,
        graph: &ProximityGraph<'_>,
        start: NodeId,
        target: NodeId,
    ) -> GraphResult<Path> {
        match self {
            AnyPathFinder::Dijkstra(f) => f.shortest_path(graph, start, target),
            AnyPathFinder::Greedy(f) => f.shortest_path(graph, start, target),
        }
    }
}
