//! One animated traversal of a path.

use np_core::{NodeId, Point, TransmissionId};

/// Progress value of a finished segment.
pub const COMPLETE: f32 = 100.0;

// ── Segment ───────────────────────────────────────────────────────────────────

/// One hop of a transmission: the destination node and how far along the hop
/// towards it the packet is, in `[0, 100]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub node: NodeId,
    pub progress: f32,
}

impl Segment {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.progress >= COMPLETE
    }
}

// ── ActiveHop ─────────────────────────────────────────────────────────────────

/// The hop currently animating, as seen by a renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ActiveHop {
    /// Index of the active segment (always `>= 1`).
    pub index: usize,
    /// Node the packet left.
    pub from: NodeId,
    /// Node the packet is heading to.
    pub to: NodeId,
    /// Progress along the hop in `[0.0, 1.0]`.
    pub fraction: f32,
}

// ── Transmission ──────────────────────────────────────────────────────────────

/// A path being animated hop by hop.
///
/// # Invariants
///
/// - `segments.len() >= 2`.
/// - `segments[0].progress == 100`.
/// - Progress is non-decreasing left to right in the pattern
///   `100, …, 100, p, 0, …, 0` with at most one `p` strictly between 0 and
///   100.
///
/// Only [`TransmissionScheduler`](crate::TransmissionScheduler) mutates a
/// transmission.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transmission {
    id: TransmissionId,
    segments: Vec<Segment>,
    mix: f32,
}

impl Transmission {
    /// Build the spawned state for `path`.  `None` if the path has fewer
    /// than two nodes.
    pub(crate) fn new(id: TransmissionId, path: &[NodeId], mix: f32) -> Option<Self> {
        if path.len() < 2 {
            return None;
        }
        let mut segments: Vec<Segment> = path
            .iter()
            .map(|&node| Segment { node, progress: 0.0 })
            .collect();
        segments[0].progress = COMPLETE;
        Some(Self { id, segments, mix: mix.clamp(0.0, 1.0) })
    }

    pub fn id(&self) -> TransmissionId {
        self.id
    }

    /// Blend factor in `[0, 1]` chosen at spawn; renderers map it to a colour.
    pub fn mix(&self) -> f32 {
        self.mix
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Path node sequence, start first.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.segments.iter().map(|s| s.node)
    }

    /// Number of segments (= path length).
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; a transmission has at least two segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// `true` once the last segment has reached 100.
    pub fn is_complete(&self) -> bool {
        self.segments.last().is_some_and(Segment::is_complete)
    }

    /// Index of the first incomplete segment, skipping the start segment.
    /// `None` once complete.
    pub fn active_index(&self) -> Option<usize> {
        self.segments
            .iter()
            .skip(1)
            .position(|s| !s.is_complete())
            .map(|i| i + 1)
    }

    /// The hop currently animating, or `None` once complete.
    pub fn active_segment(&self) -> Option<ActiveHop> {
        let index = self.active_index()?;
        let seg = self.segments[index];
        Some(ActiveHop {
            index,
            from: self.segments[index - 1].node,
            to: seg.node,
            fraction: seg.progress / COMPLETE,
        })
    }

    /// Hops fully travelled so far.
    pub fn completed_hops(&self) -> usize {
        match self.active_index() {
            Some(i) => i - 1,
            None => self.segments.len() - 1,
        }
    }

    /// Where to draw the moving marker: the active hop's endpoints
    /// interpolated by its fraction, using the positions as they are *now*.
    ///
    /// Returns `None` once complete or if a node index is outside
    /// `positions`.
    pub fn marker_position(&self, positions: &[Point]) -> Option<Point> {
        let hop = self.active_segment()?;
        let a = positions.get(hop.from.index())?;
        let b = positions.get(hop.to.index())?;
        Some(a.lerp(*b, hop.fraction))
    }

    /// Draw opacity in `[0, 1]`: fades in over the first hop and out over
    /// the last hop.
    pub fn opacity(&self) -> f32 {
        let mut alpha = 1.0;
        let first = self.segments[1].progress;
        if first < COMPLETE {
            alpha = first / COMPLETE;
        }
        let last = self.segments[self.segments.len() - 1].progress;
        if last > 0.0 {
            alpha = 1.0 - last / COMPLETE;
        }
        alpha.clamp(0.0, 1.0)
    }

    /// Add `speed` to the active segment, clamped at 100.  Overflow is
    /// discarded; the next segment starts on the following call.
    ///
    /// Returns `false` if the transmission was already complete.
    pub(crate) fn advance(&mut self, speed: f32) -> bool {
        let Some(index) = self.active_index() else {
            return false;
        };
        let seg = &mut self.segments[index];
        seg.progress = (seg.progress + speed).min(COMPLETE);
        true
    }
}
