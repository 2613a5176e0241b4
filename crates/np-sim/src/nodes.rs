//! Node kinematics: structure-of-arrays positions and velocities.
//!
//! Every `Vec` has exactly `count()` elements and `NodeId` is the index into
//! all of them.  Indices stay stable until [`NodeStore::populate`] replaces
//! the whole population, which is why the simulation clears in-flight
//! transmissions on reset.

use np_core::{NodeId, Point, SimRng, Velocity};

use crate::{SimError, SimResult};

/// Area unit used to turn `node_density` into a node count.
const DENSITY_CELL: f32 = 100.0 * 100.0;

/// Largest population a store can hold.  Every index must convert to a
/// `NodeId` strictly below the `INVALID` sentinel.
pub const MAX_NODES: usize = NodeId::INVALID.0 as usize;

/// `floor(width·height / 100² · density)`, capped at [`MAX_NODES`].
pub fn population_size(width: f32, height: f32, density: f32) -> usize {
    let count = (width * height / DENSITY_CELL * density).floor().max(0.0);
    if count >= MAX_NODES as f32 {
        MAX_NODES
    } else {
        count as usize
    }
}

/// Reject explicit populations whose indices would not fit a `NodeId`.
pub(crate) fn check_population(count: usize) -> SimResult<()> {
    if count > MAX_NODES {
        return Err(SimError::TooManyNodes { count, max: MAX_NODES });
    }
    Ok(())
}

/// Positions and velocities of every node inside a `width × height` field.
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    pub width:      f32,
    pub height:     f32,
    pub positions:  Vec<Point>,
    pub velocities: Vec<Velocity>,
}

impl NodeStore {
    /// An empty field.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, positions: Vec::new(), velocities: Vec::new() }
    }

    /// Wrap existing arrays.  Callers must pass equal lengths; the builder
    /// checks this before calling.
    pub(crate) fn from_parts(
        width:      f32,
        height:     f32,
        positions:  Vec<Point>,
        velocities: Vec<Velocity>,
    ) -> Self {
        debug_assert_eq!(positions.len(), velocities.len());
        Self { width, height, positions, velocities }
    }

    /// Replace the population with [`population_size`] nodes at random
    /// integer positions, each with velocity components uniform in
    /// `±velocity_factor / 2`.  The count is capped at [`MAX_NODES`].
    pub fn populate(
        &mut self,
        width:           f32,
        height:          f32,
        density:         f32,
        velocity_factor: f32,
        rng:             &mut SimRng,
    ) {
        let count = population_size(width, height, density);
        if count == MAX_NODES {
            log::warn!("population capped at {MAX_NODES} nodes");
        }
        self.width = width;
        self.height = height;
        self.positions.clear();
        self.velocities.clear();
        self.positions.reserve(count);
        self.velocities.reserve(count);

        for _ in 0..count {
            let x = (rng.random::<f32>() * width).floor();
            let y = (rng.random::<f32>() * height).floor();
            let dx = (rng.random::<f32>() - 0.5) * velocity_factor;
            let dy = (rng.random::<f32>() - 0.5) * velocity_factor;
            self.positions.push(Point::new(x, y));
            self.velocities.push(Velocity::new(dx, dy));
        }
    }

    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn position(&self, node: NodeId) -> Option<Point> {
        self.positions.get(node.index()).copied()
    }

    /// Move every node one tick.
    pub fn update(&mut self) {
        let (w, h) = (self.width, self.height);

        #[cfg(not(feature = "parallel"))]
        {
            for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
                bounce(p, v, w, h);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.positions
                .par_iter_mut()
                .zip(self.velocities.par_iter_mut())
                .for_each(|(p, v)| bounce(p, v, w, h));
        }
    }
}

/// Reflect a velocity component whose next step would leave `[0, extent]`,
/// then apply the step.
#[inline]
fn bounce(p: &mut Point, v: &mut Velocity, width: f32, height: f32) {
    if p.x + v.dx > width || p.x + v.dx < 0.0 {
        v.dx = -v.dx;
    }
    if p.y + v.dy > height || p.y + v.dy < 0.0 {
        v.dy = -v.dy;
    }
    p.x += v.dx;
    p.y += v.dy;
}
