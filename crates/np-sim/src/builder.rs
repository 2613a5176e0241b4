//! Fluent builder for constructing a [`MeshSim`].

use np_core::{MeshConfig, Point, SimRng, Velocity};
use np_graph::{AnyPathFinder, PathFinder};
use np_transmit::TransmissionScheduler;

use crate::nodes::check_population;
use crate::{MeshSim, NodeStore, SimError, SimResult};

/// Fluent builder for [`MeshSim<P>`].
///
/// # Required inputs
///
/// - [`MeshConfig`] — threshold, speed, spawn bounds, seed, …
/// - `P: PathFinder` — e.g. [`np_graph::DijkstraPathFinder`], or
///   `config.path_strategy.into()` for an [`AnyPathFinder`]
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                      |
/// |------------------------|----------------------------------------------|
/// | `.nodes(pos, vel)`     | Random population from `width`, `height`, `node_density` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = MeshSimBuilder::new(config, DijkstraPathFinder)
///     .nodes(positions, velocities)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct MeshSimBuilder<P: PathFinder> {
    config: MeshConfig,
    finder: P,
    nodes:  Option<(Vec<Point>, Vec<Velocity>)>,
}

impl MeshSimBuilder<AnyPathFinder> {
    /// Builder using the finder named by `config.path_strategy`.
    pub fn from_config(config: MeshConfig) -> Self {
        let finder = AnyPathFinder::from(config.path_strategy);
        Self::new(config, finder)
    }
}

impl<P: PathFinder> MeshSimBuilder<P> {
    pub fn new(config: MeshConfig, finder: P) -> Self {
        Self { config, finder, nodes: None }
    }

    /// Supply explicit node positions and velocities instead of a random
    /// population.  Both must have the same length.
    pub fn nodes(mut self, positions: Vec<Point>, velocities: Vec<Velocity>) -> Self {
        self.nodes = Some((positions, velocities));
        self
    }

    /// Validate inputs, populate the field and return a ready-to-run
    /// [`MeshSim`].
    pub fn build(self) -> SimResult<MeshSim<P>> {
        self.config.validate()?;
        let scheduler = TransmissionScheduler::new(self.config.transmission_speed)?;
        let mut rng = SimRng::new(self.config.seed);

        let (w, h) = (self.config.width, self.config.height);
        let nodes = match self.nodes {
            Some((positions, velocities)) => {
                if velocities.len() != positions.len() {
                    return Err(SimError::NodeCountMismatch {
                        expected: positions.len(),
                        got:      velocities.len(),
                        what:     "velocities",
                    });
                }
                check_population(positions.len())?;
                NodeStore::from_parts(w, h, positions, velocities)
            }
            None => {
                let mut store = NodeStore::new(w, h);
                store.populate(
                    w,
                    h,
                    self.config.node_density,
                    self.config.velocity_factor,
                    &mut rng,
                );
                store
            }
        };
        log::info!(
            "mesh: {} nodes, threshold {}, speed {}",
            nodes.count(),
            self.config.max_conn_distance,
            self.config.transmission_speed,
        );

        Ok(MeshSim::new(self.config, nodes, scheduler, self.finder, rng))
    }
}
