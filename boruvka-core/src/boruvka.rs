//! Entry points for computing minimum spanning forests.
//!
//! Provides the [`Boruvka`] runtime handle and the [`compute_mst`]
//! convenience wrapper.

use std::num::NonZeroUsize;

use tracing::{info, instrument, warn};

use crate::{
    Result,
    builder::BoruvkaBuilder,
    error::MstError,
    graph::Graph,
    mst::{BoruvkaRun, MinimumSpanningForest, SearchStrategy},
};

/// Configured Borůvka solver.
///
/// # Examples
/// ```
/// use boruvka_core::{BoruvkaBuilder, Graph};
///
/// let graph = Graph::from_edges(4, [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (0, 3, 5.0)])?;
/// let boruvka = BoruvkaBuilder::new().with_parallelism(2).build()?;
/// let forest = boruvka.run(&graph)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.edges().len(), 3);
/// assert_eq!(forest.total_weight(), 4.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Boruvka {
    strategy: SearchStrategy,
}

impl Boruvka {
    pub(crate) fn new(strategy: SearchStrategy) -> Self {
        Self { strategy }
    }

    /// Returns the number of search workers.
    #[must_use]
    pub fn parallelism(&self) -> NonZeroUsize {
        self.strategy.parallelism()
    }

    /// Returns the search strategy used by [`Self::run`].
    #[must_use]
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Computes the minimum spanning forest of `graph`.
    ///
    /// Disconnected graphs yield one tree per connected part rather than an
    /// error.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyGraph`] when the graph has no vertices,
    /// [`MstError::ThreadPool`] when the worker pool cannot start, and
    /// [`MstError::InvariantViolation`] on an internal logic error.
    #[instrument(
        name = "core.run",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            parallelism = self.parallelism().get(),
        ),
    )]
    pub fn run(&self, graph: &Graph) -> Result<MinimumSpanningForest> {
        if graph.vertex_count() == 0 {
            warn!("graph has no vertices, returning error");
            return Err(MstError::EmptyGraph);
        }
        let forest = BoruvkaRun::new(graph, self.strategy)?.finish()?;
        info!(
            rounds = forest.rounds(),
            mst_edges = forest.edges().len(),
            components = forest.component_count(),
            total_weight = forest.total_weight(),
            "mst computation completed"
        );
        Ok(forest)
    }
}

/// Computes the minimum spanning forest of `graph` with `parallelism` search
/// workers. `1` runs the sequential search; larger values run the concurrent
/// search on a dedicated pool and return the same forest.
///
/// # Errors
/// Returns [`MstError::InvalidParallelism`] when `parallelism` is zero, plus
/// every error of [`Boruvka::run`].
///
/// # Examples
/// ```
/// use boruvka_core::{Graph, compute_mst};
///
/// let graph = Graph::from_edges(3, [(0, 1, 2.0), (1, 2, 1.0), (0, 2, 3.0)])?;
/// let sequential = compute_mst(&graph, 1)?;
/// let concurrent = compute_mst(&graph, 4)?;
/// assert_eq!(sequential, concurrent);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compute_mst(graph: &Graph, parallelism: usize) -> Result<MinimumSpanningForest> {
    BoruvkaBuilder::new()
        .with_parallelism(parallelism)
        .build()?
        .run(graph)
}
