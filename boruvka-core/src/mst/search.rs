//! Cheapest outgoing edge search.
//!
//! An edge is outgoing for a component when exactly one of its endpoints lies
//! inside it. Only edges incident to a member can qualify, so the search walks
//! the incidence lists of the members rather than the whole edge set. The
//! minimum is taken under the total [`Edge`] ordering, which makes the result
//! independent of scan order.
//!
//! The concurrent search splits the members into disjoint chunks on a Rayon
//! pool. Each worker returns the minimum for its own chunk and the calling
//! thread folds the partial minima; workers share only read-only state.

use std::{num::NonZeroUsize, thread};

use rayon::{ThreadPool, ThreadPoolBuilder, prelude::*};

use crate::{
    error::MstError,
    graph::{Edge, Graph},
};

use super::component::{ComponentForest, ComponentId};

/// Selects how the per-component search is executed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchStrategy {
    /// Scan every member on the calling thread.
    Sequential,
    /// Split the members across a pool of `workers` threads.
    Concurrent {
        /// Upper bound on chunks per component; the pool itself never exceeds
        /// the host's available parallelism.
        workers: NonZeroUsize,
    },
}

impl SearchStrategy {
    /// Maps a worker count onto a strategy: `1` is sequential, anything
    /// larger is concurrent.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidParallelism`] when `parallelism == 0`.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::SearchStrategy;
    ///
    /// assert_eq!(SearchStrategy::from_parallelism(1)?, SearchStrategy::Sequential);
    /// assert!(matches!(
    ///     SearchStrategy::from_parallelism(4)?,
    ///     SearchStrategy::Concurrent { workers } if workers.get() == 4
    /// ));
    /// # Ok::<(), boruvka_core::MstError>(())
    /// ```
    pub fn from_parallelism(parallelism: usize) -> Result<Self, MstError> {
        let workers = NonZeroUsize::new(parallelism)
            .ok_or(MstError::InvalidParallelism { got: parallelism })?;
        if workers.get() == 1 {
            Ok(Self::Sequential)
        } else {
            Ok(Self::Concurrent { workers })
        }
    }

    /// Returns the number of threads the strategy searches with.
    #[must_use]
    pub const fn parallelism(self) -> NonZeroUsize {
        match self {
            Self::Sequential => NonZeroUsize::MIN,
            Self::Concurrent { workers } => workers,
        }
    }
}

/// Returns the cheapest edge leaving `component`, scanning on the calling
/// thread.
///
/// Returns `None` when the component has no outgoing edge, which happens once
/// it spans its connected part of the graph, and when `component` is not live.
///
/// # Examples
/// ```
/// use boruvka_core::{ComponentForest, Graph, cheapest_outgoing_edge};
///
/// let graph = Graph::from_edges(3, [(0, 1, 4.0), (0, 2, 1.0)])?;
/// let forest = ComponentForest::singletons(3);
/// let component = forest.component_of(0).expect("vertex 0 exists");
/// let edge = cheapest_outgoing_edge(&graph, &forest, component).expect("vertex 0 has edges");
/// assert_eq!((edge.source(), edge.target()), (0, 2));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn cheapest_outgoing_edge(
    graph: &Graph,
    forest: &ComponentForest,
    component: ComponentId,
) -> Option<Edge> {
    let members = forest.members(component)?;
    cheapest_in_chunk(graph, forest, component, members)
}

/// Returns the cheapest edge leaving `component`, splitting its members into
/// at most `workers` chunks searched on `pool`.
///
/// The result always equals [`cheapest_outgoing_edge`] for the same inputs.
#[must_use]
pub fn cheapest_outgoing_edge_concurrent(
    graph: &Graph,
    forest: &ComponentForest,
    component: ComponentId,
    pool: &ThreadPool,
    workers: NonZeroUsize,
) -> Option<Edge> {
    let members = forest.members(component)?;
    let chunk_len = members.len().div_ceil(workers.get()).max(1);
    let partials: Vec<Option<Edge>> = pool.install(|| {
        members
            .par_chunks(chunk_len)
            .map(|chunk| cheapest_in_chunk(graph, forest, component, chunk))
            .collect()
    });
    partials.into_iter().flatten().min()
}

fn cheapest_in_chunk(
    graph: &Graph,
    forest: &ComponentForest,
    component: ComponentId,
    chunk: &[usize],
) -> Option<Edge> {
    chunk
        .iter()
        .flat_map(|&vertex| graph.incident_edges(vertex))
        .filter(|edge| is_outgoing(forest, component, edge))
        .min()
        .copied()
}

fn is_outgoing(forest: &ComponentForest, component: ComponentId, edge: &Edge) -> bool {
    let inside = |vertex| forest.component_of(vertex) == Some(component);
    inside(edge.source()) != inside(edge.target())
}

/// Pool size for `workers`, capped at the host's available parallelism.
/// Chunking still splits members into up to `workers` pieces; surplus chunks
/// queue on the pool.
fn pool_threads(workers: NonZeroUsize) -> usize {
    let host = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    workers.get().min(host.max(2))
}

/// Runs the search selected by a [`SearchStrategy`], owning the worker pool
/// for concurrent searches.
pub(crate) struct EdgeSearcher {
    strategy: SearchStrategy,
    pool: Option<ThreadPool>,
}

impl EdgeSearcher {
    pub(crate) fn new(strategy: SearchStrategy) -> Result<Self, MstError> {
        let pool = match strategy {
            SearchStrategy::Sequential => None,
            SearchStrategy::Concurrent { workers } => Some(
                ThreadPoolBuilder::new()
                    .num_threads(pool_threads(workers))
                    .thread_name(|index| format!("boruvka-search-{index}"))
                    .build()
                    .map_err(|error| MstError::ThreadPool {
                        message: error.to_string().into(),
                    })?,
            ),
        };
        Ok(Self { strategy, pool })
    }

    pub(crate) fn find(
        &self,
        graph: &Graph,
        forest: &ComponentForest,
        component: ComponentId,
    ) -> Option<Edge> {
        match (self.strategy, &self.pool) {
            (SearchStrategy::Concurrent { workers }, Some(pool)) => {
                cheapest_outgoing_edge_concurrent(graph, forest, component, pool, workers)
            }
            _ => cheapest_outgoing_edge(graph, forest, component),
        }
    }
}
