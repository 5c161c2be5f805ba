//! Borůvka minimum spanning tree (MST) construction.
//!
//! Each round snapshots the live components, finds every component's cheapest
//! outgoing edge (sequentially or on a worker pool), and only then applies the
//! merges on the calling thread. Searches therefore never observe a merge from
//! their own round.

mod component;
mod search;

use std::mem;

use tracing::{debug, error, instrument};

use crate::{
    error::MstError,
    graph::{Edge, Graph},
};

pub use self::component::{ComponentForest, ComponentId};
pub use self::search::{
    SearchStrategy, cheapest_outgoing_edge, cheapest_outgoing_edge_concurrent,
};

use self::search::EdgeSearcher;

/// Phase of a [`BoruvkaRun`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DriverState {
    /// The forest has not been built yet.
    Initializing,
    /// Candidates for the current round are about to be collected.
    RoundInProgress,
    /// Candidates have been collected and are about to be merged.
    Merging,
    /// No further merge is possible.
    Done,
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<Edge>,
    components: Vec<Vec<usize>>,
    rounds: usize,
}

impl MinimumSpanningForest {
    /// Returns the MST/forest edges in ascending [`Edge`] order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the final components as sorted vertex lists.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> &[Vec<usize>] { &self.components }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Returns the number of Borůvka rounds executed.
    #[must_use]
    #[rustfmt::skip]
    pub fn rounds(&self) -> usize { self.rounds }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.components.len() == 1
    }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }
}

/// Step-wise Borůvka driver over a borrowed [`Graph`].
///
/// # Examples
/// ```
/// use boruvka_core::{BoruvkaRun, DriverState, Graph, SearchStrategy};
///
/// let graph = Graph::from_edges(3, [(0, 1, 1.0), (1, 2, 2.0)])?;
/// let mut run = BoruvkaRun::new(&graph, SearchStrategy::Sequential)?;
/// assert_eq!(run.state(), DriverState::Initializing);
/// assert_eq!(run.step()?, DriverState::RoundInProgress);
/// assert_eq!(run.step()?, DriverState::Merging);
/// let forest = run.finish()?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct BoruvkaRun<'g> {
    graph: &'g Graph,
    searcher: EdgeSearcher,
    forest: ComponentForest,
    accepted: Vec<Edge>,
    candidates: Vec<Edge>,
    state: DriverState,
    rounds: usize,
}

impl<'g> BoruvkaRun<'g> {
    /// Prepares a run in the [`DriverState::Initializing`] state.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyGraph`] when `graph` has no vertices and
    /// [`MstError::ThreadPool`] when the concurrent worker pool cannot start.
    pub fn new(graph: &'g Graph, strategy: SearchStrategy) -> Result<Self, MstError> {
        if graph.vertex_count() == 0 {
            return Err(MstError::EmptyGraph);
        }
        Ok(Self {
            graph,
            searcher: EdgeSearcher::new(strategy)?,
            forest: ComponentForest::default(),
            accepted: Vec::new(),
            candidates: Vec::new(),
            state: DriverState::Initializing,
            rounds: 0,
        })
    }

    /// Returns the current phase.
    #[must_use]
    #[rustfmt::skip]
    pub fn state(&self) -> DriverState { self.state }

    /// Returns the number of rounds started so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn rounds(&self) -> usize { self.rounds }

    /// Returns the current component forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn forest(&self) -> &ComponentForest { &self.forest }

    /// Returns the edges accepted so far, in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn accepted_edges(&self) -> &[Edge] { &self.accepted }

    /// Performs one state transition and returns the new state. Stepping a
    /// finished run is a no-op.
    ///
    /// # Errors
    /// Returns [`MstError::InvariantViolation`] if the forest rejects a merge.
    pub fn step(&mut self) -> Result<DriverState, MstError> {
        self.state = match self.state {
            DriverState::Initializing => {
                self.forest = ComponentForest::singletons(self.graph.vertex_count());
                self.accepted = Vec::with_capacity(self.graph.vertex_count().saturating_sub(1));
                if self.forest.live_count() > 1 {
                    DriverState::RoundInProgress
                } else {
                    DriverState::Done
                }
            }
            DriverState::RoundInProgress => {
                self.rounds = self.rounds.saturating_add(1);
                self.collect_candidates();
                DriverState::Merging
            }
            DriverState::Merging => {
                let live_before = self.forest.live_count();
                let merges = self.apply_merges()?;
                debug!(
                    round = self.rounds,
                    live_before,
                    merges,
                    live_after = self.forest.live_count(),
                    "round merged"
                );
                if merges == 0 || self.forest.live_count() <= 1 {
                    DriverState::Done
                } else {
                    DriverState::RoundInProgress
                }
            }
            DriverState::Done => DriverState::Done,
        };
        Ok(self.state)
    }

    /// Runs to [`DriverState::Done`] and returns the forest.
    ///
    /// # Errors
    /// Returns [`MstError::InvariantViolation`] if the forest rejects a merge
    /// or the final partition is inconsistent.
    pub fn finish(mut self) -> Result<MinimumSpanningForest, MstError> {
        while self.step()? != DriverState::Done {}
        if let Err(err) = self.forest.validate() {
            error!(error = %err, code = %err.code(), "component forest is inconsistent");
            return Err(err);
        }
        let mut edges = self.accepted;
        edges.sort_unstable();
        Ok(MinimumSpanningForest {
            edges,
            components: self.forest.into_components(),
            rounds: self.rounds,
        })
    }

    #[instrument(
        name = "core.round",
        level = "debug",
        skip(self),
        fields(round = self.rounds, live = self.forest.live_count()),
    )]
    fn collect_candidates(&mut self) {
        let snapshot = self.forest.live_components();
        let (graph, forest, searcher) = (self.graph, &self.forest, &self.searcher);
        self.candidates = snapshot
            .into_iter()
            .filter_map(|component| searcher.find(graph, forest, component))
            .collect();
    }

    fn apply_merges(&mut self) -> Result<usize, MstError> {
        let mut merges = 0_usize;
        for edge in mem::take(&mut self.candidates) {
            let (Some(left), Some(right)) = (
                self.forest.component_of(edge.source()),
                self.forest.component_of(edge.target()),
            ) else {
                return Err(MstError::InvariantViolation {
                    invariant: "candidate endpoints must belong to the forest",
                    component: edge.source(),
                });
            };
            // Both components may have picked this edge, or an earlier merge
            // this round already joined them.
            if left == right {
                continue;
            }
            self.forest.merge(left, right).inspect_err(|err| {
                error!(error = %err, code = %err.code(), "merge rejected");
            })?;
            self.accepted.push(edge);
            merges += 1;
        }
        Ok(merges)
    }
}
