//! Properties 1 and 2: equivalence with the oracle and across strategies.
//!
//! For any generated input graph, the sequential driver must select exactly
//! the edges of a sequential Kruskal oracle that uses the same total edge
//! order, and the concurrent driver must return the same forest as the
//! sequential one.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::MinimumSpanningForest;

use super::helpers::{fixture_graph, run_mst, weights_match};
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture_graph(fixture)?;
    let forest = run_mst(fixture, &graph, 1, "sequential")?;
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    if !weights_match(forest.total_weight(), oracle.total_weight) {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: boruvka={}, oracle={} ({})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.context(),
        )));
    }

    if forest.edges().len() != oracle.edge_count() {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: boruvka={}, oracle={} ({})",
            forest.edges().len(),
            oracle.edge_count(),
            fixture.context(),
        )));
    }

    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: boruvka={}, oracle={} ({})",
            forest.component_count(),
            oracle.component_count,
            fixture.context(),
        )));
    }

    // With a strict total edge order the minimum spanning forest is unique.
    let selected = edge_keys(&forest);
    if selected != oracle.edges {
        return Err(TestCaseError::fail(format!(
            "edge set differs from oracle: boruvka={selected:?}, oracle={:?} ({})",
            oracle.edges,
            fixture.context(),
        )));
    }

    Ok(())
}

/// Runs the sequential/concurrent equivalence property for the given fixture.
pub(super) fn run_strategy_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture_graph(fixture)?;
    let sequential = run_mst(fixture, &graph, 1, "sequential")?;

    for parallelism in [2, 4] {
        let concurrent = run_mst(fixture, &graph, parallelism, "concurrent")?;

        if !weights_match(sequential.total_weight(), concurrent.total_weight())
            || sequential.edges().len() != concurrent.edges().len()
        {
            return Err(TestCaseError::fail(format!(
                "parallelism={parallelism}: weight/cardinality diverged: \
                 sequential=({}, {}), concurrent=({}, {}) ({})",
                sequential.total_weight(),
                sequential.edges().len(),
                concurrent.total_weight(),
                concurrent.edges().len(),
                fixture.context(),
            )));
        }

        if concurrent != sequential {
            return Err(TestCaseError::fail(format!(
                "parallelism={parallelism}: forest differs from sequential run ({})",
                fixture.context(),
            )));
        }
    }

    Ok(())
}

fn edge_keys(forest: &MinimumSpanningForest) -> Vec<(usize, usize, u64)> {
    let mut keys: Vec<_> = forest
        .edges()
        .iter()
        .map(|edge| (edge.source(), edge.target(), edge.sequence()))
        .collect();
    keys.sort_unstable_by_key(|&(_, _, sequence)| sequence);
    keys
}
