//! Shared helper functions for MST property-based tests.

use proptest::test_runner::TestCaseError;

use crate::{Graph, MinimumSpanningForest, compute_mst};

use super::types::MstFixture;

/// Path-compressing find for union-find verification.
pub(crate) fn find_root(parent: &mut [usize], mut vertex: usize) -> usize {
    while parent[vertex] != vertex {
        parent[vertex] = parent[parent[vertex]];
        vertex = parent[vertex];
    }
    vertex
}

/// Builds the fixture graph, mapping construction failures to test failures.
pub(super) fn fixture_graph(fixture: &MstFixture) -> Result<Graph, TestCaseError> {
    fixture.graph().map_err(|e| {
        TestCaseError::fail(format!("graph construction failed: {e} ({})", fixture.context()))
    })
}

/// Runs the driver with `parallelism` workers, labelling failures with `label`.
pub(super) fn run_mst(
    fixture: &MstFixture,
    graph: &Graph,
    parallelism: usize,
    label: &str,
) -> Result<MinimumSpanningForest, TestCaseError> {
    compute_mst(graph, parallelism).map_err(|e| {
        TestCaseError::fail(format!(
            "{label}: compute_mst(parallelism={parallelism}) failed: {e} ({})",
            fixture.context(),
        ))
    })
}

/// Returns `true` when two weight sums agree within accumulated rounding.
pub(super) fn weights_match(left: f64, right: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() <= scale * 1e-9
}
