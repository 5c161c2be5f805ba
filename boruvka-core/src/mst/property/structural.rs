//! Property 3: structural invariants of the returned forest.
//!
//! - Every edge is canonical (`source < target`) and has a finite weight.
//! - No edge closes a cycle.
//! - The forest has exactly `V - C` edges for `C` components.
//! - A connected input yields a spanning tree.
//! - The reported components partition the vertex set.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, MinimumSpanningForest};

use super::helpers::{find_root, fixture_graph, run_mst};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture_graph(fixture)?;
    let forest = run_mst(fixture, &graph, 2, "structural")?;

    for (i, edge) in forest.edges().iter().enumerate() {
        check_edge(i, edge).map_err(|msg| fail(fixture, &msg))?;
    }
    check_acyclic(fixture.vertex_count, forest.edges()).map_err(|msg| fail(fixture, &msg))?;

    let expected = fixture.vertex_count - forest.component_count();
    if forest.edges().len() != expected {
        return Err(fail(
            fixture,
            &format!(
                "edge count {}, expected n - c = {expected} (c={})",
                forest.edges().len(),
                forest.component_count(),
            ),
        ));
    }

    let input_components = count_input_components(fixture);
    if input_components != forest.component_count() {
        return Err(fail(
            fixture,
            &format!(
                "input has {input_components} components, forest reports {}",
                forest.component_count(),
            ),
        ));
    }
    if input_components == 1 && !forest.is_tree() {
        return Err(fail(fixture, "connected input did not yield a tree"));
    }

    check_partition(fixture.vertex_count, &forest).map_err(|msg| fail(fixture, &msg))
}

fn fail(fixture: &MstFixture, msg: &str) -> TestCaseError {
    TestCaseError::fail(format!("{msg} ({})", fixture.context()))
}

fn check_edge(i: usize, edge: &Edge) -> Result<(), String> {
    if edge.source() >= edge.target() {
        return Err(format!(
            "edge {i}: not canonical ({} >= {})",
            edge.source(),
            edge.target()
        ));
    }
    if !edge.weight().is_finite() {
        return Err(format!("edge {i}: non-finite weight {}", edge.weight()));
    }
    Ok(())
}

fn check_acyclic(vertex_count: usize, edges: &[Edge]) -> Result<(), String> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return Err(format!(
                "edge {i}: ({}, {}) creates a cycle",
                edge.source(),
                edge.target()
            ));
        }
        parent[right] = left;
    }
    Ok(())
}

/// Every vertex must appear in exactly one reported component.
fn check_partition(vertex_count: usize, forest: &MinimumSpanningForest) -> Result<(), String> {
    let mut seen = vec![false; vertex_count];
    for members in forest.components() {
        if members.is_empty() {
            return Err("empty component reported".to_owned());
        }
        for &vertex in members {
            match seen.get_mut(vertex) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => return Err(format!("vertex {vertex} reported twice")),
                None => return Err(format!("vertex {vertex} out of range")),
            }
        }
    }
    match seen.iter().position(|&covered| !covered) {
        Some(vertex) => Err(format!("vertex {vertex} missing from components")),
        None => Ok(()),
    }
}

fn count_input_components(fixture: &MstFixture) -> usize {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    let mut components = fixture.vertex_count;
    for &(left, right, _) in &fixture.edges {
        let a = find_root(&mut parent, left);
        let b = find_root(&mut parent, right);
        if a != b {
            parent[b] = a;
            components -= 1;
        }
    }
    components
}
