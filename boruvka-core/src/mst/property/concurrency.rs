//! Property 4: concurrency safety.
//!
//! Re-runs the concurrent driver on the same input and requires every run to
//! return exactly the baseline forest, catching scheduling-dependent results.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::helpers::{fixture_graph, run_mst};
use super::types::{ConcurrencyConfig, MstFixture};

/// Runs the concurrency safety property for the given fixture.
///
/// The repetition count comes from [`ConcurrencyConfig`].
pub(super) fn run_concurrency_safety_property(fixture: &MstFixture) -> TestCaseResult {
    let config = ConcurrencyConfig::load();
    let graph = fixture_graph(fixture)?;
    let baseline = run_mst(fixture, &graph, config.parallelism, "baseline")?;

    for run in 1..config.repetitions {
        let result = run_mst(fixture, &graph, config.parallelism, "repeat")?;

        if result.total_weight().to_bits() != baseline.total_weight().to_bits() {
            return Err(TestCaseError::fail(format!(
                "run {run}: total weight diverged: baseline={}, run={} ({})",
                baseline.total_weight(),
                result.total_weight(),
                fixture.context(),
            )));
        }

        if result.edges() != baseline.edges() {
            return Err(TestCaseError::fail(format!(
                "run {run}: edge list differs from baseline ({})",
                fixture.context(),
            )));
        }

        if result.components() != baseline.components() {
            return Err(TestCaseError::fail(format!(
                "run {run}: component partition differs from baseline ({})",
                fixture.context(),
            )));
        }
    }

    Ok(())
}
