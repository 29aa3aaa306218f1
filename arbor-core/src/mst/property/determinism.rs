//! Property 3: determinism.
//!
//! Runs Kruskal repeatedly on the same graph and asserts that the exact
//! edge sequence, total weight, and component count never change.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{IsolatedVertices, Kruskal};

use super::types::MstFixture;

/// Number of repeated runs compared against the baseline.
const REPETITIONS: usize = 4;

/// Runs the determinism property for the given fixture under both
/// isolated-vertex policies.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.to_graph();

    for policy in [IsolatedVertices::Preserve, IsolatedVertices::Drop] {
        let engine = Kruskal::new().with_isolated_vertices(policy);
        let baseline = engine.find_mst(&graph).map_err(|err| {
            TestCaseError::fail(format!(
                "baseline find_mst failed: {err} ({})",
                fixture.context()
            ))
        })?;

        for run in 1..=REPETITIONS {
            let repeat = engine.find_mst(&graph).map_err(|err| {
                TestCaseError::fail(format!(
                    "run {run}: find_mst failed: {err} ({})",
                    fixture.context()
                ))
            })?;
            if repeat != baseline {
                return Err(TestCaseError::fail(format!(
                    "run {run}: result diverged from baseline under {policy:?} ({})",
                    fixture.context(),
                )));
            }
        }
    }

    Ok(())
}
