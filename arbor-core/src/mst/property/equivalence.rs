//! Property 1: minimality against the exhaustive oracle.
//!
//! For every small generated graph, the Kruskal forest must have the same
//! edge count, component count, and total weight as the cheapest spanning
//! forest found by brute-force enumeration.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::find_mst;

use super::oracle::exhaustive_minimum;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.to_graph();
    let forest = find_mst(&graph).map_err(|err| {
        TestCaseError::fail(format!("find_mst failed: {err} ({})", fixture.context()))
    })?;
    let oracle = exhaustive_minimum(fixture.vertex_count, &fixture.edges);

    if oracle.forests_seen == 0 {
        return Err(TestCaseError::fail(format!(
            "oracle enumerated no spanning forest ({})",
            fixture.context()
        )));
    }

    let actual_weight = i128::from(forest.total_weight());
    if actual_weight != oracle.minimum_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={actual_weight}, oracle={} ({})",
            oracle.minimum_weight,
            fixture.context(),
        )));
    }

    if forest.graph().edge_count() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, oracle={} ({})",
            forest.graph().edge_count(),
            oracle.edge_count,
            fixture.context(),
        )));
    }

    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: kruskal={}, oracle={} ({})",
            forest.component_count(),
            oracle.component_count,
            fixture.context(),
        )));
    }

    Ok(())
}
