//! Property 2: structural invariant verification.
//!
//! For any forest produced by Kruskal, verifies:
//!
//! - **Acyclicity**: no accepted edge closes a cycle.
//! - **Edge count**: `V - C` edges for `C` connected components.
//! - **Connectivity**: a connected input produces a spanning tree.
//! - **Provenance**: every result edge exists in the input with the same
//!   weight.
//! - **Vertex retention**: every input vertex is present, in input order.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::find_mst;

use super::helpers::{count_components, edges_in_input_numbering, find_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.to_graph();
    let forest = find_mst(&graph).map_err(|err| {
        TestCaseError::fail(format!("find_mst failed: {err} ({})", fixture.context()))
    })?;
    let result = forest.graph();

    if result.vertices() != graph.vertices() {
        return Err(TestCaseError::fail(format!(
            "result vertices {:?} differ from input vertices ({})",
            result.vertices(),
            fixture.context(),
        )));
    }

    let mapped = edges_in_input_numbering(&graph, result);
    validate_acyclicity(fixture, &mapped)?;
    validate_provenance(fixture, result)?;

    let input_components = count_components(
        fixture.vertex_count,
        fixture.edges.iter().map(|&(left, right, _)| (left, right)),
    );
    if forest.component_count() != input_components {
        return Err(TestCaseError::fail(format!(
            "component count {}, expected {input_components} ({})",
            forest.component_count(),
            fixture.context(),
        )));
    }

    let expected_edges = fixture.vertex_count - input_components;
    if result.edge_count() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected n - c = {expected_edges} ({})",
            result.edge_count(),
            fixture.context(),
        )));
    }

    if input_components == 1 && !forest.is_tree() {
        return Err(TestCaseError::fail(format!(
            "input is connected but output is not a tree ({})",
            fixture.context(),
        )));
    }

    Ok(())
}

fn validate_acyclicity(fixture: &MstFixture, edges: &[(usize, usize)]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    for (position, &(left, right)) in edges.iter().enumerate() {
        let left_root = find_root(&mut parent, left);
        let right_root = find_root(&mut parent, right);
        if left_root == right_root {
            return Err(TestCaseError::fail(format!(
                "edge {position}: ({left}, {right}) creates a cycle ({})",
                fixture.context(),
            )));
        }
        parent[right_root] = left_root;
    }
    Ok(())
}

fn validate_provenance(fixture: &MstFixture, result: &crate::Graph) -> TestCaseResult {
    let mut available = fixture.edges.clone();
    for edge in result.edges() {
        let matched = available.iter().position(|&(left, right, weight)| {
            left == edge.vertex1() && right == edge.vertex2() && weight == edge.weight()
        });
        match matched {
            Some(position) => {
                available.swap_remove(position);
            }
            None => {
                return Err(TestCaseError::fail(format!(
                    "result edge {edge:?} has no matching input edge ({})",
                    fixture.context(),
                )));
            }
        }
    }
    Ok(())
}
