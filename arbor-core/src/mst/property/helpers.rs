//! Shared helper functions for MST property-based tests.

use crate::graph::Graph;

/// Path-halving find for independent union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts connected components of `vertex_count` vertices joined by
/// `edges`. Self-loops never merge anything.
pub(super) fn count_components(
    vertex_count: usize,
    edges: impl IntoIterator<Item = (usize, usize)>,
) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for (left, right) in edges {
        let left_root = find_root(&mut parent, left);
        let right_root = find_root(&mut parent, right);
        if left_root != right_root {
            parent[right_root] = left_root;
            components -= 1;
        }
    }
    components
}

/// Maps every result edge back to input indices through vertex labels.
pub(super) fn edges_in_input_numbering(input: &Graph, result: &Graph) -> Vec<(usize, usize)> {
    result
        .edges()
        .iter()
        .map(|edge| {
            let translate = |index: usize| {
                let label = result.vertex_name(index).expect("result vertex exists");
                input.vertex_index(label).expect("result label exists in input")
            };
            (translate(edge.vertex1()), translate(edge.vertex2()))
        })
        .collect()
}
