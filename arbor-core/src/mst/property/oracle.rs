//! Exhaustive spanning-forest oracle for MST property verification.
//!
//! Enumerates every edge subset of size `V - C` (where `C` is the number of
//! connected components of the input) and keeps the acyclic ones. Each such
//! subset is a spanning forest, so the smallest total among them is the
//! minimum spanning forest weight. Only usable on small graphs.

use crate::graph::Weight;

use super::helpers::{count_components, find_root};

/// Result of the exhaustive oracle.
#[derive(Clone, Debug)]
pub(super) struct ExhaustiveResult {
    /// Minimum total weight over all spanning forests.
    pub minimum_weight: i128,
    /// Number of edges every spanning forest contains.
    pub edge_count: usize,
    /// Number of connected components of the input.
    pub component_count: usize,
    /// Number of spanning forests that were enumerated.
    pub forests_seen: usize,
}

/// Computes the minimum spanning forest weight by brute force.
pub(super) fn exhaustive_minimum(
    vertex_count: usize,
    edges: &[(usize, usize, Weight)],
) -> ExhaustiveResult {
    let component_count =
        count_components(vertex_count, edges.iter().map(|&(left, right, _)| (left, right)));
    let edge_count = vertex_count - component_count;

    let mut search = Search {
        vertex_count,
        edges,
        chosen: Vec::with_capacity(edge_count),
        best: None,
        forests_seen: 0,
    };
    search.choose(0, edge_count);

    ExhaustiveResult {
        minimum_weight: search.best.unwrap_or(0),
        edge_count,
        component_count,
        forests_seen: search.forests_seen,
    }
}

struct Search<'a> {
    vertex_count: usize,
    edges: &'a [(usize, usize, Weight)],
    chosen: Vec<usize>,
    best: Option<i128>,
    forests_seen: usize,
}

impl Search<'_> {
    /// Extends `chosen` with `remaining` more edges taken from `start..`.
    fn choose(&mut self, start: usize, remaining: usize) {
        if remaining == 0 {
            self.evaluate();
            return;
        }
        if self.edges.len() - start < remaining {
            return;
        }
        for next in start..self.edges.len() {
            self.chosen.push(next);
            self.choose(next + 1, remaining - 1);
            self.chosen.pop();
        }
    }

    fn evaluate(&mut self) {
        let mut parent: Vec<usize> = (0..self.vertex_count).collect();
        let mut total: i128 = 0;
        for &position in &self.chosen {
            let (left, right, weight) = self.edges[position];
            let left_root = find_root(&mut parent, left);
            let right_root = find_root(&mut parent, right);
            if left_root == right_root {
                return;
            }
            parent[right_root] = left_root;
            total += i128::from(weight);
        }
        self.forests_seen += 1;
        self.best = Some(self.best.map_or(total, |best| best.min(total)));
    }
}
