//! Arbor core library.
//!
//! An undirected weighted graph with labelled vertices, a disjoint-set
//! forest, Kruskal's minimum spanning forest, and depth-first and
//! breadth-first traversals.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod mst;
mod traversal;

#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{GraphError, GraphErrorCode, Result},
    graph::{AdjacencyList, Edge, Graph, Neighbour, Weight},
    mst::{IsolatedVertices, Kruskal, SpanningForest, find_mst},
    traversal::{breadth_first, depth_first},
};
