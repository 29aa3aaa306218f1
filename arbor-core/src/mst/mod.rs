//! Minimum spanning tree (MST) construction with Kruskal's algorithm.
//!
//! The engine stably sorts a copy of the input edge list by weight and feeds
//! it through a fresh [`DisjointSet`], accepting every edge whose endpoints
//! still live in different components. Equal weights keep their input order,
//! so the result is reproducible for a fixed edge order. The accepted edges
//! are written into a brand new [`Graph`]; the input is never mutated.

use tracing::{debug, instrument};

use crate::{
    disjoint_set::DisjointSet,
    error::{GraphError, Result},
    graph::{Graph, Weight},
};

/// Controls how vertices with no accepted edge appear in the result graph.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum IsolatedVertices {
    /// Register every input vertex in input order before adding edges.
    ///
    /// Isolated vertices survive as single-vertex trees and the result uses
    /// the same vertex numbering as the input.
    #[default]
    Preserve,
    /// Learn vertices only from accepted edges.
    ///
    /// Vertices are numbered by first appearance in the accepted edge
    /// sequence and isolated vertices are absent from the result.
    Drop,
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningForest {
    graph: Graph,
    total_weight: Weight,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the graph holding the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Consumes the forest and returns its graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Returns the summed weight of the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the number of connected components of the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the input graph formed a single component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Configurable Kruskal engine.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, IsolatedVertices, Kruskal};
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1);
/// graph.add_edge("B", "C", 2);
/// graph.add_edge("A", "C", 3);
/// graph.add_vertex("D");
///
/// let forest = Kruskal::new().find_mst(&graph)?;
/// assert_eq!(forest.total_weight(), 3);
/// assert_eq!(forest.graph().vertex_count(), 4);
/// assert_eq!(forest.component_count(), 2);
///
/// let dropped = Kruskal::new()
///     .with_isolated_vertices(IsolatedVertices::Drop)
///     .find_mst(&graph)?;
/// assert_eq!(dropped.graph().vertex_count(), 3);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Kruskal {
    isolated_vertices: IsolatedVertices,
}

impl Kruskal {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the isolated-vertex policy.
    #[must_use]
    pub fn with_isolated_vertices(mut self, policy: IsolatedVertices) -> Self {
        self.isolated_vertices = policy;
        self
    }

    /// Returns the configured isolated-vertex policy.
    #[must_use]
    #[rustfmt::skip]
    pub fn isolated_vertices(&self) -> IsolatedVertices { self.isolated_vertices }

    /// Computes a minimum spanning forest of `graph`.
    ///
    /// A disconnected input yields one tree per component and an empty
    /// input yields an empty forest; neither is an error. Self-loops are
    /// always rejected because both endpoints share a component.
    ///
    /// # Errors
    /// Returns [`GraphError::WeightOverflow`] when the total of the
    /// accepted weights does not fit in an `i64`, and [`GraphError::OutOfRange`] if an edge
    /// references a vertex the graph does not hold.
    #[instrument(
        name = "mst.kruskal",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            isolated = ?self.isolated_vertices,
        ),
    )]
    pub fn find_mst(&self, graph: &Graph) -> Result<SpanningForest> {
        let mut sorted = graph.edges().to_vec();
        sorted.sort_by_key(|edge| edge.weight());

        let mut sets = DisjointSet::new(graph.vertex_count());
        let mut forest = Graph::new();
        if self.isolated_vertices == IsolatedVertices::Preserve {
            for label in graph.vertices() {
                forest.add_vertex(label);
            }
        }

        let mut sum: i128 = 0;
        for edge in &sorted {
            let (left, right) = (edge.vertex1(), edge.vertex2());
            if sets.find(left)? == sets.find(right)? {
                record_rejected();
                continue;
            }
            sets.union_sets(left, right)?;

            let left_name = graph.vertex_name(left)?;
            let right_name = graph.vertex_name(right)?;
            forest.add_edge(left_name, right_name, edge.weight());
            sum += i128::from(edge.weight());
            record_accepted();
            debug!(
                left = left_name,
                right = right_name,
                weight = edge.weight(),
                "accepted edge"
            );
        }

        let total_weight =
            Weight::try_from(sum).map_err(|_| GraphError::WeightOverflow)?;
        debug!(
            accepted = forest.edge_count(),
            total_weight,
            components = sets.component_count(),
            "kruskal completed"
        );
        Ok(SpanningForest {
            graph: forest,
            total_weight,
            component_count: sets.component_count(),
        })
    }
}

/// Computes a minimum spanning forest with the default [`Kruskal`] engine.
///
/// # Errors
/// See [`Kruskal::find_mst`].
///
/// # Examples
/// ```
/// use arbor_core::{Graph, find_mst};
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1);
/// graph.add_edge("C", "D", 1);
/// let forest = find_mst(&graph)?;
/// assert_eq!(forest.total_weight(), 2);
/// assert!(!forest.is_tree());
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
pub fn find_mst(graph: &Graph) -> Result<SpanningForest> {
    Kruskal::new().find_mst(graph)
}

#[cfg(feature = "metrics")]
fn record_accepted() {
    metrics::counter!("mst_edges_accepted").increment(1);
}

#[cfg(not(feature = "metrics"))]
const fn record_accepted() {}

#[cfg(feature = "metrics")]
fn record_rejected() {
    metrics::counter!("mst_edges_rejected").increment(1);
}

#[cfg(not(feature = "metrics"))]
const fn record_rejected() {}

#[cfg(test)]
mod property;
