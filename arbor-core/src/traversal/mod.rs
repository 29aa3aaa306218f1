//! Depth-first and breadth-first traversal over a [`Graph`].
//!
//! Both walks start from a vertex label, read neighbours from
//! [`Graph::adjacency_list`], and return the labels in emission order.
//! Vertices outside the start vertex's component are never emitted.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::{
    error::{GraphError, Result},
    graph::Graph,
};

/// Walks `graph` depth-first from `start`.
///
/// Uses an explicit stack. Every neighbour of a freshly visited vertex is
/// pushed in adjacency-list order without consulting the visited set, and
/// stale entries are discarded when popped. Because the stack is LIFO, the
/// last neighbour pushed is explored first.
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] when `start` is not registered.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, depth_first};
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1);
/// graph.add_edge("B", "C", 2);
/// graph.add_edge("A", "C", 3);
/// assert_eq!(depth_first(&graph, "A")?, ["A", "C", "B"]);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[instrument(
    name = "traversal.dfs",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn depth_first<'g>(graph: &'g Graph, start: &str) -> Result<Vec<&'g str>> {
    let origin = resolve(graph, start)?;
    let adjacency = graph.adjacency_list();
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::with_capacity(graph.vertex_count());
    let mut stack = vec![origin];

    while let Some(vertex) = stack.pop() {
        if visited.get(vertex).copied().unwrap_or(true) {
            continue;
        }
        visited[vertex] = true;
        order.push(graph.vertex_name(vertex)?);
        if let Some(neighbours) = adjacency.get(vertex) {
            stack.extend(neighbours.iter().map(|neighbour| neighbour.vertex));
        }
    }

    debug!(visited = order.len(), "depth-first traversal completed");
    Ok(order)
}

/// Walks `graph` breadth-first from `start`.
///
/// Vertices are marked visited when enqueued, so each is queued at most
/// once.
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] when `start` is not registered.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, breadth_first};
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1);
/// graph.add_edge("B", "C", 2);
/// graph.add_edge("D", "E", 3);
/// assert_eq!(breadth_first(&graph, "B")?, ["B", "A", "C"]);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[instrument(
    name = "traversal.bfs",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn breadth_first<'g>(graph: &'g Graph, start: &str) -> Result<Vec<&'g str>> {
    let origin = resolve(graph, start)?;
    let adjacency = graph.adjacency_list();
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::with_capacity(graph.vertex_count());
    let mut queue = VecDeque::from([origin]);
    visited[origin] = true;

    while let Some(vertex) = queue.pop_front() {
        order.push(graph.vertex_name(vertex)?);
        let Some(neighbours) = adjacency.get(vertex) else {
            continue;
        };
        for neighbour in neighbours {
            if !visited[neighbour.vertex] {
                visited[neighbour.vertex] = true;
                queue.push_back(neighbour.vertex);
            }
        }
    }

    debug!(visited = order.len(), "breadth-first traversal completed");
    Ok(order)
}

fn resolve(graph: &Graph, label: &str) -> Result<usize> {
    graph
        .vertex_index(label)
        .ok_or_else(|| GraphError::VertexNotFound {
            label: label.to_owned(),
        })
}
