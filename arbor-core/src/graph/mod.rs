//! Undirected weighted graph keyed by vertex labels.
//!
//! Vertices carry a unique label and a dense index assigned in insertion
//! order. Edges are stored in a flat list and every structural view is
//! derived from that list on demand.

use std::collections::HashMap;

use crate::error::{GraphError, Result};

/// Edge weight type. Any integer is passed through unchanged.
pub type Weight = i64;

/// An undirected edge between two vertex indices.
///
/// The endpoint order is storage order only; `(a, b)` and `(b, a)` describe
/// the same connection.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    vertex1: usize,
    vertex2: usize,
    weight: Weight,
}

impl Edge {
    /// Creates an edge between two vertex indices.
    #[must_use]
    pub const fn new(vertex1: usize, vertex2: usize, weight: Weight) -> Self {
        Self {
            vertex1,
            vertex2,
            weight,
        }
    }

    /// Returns the first stored endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex1(&self) -> usize { self.vertex1 }

    /// Returns the second stored endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex2(&self) -> usize { self.vertex2 }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.vertex1 == self.vertex2
    }
}

/// A neighbour entry in an [`AdjacencyList`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Neighbour {
    /// Index of the adjacent vertex.
    pub vertex: usize,
    /// Weight of the connecting edge.
    pub weight: Weight,
}

/// Per-vertex neighbour lists, indexed by vertex.
pub type AdjacencyList = Vec<Vec<Neighbour>>;

/// An undirected weighted graph with labelled vertices.
///
/// # Examples
/// ```
/// use arbor_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1);
/// graph.add_edge("B", "C", 2);
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.vertex_index("C"), Some(2));
/// assert_eq!(graph.total_weight()?, 3);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Removes every vertex, label mapping, and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.index.clear();
        self.edges.clear();
    }

    /// Builds a graph from vertex labels and a square weight matrix.
    ///
    /// See [`Graph::load_adjacency_matrix`] for the matrix contract.
    ///
    /// # Errors
    /// Propagates the errors of [`Graph::load_adjacency_matrix`].
    ///
    /// # Examples
    /// ```
    /// use arbor_core::Graph;
    ///
    /// let graph = Graph::from_adjacency_matrix(
    ///     &["A", "B", "C"],
    ///     &[vec![0_i64, 5, 0], vec![5, 0, 3], vec![0, 3, 0]],
    /// )?;
    /// assert_eq!(graph.edge_count(), 2);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    pub fn from_adjacency_matrix<L, R>(labels: &[L], matrix: &[R]) -> Result<Self>
    where
        L: AsRef<str>,
        R: AsRef<[Weight]>,
    {
        let mut graph = Self::new();
        graph.load_adjacency_matrix(labels, matrix)?;
        Ok(graph)
    }

    /// Replaces the graph with the one described by `labels` and `matrix`.
    ///
    /// Only the strict upper triangle is read: each non-zero `matrix[i][j]`
    /// with `i < j` becomes the edge `(i, j)`. The lower triangle and the
    /// diagonal are ignored.
    ///
    /// # Errors
    /// Returns [`GraphError::DimensionMismatch`] when the matrix is not
    /// `labels.len()` square and [`GraphError::DuplicateVertex`] when a label
    /// repeats. The graph is unchanged on error.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge("X", "Y", 9);
    /// graph.load_adjacency_matrix(&["A", "B"], &[[0_i64, 4], [4, 0]])?;
    /// assert_eq!(graph.vertex_index("X"), None);
    /// assert_eq!(graph.edge_count(), 1);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    pub fn load_adjacency_matrix<L, R>(&mut self, labels: &[L], matrix: &[R]) -> Result<()>
    where
        L: AsRef<str>,
        R: AsRef<[Weight]>,
    {
        let side = labels.len();
        if matrix.len() != side {
            return Err(GraphError::DimensionMismatch {
                expected: side,
                row: None,
                actual: matrix.len(),
            });
        }
        if let Some((row, actual)) = matrix
            .iter()
            .map(|row| row.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != side)
        {
            return Err(GraphError::DimensionMismatch {
                expected: side,
                row: Some(row),
                actual,
            });
        }

        let mut index = HashMap::with_capacity(side);
        for (position, label) in labels.iter().enumerate() {
            let label = label.as_ref();
            if index.insert(label.to_owned(), position).is_some() {
                return Err(GraphError::DuplicateVertex {
                    label: label.to_owned(),
                });
            }
        }

        let mut edges = Vec::new();
        for (i, row) in matrix.iter().enumerate() {
            for (j, &weight) in row.as_ref().iter().enumerate().skip(i + 1) {
                if weight != 0 {
                    edges.push(Edge::new(i, j, weight));
                }
            }
        }

        self.vertices = labels.iter().map(|label| label.as_ref().to_owned()).collect();
        self.index = index;
        self.edges = edges;
        Ok(())
    }

    /// Registers `label` if it is unseen and returns its index.
    pub fn add_vertex(&mut self, label: &str) -> usize {
        if let Some(&existing) = self.index.get(label) {
            return existing;
        }
        let position = self.vertices.len();
        self.vertices.push(label.to_owned());
        self.index.insert(label.to_owned(), position);
        position
    }

    /// Appends an edge between two labels, registering unseen labels first.
    ///
    /// `label1` is registered before `label2`, so the order of first
    /// appearance fixes the vertex numbering.
    pub fn add_edge(&mut self, label1: &str, label2: &str, weight: Weight) {
        let vertex1 = self.add_vertex(label1);
        let vertex2 = self.add_vertex(label2);
        self.edges.push(Edge::new(vertex1, vertex2, weight));
    }

    /// Appends an edge between two already registered vertex indices.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidIndices`] when either index is not below
    /// [`Graph::vertex_count`]; the graph is unchanged in that case.
    pub fn add_edge_between(&mut self, vertex1: usize, vertex2: usize, weight: Weight) -> Result<()> {
        let vertex_count = self.vertex_count();
        if vertex1 >= vertex_count || vertex2 >= vertex_count {
            return Err(GraphError::InvalidIndices {
                first: vertex1,
                second: vertex2,
                vertex_count,
            });
        }
        self.edges.push(Edge::new(vertex1, vertex2, weight));
        Ok(())
    }

    /// Returns the number of registered vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of stored edges, duplicates and self-loops included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the label of the vertex at `index`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when `index` is not registered.
    pub fn vertex_name(&self, index: usize) -> Result<&str> {
        self.vertices
            .get(index)
            .map(String::as_str)
            .ok_or(GraphError::OutOfRange {
                index,
                len: self.vertices.len(),
            })
    }

    /// Returns the index registered for `label`, if any.
    #[must_use]
    pub fn vertex_index(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Returns every vertex label in index order.
    #[must_use]
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Returns the edge list in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Derives neighbour lists from the edge list.
    ///
    /// Each edge contributes an entry to both endpoints, in edge-list order.
    /// A self-loop therefore appears twice in its vertex's list.
    #[must_use]
    pub fn adjacency_list(&self) -> AdjacencyList {
        let mut list = vec![Vec::new(); self.vertices.len()];
        for edge in &self.edges {
            list[edge.vertex1].push(Neighbour {
                vertex: edge.vertex2,
                weight: edge.weight,
            });
            list[edge.vertex2].push(Neighbour {
                vertex: edge.vertex1,
                weight: edge.weight,
            });
        }
        list
    }

    /// Derives a symmetric `n × n` weight matrix; zero means "no edge".
    ///
    /// When parallel edges exist, the last one in edge-list order wins.
    #[must_use]
    pub fn adjacency_matrix(&self) -> Vec<Vec<Weight>> {
        let side = self.vertices.len();
        let mut matrix = vec![vec![0; side]; side];
        for edge in &self.edges {
            matrix[edge.vertex1][edge.vertex2] = edge.weight;
            matrix[edge.vertex2][edge.vertex1] = edge.weight;
        }
        matrix
    }

    /// Derives the `n × m` incidence matrix.
    ///
    /// Column `k` describes edge `k`: `1` marks `vertex1` and `-1` marks
    /// `vertex2`. A self-loop column holds a single `-1`.
    #[must_use]
    pub fn incidence_matrix(&self) -> Vec<Vec<i8>> {
        let mut matrix = vec![vec![0; self.edges.len()]; self.vertices.len()];
        for (column, edge) in self.edges.iter().enumerate() {
            matrix[edge.vertex1][column] = 1;
            matrix[edge.vertex2][column] = -1;
        }
        matrix
    }

    /// Sums every edge weight.
    ///
    /// # Errors
    /// Returns [`GraphError::WeightOverflow`] when the final sum does not fit
    /// in an `i64`. Intermediate sums are not bounded.
    pub fn total_weight(&self) -> Result<Weight> {
        let sum: i128 = self.edges.iter().map(|edge| i128::from(edge.weight)).sum();
        Weight::try_from(sum).map_err(|_| GraphError::WeightOverflow)
    }
}
