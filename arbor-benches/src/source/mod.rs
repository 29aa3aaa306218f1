//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: vertex `i` is first joined to a
//! random earlier vertex, then `extra_degree * vertex_count` further edges
//! are drawn between arbitrary vertex pairs. Extra edges may be parallel
//! edges or self-loops, matching what the graph model accepts.

use arbor_core::{Graph, GraphError, Weight};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Configuration for [`generate_graph`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Extra edges per vertex beyond the spanning tree.
    pub extra_degree: usize,
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: Weight,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Errors raised while generating synthetic graphs.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The weight range was empty.
    #[error("maximum weight must be positive, got {max_weight}")]
    NonPositiveWeight {
        /// Configured maximum weight.
        max_weight: Weight,
    },
    /// The requested `extra_degree * vertex_count` overflowed `usize`.
    #[error("extra_degree * vertex_count overflows usize")]
    Overflow,
    /// Inserting an edge failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Builds a connected graph with labels `v0`, `v1`, ...
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is invalid.
///
/// # Examples
/// ```
/// use arbor_benches::source::{SyntheticGraphConfig, generate_graph};
///
/// let graph = generate_graph(&SyntheticGraphConfig {
///     vertex_count: 10,
///     extra_degree: 2,
///     max_weight: 100,
///     seed: 7,
/// })?;
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 9 + 20);
/// # Ok::<(), arbor_benches::source::SyntheticError>(())
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph, SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    if config.max_weight <= 0 {
        return Err(SyntheticError::NonPositiveWeight {
            max_weight: config.max_weight,
        });
    }
    let extra_edges = config
        .extra_degree
        .checked_mul(config.vertex_count)
        .ok_or(SyntheticError::Overflow)?;

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::new();
    for index in 0..config.vertex_count {
        graph.add_vertex(&format!("v{index}"));
    }
    for vertex in 1..config.vertex_count {
        let parent = rng.gen_range(0..vertex);
        let weight = rng.gen_range(1..=config.max_weight);
        graph.add_edge_between(vertex, parent, weight)?;
    }
    for _ in 0..extra_edges {
        let left = rng.gen_range(0..config.vertex_count);
        let right = rng.gen_range(0..config.vertex_count);
        let weight = rng.gen_range(1..=config.max_weight);
        graph.add_edge_between(left, right, weight)?;
    }
    Ok(graph)
}
