//! Strategy builders for MST property-based tests.
//!
//! Produces graphs with varied weight distributions and topologies. Each
//! generator emits `(vertex1, vertex2, weight)` triples in insertion order;
//! some distributions deliberately include self-loops and parallel edges
//! because the graph model keeps both.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::Weight;

use super::types::{MstFixture, WeightDistribution};

/// Size limits applied while generating a fixture.
#[derive(Clone, Copy, Debug)]
pub(super) struct GraphScale {
    /// Upper bound for the vertex count (inclusive).
    pub max_vertices: usize,
    /// Upper bound for the number of generated edges.
    pub max_edges: usize,
}

/// Small enough for exhaustive spanning-forest enumeration.
pub(super) const SMALL: GraphScale = GraphScale {
    max_vertices: 8,
    max_edges: 16,
};

/// Larger graphs for structural and determinism checks.
pub(super) const LARGE: GraphScale = GraphScale {
    max_vertices: 48,
    max_edges: 400,
};

/// Generates MST fixtures covering all weight distributions at `scale`.
pub(super) fn mst_fixture_strategy(scale: GraphScale) -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(move |(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, scale, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    scale: GraphScale,
    rng: &mut SmallRng,
) -> MstFixture {
    let mut fixture = match distribution {
        WeightDistribution::Unique => generate_unique(scale, rng),
        WeightDistribution::ManyIdentical => generate_identical(scale, rng),
        WeightDistribution::Signed => generate_signed(scale, rng),
        WeightDistribution::Dense => generate_dense(scale, rng),
        WeightDistribution::Disconnected => generate_disconnected(scale, rng),
    };
    fixture.edges.truncate(scale.max_edges);
    fixture
}

// ── Probabilistic graph helper ──────────────────────────────────────────

/// Adds each unordered vertex pair with probability `edge_probability`,
/// drawing weights from `weight`.
fn probabilistic_edges(
    vertex_count: usize,
    edge_probability: f64,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> Weight,
) -> Vec<(usize, usize, Weight)> {
    let mut edges = Vec::new();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let value = weight(rng);
                edges.push(orient(left, right, value, rng));
            }
        }
    }
    edges
}

/// Randomly swaps endpoint storage order; the graph is undirected.
fn orient(left: usize, right: usize, weight: Weight, rng: &mut SmallRng) -> (usize, usize, Weight) {
    if rng.gen_bool(0.5) {
        (left, right, weight)
    } else {
        (right, left, weight)
    }
}

fn draw_vertex_count(scale: GraphScale, rng: &mut SmallRng) -> usize {
    rng.gen_range(1..=scale.max_vertices)
}

// ── Distributions ───────────────────────────────────────────────────────

fn generate_unique(scale: GraphScale, rng: &mut SmallRng) -> MstFixture {
    let vertex_count = draw_vertex_count(scale, rng);
    let probability = rng.gen_range(0.3..=0.7);
    let mut edges = probabilistic_edges(vertex_count, probability, rng, |_| 0);
    let mut weights: Vec<Weight> = (1..).take(edges.len()).collect();
    shuffle(&mut weights, rng);
    for (edge, weight) in edges.iter_mut().zip(weights) {
        edge.2 = weight;
    }
    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Unique,
    }
}

fn generate_identical(scale: GraphScale, rng: &mut SmallRng) -> MstFixture {
    let vertex_count = draw_vertex_count(scale, rng);
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<Weight> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    let probability = rng.gen_range(0.3..=0.8);
    let edges = probabilistic_edges(vertex_count, probability, rng, |r| {
        pool[r.gen_range(0..pool.len())]
    });
    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::ManyIdentical,
    }
}

fn generate_signed(scale: GraphScale, rng: &mut SmallRng) -> MstFixture {
    let vertex_count = draw_vertex_count(scale, rng);
    let probability = rng.gen_range(0.2..=0.6);
    let mut edges = probabilistic_edges(vertex_count, probability, rng, |r| r.gen_range(-20..=20));

    // Sprinkle in parallel edges and self-loops.
    let extras = rng.gen_range(0..=3);
    for _ in 0..extras {
        let left = rng.gen_range(0..vertex_count);
        let right = if rng.gen_bool(0.3) {
            left
        } else {
            rng.gen_range(0..vertex_count)
        };
        let position = rng.gen_range(0..=edges.len());
        edges.insert(position, (left, right, rng.gen_range(-20..=20)));
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Signed,
    }
}

fn generate_dense(scale: GraphScale, rng: &mut SmallRng) -> MstFixture {
    // Keep the complete graph within the edge budget.
    let mut max_vertices = scale.max_vertices;
    while max_vertices > 1 && max_vertices * (max_vertices - 1) / 2 > scale.max_edges {
        max_vertices -= 1;
    }
    let vertex_count = rng.gen_range(1..=max_vertices);
    let probability = rng.gen_range(0.7..=0.95);
    let edges = probabilistic_edges(vertex_count, probability, rng, |r| r.gen_range(1..=50));
    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Dense,
    }
}

fn generate_disconnected(scale: GraphScale, rng: &mut SmallRng) -> MstFixture {
    let max_component = (scale.max_vertices / 2).max(1);
    let component_count = rng.gen_range(2..=3);
    let mut edges = Vec::new();
    let mut offset = 0;

    for _ in 0..component_count {
        let size = rng.gen_range(1..=max_component).min(scale.max_vertices - offset);
        if size == 0 {
            break;
        }
        let probability = rng.gen_range(0.4..=0.9);
        for (left, right, weight) in
            probabilistic_edges(size, probability, rng, |r| r.gen_range(1..=30))
        {
            edges.push((left + offset, right + offset, weight));
        }
        offset += size;
    }

    MstFixture {
        vertex_count: offset.max(1),
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Biased towards `ManyIdentical`, the case that exercises tie ordering.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Signed),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
