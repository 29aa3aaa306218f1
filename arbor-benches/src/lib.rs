//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for Kruskal's algorithm and the graph traversals.

pub mod error;
pub mod params;
pub mod source;
