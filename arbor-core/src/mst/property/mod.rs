//! Property-based tests for the Kruskal engine.
//!
//! Verifies minimality against an exhaustive spanning-forest oracle,
//! validates structural invariants (acyclicity, edge count, vertex
//! retention), and checks that repeated runs over the same edge order are
//! identical, across graph topologies with varied weight distributions.

mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
