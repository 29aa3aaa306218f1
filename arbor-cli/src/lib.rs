//! Support library for the arbor CLI binary.
//!
//! Exposes the command pipeline, renderers, DOT export, and the interactive
//! session so tests can drive them without forking a subprocess.

pub mod cli;
pub mod dot;
pub mod logging;
pub mod render;
pub mod session;
