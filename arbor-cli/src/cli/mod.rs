//! Command-line interface orchestration for arbor.
//!
//! One-shot subcommands load an adjacency matrix, compute a minimum spanning
//! forest, print derived views or traversals, and export DOT/PNG files.
//! `interactive` hands control to [`crate::session::Session`].

mod commands;

pub use commands::{
    Cli, CliError, Command, DEFAULT_MATRIX_PATH, DEFAULT_RENDERER, ExportArgs, InteractiveArgs,
    MATRIX_PATH_ENV, MstArgs, Order, RENDERER_ENV, RendererArgs, ShowArgs, TraverseArgs, View,
    load_graph, run_cli, show, traverse,
};
