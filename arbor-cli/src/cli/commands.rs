//! Command implementations and argument parsing for the arbor CLI.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use arbor_core::{Graph, GraphError, IsolatedVertices, Kruskal, breadth_first, depth_first};
use arbor_providers_matrix::{AdjacencyMatrix, MatrixProviderError};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use crate::dot::{ExportError, export_dot, render_png};
use crate::render::{
    render_adjacency_list, render_adjacency_matrix, render_graph, render_incidence_matrix,
    render_traversal,
};
use crate::session::{Session, SessionConfig};

/// Environment variable overriding `--matrix`.
pub const MATRIX_PATH_ENV: &str = "ARBOR_MATRIX_PATH";
/// Matrix file read when neither the flag nor the environment names one.
pub const DEFAULT_MATRIX_PATH: &str = "adjacency_matrix.txt";
/// Environment variable overriding `--renderer`.
pub const RENDERER_ENV: &str = "ARBOR_RENDERER";
/// Renderer program used when none is configured.
pub const DEFAULT_RENDERER: &str = "dot";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Compute minimum spanning forests of weighted graphs."
)]
pub struct Cli {
    /// Adjacency matrix file: a header of labels, then one row per label.
    #[arg(
        long,
        global = true,
        env = MATRIX_PATH_ENV,
        default_value = DEFAULT_MATRIX_PATH,
    )]
    pub matrix: PathBuf,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute and print the minimum spanning forest.
    Mst(MstArgs),
    /// Print the graph or one of its derived views.
    Show(ShowArgs),
    /// Print a depth-first or breadth-first traversal.
    Traverse(TraverseArgs),
    /// Write the graph or its spanning forest as DOT, optionally as PNG.
    Export(ExportArgs),
    /// Start a line-oriented session on standard input.
    Interactive(InteractiveArgs),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone, Default)]
pub struct MstArgs {
    /// Omit vertices that no accepted edge touches.
    #[arg(long)]
    pub drop_isolated: bool,

    /// Also write the forest as DOT to this path.
    #[arg(long)]
    pub dot: Option<PathBuf>,
}

/// Options accepted by the `show` command.
#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// View to print.
    #[arg(value_enum)]
    pub view: View,
}

/// Printable views of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Vertex list, edge list, and total weight.
    Graph,
    /// Symmetric weight matrix.
    AdjacencyMatrix,
    /// Neighbour list per vertex.
    AdjacencyList,
    /// Vertex-by-edge incidence matrix.
    IncidenceMatrix,
}

/// Options accepted by the `traverse` command.
#[derive(Debug, Args, Clone)]
pub struct TraverseArgs {
    /// Traversal order.
    #[arg(long, value_enum)]
    pub order: Order,

    /// Start label (defaults to the first vertex).
    #[arg(long)]
    pub start: Option<String>,
}

/// Traversal orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// Depth-first.
    Dfs,
    /// Breadth-first.
    Bfs,
}

/// Options accepted by the `export` command.
#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    /// DOT file to write.
    #[arg(long)]
    pub output: PathBuf,

    /// Export the minimum spanning forest instead of the graph.
    #[arg(long)]
    pub mst: bool,

    /// Also render the DOT file to this PNG.
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Renderer configuration.
    #[command(flatten)]
    pub renderer: RendererArgs,
}

/// Options accepted by the `interactive` command.
#[derive(Debug, Args, Clone)]
pub struct InteractiveArgs {
    /// Directory receiving DOT and PNG files from `show-graph`/`show-mst`.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Renderer configuration.
    #[command(flatten)]
    pub renderer: RendererArgs,
}

/// External renderer selection.
#[derive(Debug, Args, Clone)]
pub struct RendererArgs {
    /// Program invoked as `<renderer> -Tpng <dot> -o <png>`.
    #[arg(long = "renderer", env = RENDERER_ENV, default_value = DEFAULT_RENDERER)]
    pub program: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The adjacency matrix could not be loaded.
    #[error("failed to load `{path}`: {source}")]
    Matrix {
        /// Matrix path.
        path: PathBuf,
        /// Underlying provider failure.
        #[source]
        source: MatrixProviderError,
    },
    /// A core graph operation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// DOT export or PNG rendering failed.
    #[error(transparent)]
    Export(#[from] ExportError),
    /// Reading input or writing output failed.
    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] io::Error),
}

impl CliError {
    /// Returns the stable graph error code behind this failure, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Graph(err)
            | Self::Matrix {
                source: MatrixProviderError::Graph(err),
                ..
            } => Some(err.code().as_str()),
            _ => None,
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// `input` is only read by the `interactive` command; every command writes
/// its report to `output`.
///
/// # Errors
/// Returns [`CliError`] when loading, computing, exporting, or writing
/// fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, MstArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A B C\n0 1 3\n1 0 2\n3 2 0\n")?;
/// let cli = Cli {
///     matrix: file.path().to_path_buf(),
///     command: Command::Mst(MstArgs::default()),
/// };
/// let mut out = Vec::new();
/// run_cli(cli, std::io::empty(), &mut out)?;
/// assert!(String::from_utf8(out)?.contains("total weight: 3"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip_all,
    fields(command = field::Empty, matrix = %cli.matrix.display()),
)]
pub fn run_cli<R: BufRead, W: Write>(cli: Cli, input: R, mut output: W) -> Result<(), CliError> {
    let span = Span::current();
    let Cli { matrix, command } = cli;
    match command {
        Command::Mst(args) => {
            span.record("command", "mst");
            run_mst(&matrix, &args, &mut output)
        }
        Command::Show(args) => {
            span.record("command", "show");
            let graph = load_graph(&matrix)?;
            show(&graph, args.view, &mut output)
        }
        Command::Traverse(args) => {
            span.record("command", "traverse");
            let graph = load_graph(&matrix)?;
            traverse(&graph, args.order, args.start.as_deref(), &mut output)
        }
        Command::Export(args) => {
            span.record("command", "export");
            run_export(&matrix, &args)
        }
        Command::Interactive(args) => {
            span.record("command", "interactive");
            let config = SessionConfig {
                matrix_path: matrix,
                output_dir: args.output_dir,
                renderer: args.renderer.program,
            };
            Session::new(config).run(input, &mut output)
        }
    }?;
    output.flush()?;
    Ok(())
}

/// Loads the adjacency matrix at `path` into a graph.
///
/// # Errors
/// Returns [`CliError::Matrix`] when the file is missing or malformed.
#[instrument(name = "cli.load_graph", err, skip_all, fields(path = %path.display()))]
pub fn load_graph(path: &Path) -> Result<Graph, CliError> {
    let graph = AdjacencyMatrix::try_from_path(path)
        .and_then(|matrix| matrix.to_graph())
        .map_err(|source| CliError::Matrix {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Prints a traversal of `graph` starting at `start`, or at the first
/// vertex when `start` is `None`.
///
/// An unknown start label is reported to `output` and logged at `warn`;
/// it is not an error.
///
/// # Errors
/// Returns [`CliError::Terminal`] if writing fails.
pub fn traverse(
    graph: &Graph,
    order: Order,
    start: Option<&str>,
    mut output: impl Write,
) -> Result<(), CliError> {
    let Some(start) = start.or_else(|| graph.vertices().first().map(String::as_str)) else {
        writeln!(output, "graph is empty")?;
        return Ok(());
    };
    let walk = match order {
        Order::Dfs => depth_first(graph, start),
        Order::Bfs => breadth_first(graph, start),
    };
    match walk {
        Ok(labels) => render_traversal(&labels, output)?,
        Err(GraphError::VertexNotFound { label }) => {
            warn!(label = label.as_str(), "traversal start vertex not found");
            writeln!(output, "vertex `{label}` not found")?;
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Prints `view` of `graph`.
///
/// # Errors
/// Returns [`CliError::Graph`] when the total weight overflows and
/// [`CliError::Terminal`] if writing fails.
pub fn show(graph: &Graph, view: View, mut output: impl Write) -> Result<(), CliError> {
    match view {
        View::Graph => render_graph(graph, graph.total_weight()?, &mut output)?,
        View::AdjacencyMatrix => render_adjacency_matrix(graph, &mut output)?,
        View::AdjacencyList => render_adjacency_list(graph, &mut output)?,
        View::IncidenceMatrix => render_incidence_matrix(graph, &mut output)?,
    }
    Ok(())
}

fn kruskal_for(drop_isolated: bool) -> Kruskal {
    let policy = if drop_isolated {
        IsolatedVertices::Drop
    } else {
        IsolatedVertices::Preserve
    };
    Kruskal::new().with_isolated_vertices(policy)
}

#[instrument(name = "cli.mst", err, skip_all, fields(drop_isolated = args.drop_isolated))]
pub(super) fn run_mst(matrix: &Path, args: &MstArgs, mut output: impl Write) -> Result<(), CliError> {
    let graph = load_graph(matrix)?;
    let forest = kruskal_for(args.drop_isolated).find_mst(&graph)?;
    render_graph(forest.graph(), forest.total_weight(), &mut output)?;
    if !forest.is_tree() && !graph.is_empty() {
        writeln!(output, "components: {}", forest.component_count())?;
    }
    if let Some(path) = &args.dot {
        export_dot(forest.graph(), path)?;
    }
    info!(
        total_weight = forest.total_weight(),
        components = forest.component_count(),
        "minimum spanning forest computed"
    );
    Ok(())
}

#[instrument(
    name = "cli.export",
    err,
    skip_all,
    fields(output = %args.output.display(), mst = args.mst),
)]
pub(super) fn run_export(matrix: &Path, args: &ExportArgs) -> Result<(), CliError> {
    let graph = load_graph(matrix)?;
    let target = if args.mst {
        kruskal_for(false).find_mst(&graph)?.into_graph()
    } else {
        graph
    };
    export_dot(&target, &args.output)?;
    if let Some(png) = &args.png {
        render_png(&args.renderer.program, &args.output, png)?;
    }
    Ok(())
}
