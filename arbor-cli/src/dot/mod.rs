//! Graphviz DOT export and PNG rendering through an external program.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

use arbor_core::Graph;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Errors raised while exporting or rendering a graph.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the DOT file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The renderer could not be started.
    #[error("failed to launch renderer `{program}`: {source}")]
    Spawn {
        /// Renderer program.
        program: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The renderer ran but reported failure.
    #[error("renderer `{program}` exited with {status}")]
    RendererFailed {
        /// Renderer program.
        program: PathBuf,
        /// Exit status reported by the renderer.
        status: ExitStatus,
    },
}

/// Writes `graph` as an undirected DOT document.
///
/// Vertices that no edge touches are written as node statements before the
/// edges. Labels that are not plain identifiers are double-quoted with `"`
/// and `\` escaped.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
///
/// # Examples
/// ```
/// use arbor_cli::dot::write_dot;
/// use arbor_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 2);
/// let mut out = Vec::new();
/// write_dot(&graph, &mut out)?;
/// assert_eq!(
///     String::from_utf8(out).expect("utf-8"),
///     "graph G {\n  A -- B [label=\"2\"];\n}\n"
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_dot(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graph G {{")?;
    let mut touched = vec![false; graph.vertex_count()];
    for edge in graph.edges() {
        for vertex in [edge.vertex1(), edge.vertex2()] {
            if let Some(flag) = touched.get_mut(vertex) {
                *flag = true;
            }
        }
    }
    for (label, _) in graph
        .vertices()
        .iter()
        .zip(&touched)
        .filter(|&(_, &used)| !used)
    {
        writeln!(writer, "  {};", dot_id(label))?;
    }
    for edge in graph.edges() {
        let left = dot_id(graph.vertex_name(edge.vertex1()).unwrap_or("?"));
        let right = dot_id(graph.vertex_name(edge.vertex2()).unwrap_or("?"));
        writeln!(writer, "  {left} -- {right} [label=\"{}\"];", edge.weight())?;
    }
    writeln!(writer, "}}")
}

/// Writes `graph` as DOT to the file at `path`, replacing it.
///
/// # Errors
/// Returns [`ExportError::Io`] if the file cannot be created or written.
#[instrument(
    name = "export.dot",
    err,
    skip_all,
    fields(path = %path.display()),
)]
pub fn export_dot(graph: &Graph, path: &Path) -> Result<(), ExportError> {
    let io_error = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write_dot(graph, &mut writer).map_err(io_error)?;
    writer.flush().map_err(io_error)?;
    info!(edges = graph.edge_count(), "wrote DOT file");
    Ok(())
}

/// Renders the DOT file at `dot` to a PNG at `png`.
///
/// Runs `<program> -Tpng <dot> -o <png>` and waits for it.
///
/// # Errors
/// Returns [`ExportError::Spawn`] when the program cannot be started and
/// [`ExportError::RendererFailed`] when it exits unsuccessfully.
#[instrument(
    name = "export.png",
    err,
    skip_all,
    fields(
        program = %program.display(),
        dot = %dot.display(),
        status = field::Empty,
    ),
)]
pub fn render_png(program: &Path, dot: &Path, png: &Path) -> Result<(), ExportError> {
    let status = Command::new(program)
        .arg("-Tpng")
        .arg(dot)
        .arg("-o")
        .arg(png)
        .status()
        .map_err(|source| ExportError::Spawn {
            program: program.to_path_buf(),
            source,
        })?;
    Span::current().record("status", field::display(status));
    if !status.success() {
        return Err(ExportError::RendererFailed {
            program: program.to_path_buf(),
            status,
        });
    }
    info!(png = %png.display(), "rendered PNG");
    Ok(())
}

fn dot_id(label: &str) -> String {
    let mut chars = label.chars();
    let plain = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain && !is_keyword(label) {
        return label.to_owned();
    }
    let mut quoted = String::with_capacity(label.len() + 2);
    quoted.push('"');
    for c in label.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

fn is_keyword(label: &str) -> bool {
    ["graph", "digraph", "node", "edge", "subgraph", "strict"]
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(label))
}
