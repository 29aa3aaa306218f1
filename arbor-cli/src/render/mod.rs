//! Plain-text renderers for graphs, derived matrices, and traversals.
//!
//! Each renderer writes to any [`Write`] so the CLI can target `stdout`
//! and tests can target a `Vec<u8>`.

use std::io::{self, Write};

use arbor_core::{Graph, Weight};

const EMPTY_GRAPH: &str = "graph is empty";

/// Writes the numbered vertex list, the edge list, and the total weight.
///
/// Vertices are numbered from 1.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
///
/// # Examples
/// ```
/// use arbor_cli::render::render_graph;
/// use arbor_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 4);
/// let mut out = Vec::new();
/// render_graph(&graph, 4, &mut out)?;
/// let text = String::from_utf8(out).expect("utf-8");
/// assert!(text.contains("A -- B (weight: 4)"));
/// assert!(text.ends_with("total weight: 4\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_graph(graph: &Graph, total_weight: Weight, mut writer: impl Write) -> io::Result<()> {
    if graph.is_empty() {
        return writeln!(writer, "{EMPTY_GRAPH}");
    }
    writeln!(writer, "vertices:")?;
    for (position, label) in graph.vertices().iter().enumerate() {
        writeln!(writer, "  {}. {label}", position + 1)?;
    }
    writeln!(writer, "edges:")?;
    for edge in graph.edges() {
        let (left, right) = endpoint_labels(graph, edge.vertex1(), edge.vertex2());
        writeln!(writer, "  {left} -- {right} (weight: {})", edge.weight())?;
    }
    writeln!(writer, "total weight: {total_weight}")
}

/// Writes the symmetric adjacency matrix with labelled rows and columns.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_adjacency_matrix(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    if graph.is_empty() {
        return writeln!(writer, "{EMPTY_GRAPH}");
    }
    let matrix = graph.adjacency_matrix();
    let cells = matrix.iter().flatten().map(|weight| weight.to_string().len());
    let width = column_width(graph.vertices(), cells);

    write!(writer, "{:width$}", "")?;
    for label in graph.vertices() {
        write!(writer, " {label:>width$}")?;
    }
    writeln!(writer)?;
    for (label, row) in graph.vertices().iter().zip(&matrix) {
        write!(writer, "{label:<width$}")?;
        for weight in row {
            write!(writer, " {weight:>width$}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes one line per vertex listing `neighbour(weight)` entries.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
///
/// # Examples
/// ```
/// use arbor_cli::render::render_adjacency_list;
/// use arbor_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1);
/// graph.add_edge("A", "C", 3);
/// let mut out = Vec::new();
/// render_adjacency_list(&graph, &mut out)?;
/// assert_eq!(String::from_utf8(out).expect("utf-8"), "A: B(1) C(3)\nB: A(1)\nC: A(3)\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_adjacency_list(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    if graph.is_empty() {
        return writeln!(writer, "{EMPTY_GRAPH}");
    }
    for (label, neighbours) in graph.vertices().iter().zip(graph.adjacency_list()) {
        write!(writer, "{label}:")?;
        for neighbour in neighbours {
            let name = graph.vertex_name(neighbour.vertex).unwrap_or("?");
            write!(writer, " {name}({})", neighbour.weight)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes the vertex-by-edge incidence matrix.
///
/// Columns are headed `e1..eN` in edge order. A graph without edges prints
/// the empty-graph notice.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_incidence_matrix(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    if graph.is_empty() || graph.edge_count() == 0 {
        return writeln!(writer, "{EMPTY_GRAPH}");
    }
    let headers: Vec<String> = (1..=graph.edge_count()).map(|n| format!("e{n}")).collect();
    let width = column_width(graph.vertices(), headers.iter().map(String::len).chain([2]));

    write!(writer, "{:width$}", "")?;
    for header in &headers {
        write!(writer, " {header:>width$}")?;
    }
    writeln!(writer)?;
    for (label, row) in graph.vertices().iter().zip(graph.incidence_matrix()) {
        write!(writer, "{label:<width$}")?;
        for mark in row {
            write!(writer, " {mark:>width$}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes traversal output as space-separated labels on one line.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_traversal(order: &[&str], mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{}", order.join(" "))
}

fn endpoint_labels(graph: &Graph, left: usize, right: usize) -> (&str, &str) {
    (
        graph.vertex_name(left).unwrap_or("?"),
        graph.vertex_name(right).unwrap_or("?"),
    )
}

fn column_width(labels: &[String], cells: impl Iterator<Item = usize>) -> usize {
    labels.iter().map(String::len).chain(cells).max().unwrap_or(1)
}
