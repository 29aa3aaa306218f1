//! Line-oriented interactive session.
//!
//! Commands are looked up in [`COMMANDS`], a table mapping each key to its
//! usage line, description, and handler. A failing handler is reported and
//! logged; the session keeps reading until `exit` or end of input.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use arbor_core::{Graph, SpanningForest, find_mst};
use tracing::{error, field, instrument, warn};

use crate::cli::{CliError, Order, View, load_graph, show, traverse};
use crate::dot::{export_dot, render_png};
use crate::render::render_graph;

const PROMPT: &str = "arbor> ";

/// Paths used by an interactive session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Adjacency matrix loaded by `load`.
    pub matrix_path: PathBuf,
    /// Directory receiving DOT and PNG files.
    pub output_dir: PathBuf,
    /// Renderer program for PNG output.
    pub renderer: PathBuf,
}

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop reading.
    Exit,
}

type Handler = fn(&mut Session, Option<&str>, &mut dyn Write) -> Result<Flow, CliError>;

/// One entry of the dispatch table.
pub struct CommandSpec {
    /// Word typed to run the command.
    pub key: &'static str,
    /// Usage line shown by `help`.
    pub usage: &'static str,
    /// One-line description shown by `help`.
    pub description: &'static str,
    handler: Handler,
}

/// Commands understood by [`Session`], in `help` order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        key: "load",
        usage: "load",
        description: "load the graph from the adjacency matrix file",
        handler: Session::load,
    },
    CommandSpec {
        key: "matrix",
        usage: "matrix",
        description: "print the adjacency matrix",
        handler: Session::matrix,
    },
    CommandSpec {
        key: "list",
        usage: "list",
        description: "print the adjacency list",
        handler: Session::list,
    },
    CommandSpec {
        key: "incidence",
        usage: "incidence",
        description: "print the incidence matrix",
        handler: Session::incidence,
    },
    CommandSpec {
        key: "dfs",
        usage: "dfs [LABEL]",
        description: "depth-first traversal from LABEL or the first vertex",
        handler: Session::dfs,
    },
    CommandSpec {
        key: "bfs",
        usage: "bfs [LABEL]",
        description: "breadth-first traversal from LABEL or the first vertex",
        handler: Session::bfs,
    },
    CommandSpec {
        key: "mst",
        usage: "mst",
        description: "compute the minimum spanning forest",
        handler: Session::mst,
    },
    CommandSpec {
        key: "path",
        usage: "path",
        description: "print the adjacency matrix path",
        handler: Session::path,
    },
    CommandSpec {
        key: "path-set",
        usage: "path-set <PATH>",
        description: "change the adjacency matrix path",
        handler: Session::path_set,
    },
    CommandSpec {
        key: "show-graph",
        usage: "show-graph",
        description: "print the graph and render it to graph.png",
        handler: Session::show_graph,
    },
    CommandSpec {
        key: "show-mst",
        usage: "show-mst",
        description: "print the spanning forest and render it to mst.png",
        handler: Session::show_mst,
    },
    CommandSpec {
        key: "help",
        usage: "help",
        description: "list commands",
        handler: Session::help,
    },
    CommandSpec {
        key: "exit",
        usage: "exit",
        description: "leave the session",
        handler: Session::exit,
    },
];

/// Finds the table entry for `key`.
#[must_use]
pub fn lookup(key: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.key == key)
}

/// Mutable state of an interactive session.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    graph: Graph,
    forest: Option<SpanningForest>,
}

impl Session {
    /// Creates a session with an empty graph.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            graph: Graph::new(),
            forest: None,
        }
    }

    /// Returns the currently loaded graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the last computed spanning forest.
    #[must_use]
    pub fn forest(&self) -> Option<&SpanningForest> {
        self.forest.as_ref()
    }

    /// Returns the configured paths.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Reads commands from `input` until `exit` or end of input.
    ///
    /// # Errors
    /// Returns [`CliError::Terminal`] when reading input or writing output
    /// fails. Handler failures are reported inline and do not end the
    /// session.
    #[instrument(name = "session.run", err, skip_all)]
    pub fn run<R: BufRead>(&mut self, input: R, output: &mut dyn Write) -> Result<(), CliError> {
        self.help(None, output)?;
        let mut lines = input.lines();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            let Some(line) = lines.next().transpose()? else {
                writeln!(output)?;
                return Ok(());
            };
            if self.execute(&line, output)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Runs one command line.
    ///
    /// # Errors
    /// Returns [`CliError::Terminal`] when writing output fails.
    pub fn execute(&mut self, line: &str, output: &mut dyn Write) -> Result<Flow, CliError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        let (key, argument) = match line.split_once(char::is_whitespace) {
            Some((key, rest)) => (key, Some(rest.trim()).filter(|rest| !rest.is_empty())),
            None => (line, None),
        };
        let Some(spec) = lookup(key) else {
            writeln!(output, "unknown command `{key}`; type `help` for the list")?;
            return Ok(Flow::Continue);
        };
        match (spec.handler)(self, argument, output) {
            Ok(flow) => Ok(flow),
            Err(CliError::Terminal(err)) => Err(CliError::Terminal(err)),
            Err(err) => {
                error!(
                    command = spec.key,
                    error = %err,
                    code = err.code().map(field::display),
                    "session command failed"
                );
                writeln!(output, "error: {err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn load(&mut self, _: Option<&str>, output: &mut dyn Write) -> Result<Flow, CliError> {
        self.graph = load_graph(&self.config.matrix_path)?;
        self.forest = None;
        writeln!(
            output,
            "loaded {} vertices and {} edges",
            self.graph.vertex_count(),
            self.graph.edge_count()
        )?;
        Ok(Flow::Continue)
    }

    fn matrix(&mut self, _: Option<&str>, output: &mut dyn Write) -> Result<Flow, CliError> {
        show(&self.graph, View::AdjacencyMatrix, output)?;
        Ok(Flow::Continue)
    }

    fn list(&mut self, _: Option<&str>, output: &mut dyn Write) -> Result<Flow, CliError> {
        show(&self.graph, View::AdjacencyList, output)?;
        Ok(Flow::Continue)
    }

    fn incidence(&mut self, _: Option<&str>, output: &mut dyn Write) -> Result<Flow, CliError> {
        show(&self.graph, View::IncidenceMatrix, output)?;
        Ok(Flow::Continue)
    }

    fn dfs(&mut self, start: Option<&str>, output: &mut dyn Write) -> Result<Flow, CliError> {
        traverse(&self.graph, Order::Dfs, start, output)?;
        Ok(Flow::Continue)
    }

    fn bfs(&mut self, start: Option<&str>, output: &mut dyn Write) -> Result<Flow, CliError> {
        traverse(&self.graph, Order::Bfs, start, output)?;
        Ok(Flow::Continue)
    }

    fn mst(&mut self, _: Option<&str>, output: &mut dyn Write) -> Result<Flow, CliError> {
        let forest = find_mst(&self.graph)?;
        writeln!(
            output,
            "minimum spanning forest: {} edges, total weight {}",
            forest.graph().edge_count(),
            forest.total_weight()
        )?;
        self.forest = Some(forest);
        Ok(Flow::Continue)
    }

    fn path(&mut self, _: Option<&str>, output: &mut dyn Write) -> Result<Flow, CliError> {
        writeln!(
            output,
            "matrix path: {}",
            self.config.matrix_path.display()
        )?;
        Ok(Flow::Continue)
    }

    fn path_set(&mut self, path: Option<&str>, output: &mut dyn Write) -> Result<Flow, CliError> {
        match path {
            Some(path) => {
                self.config.matrix_path = PathBuf::from(path);
                writeln!(output, "matrix path set to {path}")?;
            }
            None => writeln!(output, "usage: path-set <PATH>")?,
        }
        Ok(Flow::Continue)
    }

    fn show_graph(&mut self, _: Option<&str>, output: &mut dyn Write) -> Result<Flow, CliError> {
        if self.graph.is_empty() {
            writeln!(output, "graph is empty")?;
            return Ok(Flow::Continue);
        }
        render_graph(&self.graph, self.graph.total_weight()?, &mut *output)?;
        self.render_image(&self.graph, "graph", output)?;
        Ok(Flow::Continue)
    }

    fn show_mst(&mut self, _: Option<&str>, output: &mut dyn Write) -> Result<Flow, CliError> {
        let Some(forest) = &self.forest else {
            writeln!(output, "minimum spanning forest has not been computed")?;
            return Ok(Flow::Continue);
        };
        render_graph(forest.graph(), forest.total_weight(), &mut *output)?;
        self.render_image(forest.graph(), "mst", output)?;
        Ok(Flow::Continue)
    }

    fn help(&mut self, _: Option<&str>, output: &mut dyn Write) -> Result<Flow, CliError> {
        for spec in COMMANDS {
            writeln!(output, "  {:<16} {}", spec.usage, spec.description)?;
        }
        Ok(Flow::Continue)
    }

    fn exit(&mut self, _: Option<&str>, output: &mut dyn Write) -> Result<Flow, CliError> {
        writeln!(output, "session closed")?;
        Ok(Flow::Exit)
    }

    fn render_image(
        &self,
        graph: &Graph,
        stem: &str,
        output: &mut dyn Write,
    ) -> Result<(), CliError> {
        let dot = self.config.output_dir.join(format!("{stem}.dot"));
        let png = self.config.output_dir.join(format!("{stem}.png"));
        export_dot(graph, &dot)?;
        if let Err(err) = render_png(&self.config.renderer, &dot, &png) {
            warn!(error = %err, dot = %dot.display(), "PNG rendering failed; DOT file kept");
            return Err(err.into());
        }
        writeln!(output, "rendered {}", png.display())?;
        Ok(())
    }
}
