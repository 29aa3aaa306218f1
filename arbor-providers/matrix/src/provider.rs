//! Adjacency-matrix provider implementation.
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use arbor_core::{Graph, Weight};
use tracing::{debug, instrument};

use crate::errors::MatrixProviderError;
use crate::parse::{parse_header, parse_row};

/// A square adjacency matrix with one label per row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    labels: Vec<String>,
    rows: Vec<Vec<Weight>>,
}

impl AdjacencyMatrix {
    /// Parses a matrix from buffered text.
    ///
    /// The first line lists the labels. Exactly one row per label must
    /// follow; anything after the last row is ignored.
    ///
    /// # Errors
    /// Returns [`MatrixProviderError`] when the input is empty, the header
    /// is blank, a row is malformed, rows are missing, or reading fails.
    ///
    /// # Examples
    /// ```
    /// use arbor_providers_matrix::AdjacencyMatrix;
    ///
    /// let text = "A B\n0 4\n4 0\n";
    /// let matrix = AdjacencyMatrix::try_from_reader(text.as_bytes())?;
    /// assert_eq!(matrix.labels(), ["A", "B"]);
    /// assert_eq!(matrix.to_graph()?.edge_count(), 1);
    /// # Ok::<(), arbor_providers_matrix::MatrixProviderError>(())
    /// ```
    #[instrument(name = "matrix.parse", err, skip(reader))]
    pub fn try_from_reader<R: BufRead>(reader: R) -> Result<Self, MatrixProviderError> {
        let mut lines = reader.lines();
        let header = lines.next().ok_or(MatrixProviderError::EmptyInput)??;
        let labels = parse_header(&header)?;
        let expected = labels.len();

        let mut rows = Vec::with_capacity(expected);
        for line in lines {
            if rows.len() == expected {
                break;
            }
            rows.push(parse_row(&line?, rows.len(), expected)?);
        }
        if rows.len() < expected {
            return Err(MatrixProviderError::MissingRows {
                expected,
                actual: rows.len(),
            });
        }

        debug!(vertices = expected, "parsed adjacency matrix");
        Ok(Self { labels, rows })
    }

    /// Opens and parses the matrix stored at `path`.
    ///
    /// # Errors
    /// As [`Self::try_from_reader`], plus [`MatrixProviderError::Io`] when
    /// the file cannot be opened.
    pub fn try_from_path(path: impl AsRef<Path>) -> Result<Self, MatrixProviderError> {
        let file = File::open(path)?;
        Self::try_from_reader(BufReader::new(file))
    }

    /// Returns the vertex labels in header order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the weight rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Weight>] {
        &self.rows
    }

    /// Returns the number of labels, which is also the row count.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.labels.len()
    }

    /// Builds a graph from the upper triangle of the matrix.
    ///
    /// # Errors
    /// Returns [`MatrixProviderError::Graph`] when the header repeats a
    /// label.
    pub fn to_graph(&self) -> Result<Graph, MatrixProviderError> {
        Ok(Graph::from_adjacency_matrix(&self.labels, &self.rows)?)
    }
}
