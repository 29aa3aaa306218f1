//! Error types for the arbor core library.
//!
//! Defines the graph error taxonomy exposed by the public API together with
//! stable machine-readable codes and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::Graph`], [`crate::DisjointSet`], the
/// Kruskal engine, or the traversals.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex index was outside `0..len`.
    #[error("index {index} is out of range for {len} elements")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of addressable elements.
        len: usize,
    },
    /// An adjacency matrix was not square or did not match the label count.
    #[error("{}", describe_dimension_mismatch(*expected, *row, *actual))]
    DimensionMismatch {
        /// Side length implied by the vertex labels.
        expected: usize,
        /// Row with the wrong length, or `None` when the row count is wrong.
        row: Option<usize>,
        /// Observed row count or row length.
        actual: usize,
    },
    /// A traversal started from a label the graph does not know.
    #[error("vertex `{label}` not found")]
    VertexNotFound {
        /// The unknown label.
        label: String,
    },
    /// An index-based edge insertion referenced a missing vertex.
    #[error("cannot add edge ({first}, {second}): graph has {vertex_count} vertices")]
    InvalidIndices {
        /// First endpoint supplied by the caller.
        first: usize,
        /// Second endpoint supplied by the caller.
        second: usize,
        /// Vertex count at the time of the call.
        vertex_count: usize,
    },
    /// The same label appeared twice in a bulk vertex list.
    #[error("vertex `{label}` is declared more than once")]
    DuplicateVertex {
        /// The repeated label.
        label: String,
    },
    /// Summing edge weights overflowed `i64`.
    #[error("total edge weight overflows a 64-bit integer")]
    WeightOverflow,
}

fn describe_dimension_mismatch(expected: usize, row: Option<usize>, actual: usize) -> String {
    match row {
        Some(row) => format!("matrix row {row} has {actual} entries but {expected} are required"),
        None => format!("matrix has {actual} rows but {expected} labels were given"),
    }
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex index was outside the valid range.
        OutOfRange => OutOfRange { .. } => "GRAPH_OUT_OF_RANGE",
        /// An adjacency matrix had the wrong shape.
        DimensionMismatch => DimensionMismatch { .. } => "GRAPH_DIMENSION_MISMATCH",
        /// A traversal start label was not registered.
        VertexNotFound => VertexNotFound { .. } => "GRAPH_VERTEX_NOT_FOUND",
        /// An index-based edge insertion referenced a missing vertex.
        InvalidIndices => InvalidIndices { .. } => "GRAPH_INVALID_INDICES",
        /// A label was declared more than once.
        DuplicateVertex => DuplicateVertex { .. } => "GRAPH_DUPLICATE_VERTEX",
        /// Summing edge weights overflowed.
        WeightOverflow => WeightOverflow => "GRAPH_WEIGHT_OVERFLOW",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
