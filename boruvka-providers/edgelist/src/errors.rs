use std::path::PathBuf;

use boruvka_core::GraphError;
use thiserror::Error;

/// Errors raised while loading an edge list.
#[derive(Debug, Error)]
pub enum EdgeListError {
    #[error("edge list contains no edges")]
    EmptyInput,
    #[error("line {line}: expected 3 fields but found {found}")]
    TooManyFields { line: usize, found: usize },
    #[error("line {line}: vertex label is empty")]
    EmptyLabel { line: usize },
    #[error("line {line}: weight `{raw}` is not a number")]
    InvalidWeight { line: usize, raw: String },
    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
    #[error("failed to open `{}`: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while configuring a [`crate::GraphGenerator`].
#[derive(Debug, Error, PartialEq)]
pub enum GeneratorError {
    #[error("a generated graph needs at least 2 vertices but {got} were requested")]
    TooFewVertices { got: usize },
    #[error("connection chance must lie in [0, 1] but was {got}")]
    InvalidConnectionChance { got: f64 },
}
