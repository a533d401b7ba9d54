use thiserror::Error;

/// Errors returned by the engine.
///
/// A negative-weight cycle is not an error; see
/// [`BellmanFordOutcome`](crate::BellmanFordOutcome).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node count must be positive, got {0}")]
    InvalidNodeCount(usize),

    #[error("node {0} not found in graph")]
    NodeNotFound(String),

    #[error("source {index} outside graph of {node_count} nodes")]
    SourceOutOfRange { index: usize, node_count: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
