use crate::graph::Cost;

/// Errors raised while loading or querying a graph.
///
/// Mutations (`insert_edge`, `remove_edge`) never produce these; they report
/// rejection through their boolean return instead.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Reading the underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before a required item was read.
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A token that should have been an integer was not.
    #[error("Invalid number '{token}' on line {line}")]
    InvalidNumber { line: usize, token: String },

    /// The declared vertex count is zero or exceeds the configured capacity.
    #[error("Invalid vertex count {count}: must be between 1 and {max}")]
    InvalidVertexCount { count: i64, max: usize },

    /// A vertex index outside `[1, size]`.
    #[error("Vertex {vertex} out of range for graph of size {size}")]
    VertexOutOfRange { vertex: i64, size: usize },

    /// A negative edge cost in a loaded description.
    #[error("Negative cost {cost} on edge {from} -> {to}")]
    NegativeCost { from: usize, to: usize, cost: Cost },

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
