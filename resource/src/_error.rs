use quadmesh_term::TermError;
use thiserror::Error;

/// Type alias for `Result` with default error `GraphError`.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

/// An error raised when materializing a [`Graph`](crate::graph::Graph).
///
/// It is always raised before any output is produced.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GraphError {
    /// The options of the materialization are not valid:
    /// unknown option name, ill-typed option value,
    /// or prefix map with an invalid prefix or a non-IRI namespace.
    #[error("Invalid graph options: {0}")]
    InvalidOptions(String),
}

impl From<TermError> for GraphError {
    fn from(value: TermError) -> Self {
        GraphError::InvalidOptions(value.to_string())
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(value: serde_json::Error) -> Self {
        GraphError::InvalidOptions(value.to_string())
    }
}
