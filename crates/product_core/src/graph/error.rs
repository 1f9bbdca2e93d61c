//! Graph error taxonomy.

use thiserror::Error;

/// Errors raised by graph operations and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A connection references a missing brick or port, or a
    /// type-incompatible port pair. Recoverable: the caller may drop
    /// the connection and continue.
    #[error("invalid connection: {0}")]
    InvalidConnection(String),

    /// A stored connection's endpoint no longer resolves. Deletes
    /// cascade, so this is only reachable through externally
    /// constructed or hand-edited graph data.
    #[error("dangling reference: {0}")]
    DanglingReference(String),
}
