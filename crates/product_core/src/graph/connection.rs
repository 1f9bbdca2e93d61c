//! Directed, port-typed edges between bricks.

use serde::{Deserialize, Serialize};

/// A directed edge from one brick's output port to another brick's
/// input port.
///
/// Identity is the `id` string, assigned by the owning graph. Both
/// endpoints must resolve to live bricks; delete operations cascade so
/// that a stored connection never dangles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Graph-unique identifier.
    pub id: String,
    /// Source brick id.
    pub source_brick: String,
    /// Output port id on the source brick.
    pub source_port: String,
    /// Target brick id.
    pub target_brick: String,
    /// Input port id on the target brick.
    pub target_port: String,
}

impl Connection {
    /// Returns whether this connection touches the given brick as
    /// source or target.
    #[inline]
    pub fn touches(&self, brick_id: &str) -> bool {
        self.source_brick == brick_id || self.target_brick == brick_id
    }
}

/// Endpoint description for a connection to be created.
///
/// The graph assigns the id and validates the endpoints on insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRequest {
    /// Source brick id.
    pub source_brick: String,
    /// Output port id on the source brick.
    pub source_port: String,
    /// Target brick id.
    pub target_brick: String,
    /// Input port id on the target brick.
    pub target_port: String,
}

impl ConnectionRequest {
    /// Creates a connection request.
    pub fn new(
        source_brick: impl Into<String>,
        source_port: impl Into<String>,
        target_brick: impl Into<String>,
        target_port: impl Into<String>,
    ) -> Self {
        Self {
            source_brick: source_brick.into(),
            source_port: source_port.into(),
            target_brick: target_brick.into(),
            target_port: target_port.into(),
        }
    }
}
