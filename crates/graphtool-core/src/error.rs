//! Error types for graphtool-core.

use thiserror::Error;

use crate::graph::{NodeId, Weight};

/// Result type for graphtool-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in graphtool-core.
///
/// Graph mutations never fail: a reference to a missing node is ignored.
/// These errors come from algorithms and snapshot restoration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An algorithm was asked to start or end at a node the graph does not have.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// Dijkstra met an edge with a negative cost.
    #[error("negative weight {weight} on edge {a} -> {b}")]
    NegativeWeight { a: NodeId, b: NodeId, weight: Weight },

    /// An algorithm request lacks a node the algorithm needs.
    #[error("{algorithm} requires a {parameter} node")]
    MissingParameter {
        algorithm: &'static str,
        parameter: &'static str,
    },

    /// A snapshot does not describe a consistent graph.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}
