//! Graph model.
//!
//! This module provides:
//! - Node and edge value types
//! - The [`Graph`] store with parallel directed and undirected representations
//! - Named change listeners
//! - Snapshots for rebuilding a graph through the mutation API

mod events;
mod snapshot;
mod store;
mod types;

pub use events::GraphListener;
pub use snapshot::GraphSnapshot;
pub use store::Graph;
pub use types::{AdjacencyList, Edge, EdgeKey, Node, NodeId, RemovedEdges, Representation, Weight};
