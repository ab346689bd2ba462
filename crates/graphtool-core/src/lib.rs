//! Core engine for graphtool.
//!
//! This crate provides:
//! - A graph model that keeps directed and undirected views in lock-step, so
//!   switching modes never loses edges
//! - Change notifications for views that mirror the graph
//! - Deterministic traversal algorithms producing replayable animation scripts
//!
//! # Example
//!
//! ```
//! use graphtool_core::{Graph, algorithms};
//!
//! let mut graph = Graph::new();
//! let a = graph.create_node();
//! let b = graph.create_node();
//! let c = graph.create_node();
//! graph.add_edge(a, b);
//! graph.add_edge(b, c);
//!
//! let order = algorithms::bfs(&graph, a).unwrap();
//! assert_eq!(order.node_order, vec![a, b, c]);
//! ```

pub mod algorithms;
pub mod config;
pub mod error;
pub mod graph;

pub use algorithms::{
    Algorithm, AlgorithmOutput, AlgorithmRequest, ClassIndex, NodeClassification, TraversalOrder,
};
pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{
    AdjacencyList, Edge, EdgeKey, Graph, GraphListener, GraphSnapshot, Node, NodeId,
    RemovedEdges, Representation, Weight,
};
