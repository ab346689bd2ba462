//! Graph algorithms producing replayable animation scripts.
//!
//! Every algorithm borrows the [`Graph`] read-only and returns a
//! [`TraversalOrder`]: the nodes and edges it visited, in visiting order. An
//! animator replays that order step by step. Algorithms that group nodes also
//! return a [`NodeClassification`].
//!
//! Results are deterministic. Adjacency sets iterate in ascending node id
//! order, and "all nodes" loops walk ids in ascending order, so the same graph
//! always yields the same script.
//!
//! # Algorithms
//!
//! - [`dfs`] / [`bfs`] - traversals from a start node
//! - [`dijkstra`] - shortest path between two nodes
//! - [`coloring`] - greedy colouring
//! - [`find_islands`] - connected components
//! - [`kruskal_mst`] - minimum spanning forest
//! - [`nodes_degrees`] - grouping by degree
//! - [`run`] - dispatch by [`Algorithm`]

mod coloring;
mod components;
mod degrees;
mod runner;
mod shortest_path;
mod spanning_tree;
mod traversal;

use std::collections::BTreeMap;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{EdgeKey, Graph, NodeId};

pub use coloring::coloring;
pub use components::find_islands;
pub use degrees::nodes_degrees;
pub use runner::{Algorithm, AlgorithmOutput, AlgorithmRequest, run};
pub use shortest_path::dijkstra;
pub use spanning_tree::kruskal_mst;
pub use traversal::{bfs, dfs};

/// Index of a colour, component or degree class.
pub type ClassIndex = usize;

/// Class assigned to each node; `None` means no class was assigned.
pub type NodeClassification = BTreeMap<NodeId, Option<ClassIndex>>;

/// The order in which an algorithm visited nodes and traversed edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalOrder {
    pub edge_order: Vec<EdgeKey>,
    pub node_order: Vec<NodeId>,
}

impl TraversalOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.edge_order.is_empty() && self.node_order.is_empty()
    }
}

impl AddAssign for TraversalOrder {
    fn add_assign(&mut self, rhs: Self) {
        self.edge_order.extend(rhs.edge_order);
        self.node_order.extend(rhs.node_order);
    }
}

/// Fail with [`Error::NodeNotFound`] unless `id` is in the graph.
fn ensure_node(graph: &Graph, id: NodeId) -> Result<()> {
    if graph.does_node_exist(id) {
        Ok(())
    } else {
        Err(Error::NodeNotFound(id))
    }
}
