//! Running an algorithm picked at runtime.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::{
    NodeClassification, TraversalOrder, bfs, coloring, dfs, dijkstra, find_islands, kruskal_mst,
    nodes_degrees,
};
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// The algorithms a user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Dfs,
    Bfs,
    Dijkstra,
    Coloring,
    Islands,
    KruskalMst,
    NodesDegrees,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Dijkstra,
        Algorithm::Coloring,
        Algorithm::Islands,
        Algorithm::KruskalMst,
        Algorithm::NodesDegrees,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "Depth First Search",
            Algorithm::Bfs => "Breadth First Search",
            Algorithm::Dijkstra => "Dijkstra's Shortest Path",
            Algorithm::Coloring => "Graph Coloring",
            Algorithm::Islands => "Find Islands",
            Algorithm::KruskalMst => "Kruskal's MST",
            Algorithm::NodesDegrees => "Nodes Degrees",
        }
    }

    pub fn needs_start(&self) -> bool {
        matches!(self, Algorithm::Dfs | Algorithm::Bfs | Algorithm::Dijkstra)
    }

    pub fn needs_end(&self) -> bool {
        matches!(self, Algorithm::Dijkstra)
    }

    /// Whether the output carries a node classification.
    pub fn classifies(&self) -> bool {
        matches!(
            self,
            Algorithm::Coloring | Algorithm::Islands | Algorithm::NodesDegrees
        )
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An algorithm together with the nodes it should run between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmRequest {
    pub algorithm: Algorithm,
    pub start: Option<NodeId>,
    pub end: Option<NodeId>,
}

impl AlgorithmRequest {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            start: None,
            end: None,
        }
    }

    pub fn with_start(mut self, start: NodeId) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: NodeId) -> Self {
        self.end = Some(end);
        self
    }

    fn start(&self) -> Result<NodeId> {
        self.start.ok_or_else(|| Error::MissingParameter {
            algorithm: self.algorithm.name(),
            parameter: "start",
        })
    }

    fn end(&self) -> Result<NodeId> {
        self.end.ok_or_else(|| Error::MissingParameter {
            algorithm: self.algorithm.name(),
            parameter: "end",
        })
    }
}

/// What an algorithm produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmOutput {
    pub order: TraversalOrder,
    pub classification: Option<NodeClassification>,
}

impl AlgorithmOutput {
    /// Number of distinct classes in the classification, if any.
    pub fn class_count(&self) -> usize {
        self.classification
            .as_ref()
            .map(|classes| {
                classes
                    .values()
                    .flatten()
                    .collect::<FxHashSet<_>>()
                    .len()
            })
            .unwrap_or_default()
    }
}

impl From<TraversalOrder> for AlgorithmOutput {
    fn from(order: TraversalOrder) -> Self {
        Self {
            order,
            classification: None,
        }
    }
}

impl From<(TraversalOrder, NodeClassification)> for AlgorithmOutput {
    fn from((order, classification): (TraversalOrder, NodeClassification)) -> Self {
        Self {
            order,
            classification: Some(classification),
        }
    }
}

/// Run the requested algorithm on `graph`.
///
/// # Errors
///
/// [`Error::MissingParameter`] when the request lacks a start or end node the
/// algorithm needs, plus whatever the algorithm itself reports.
pub fn run(graph: &Graph, request: &AlgorithmRequest) -> Result<AlgorithmOutput> {
    tracing::debug!("Running {}", request.algorithm);

    let output: AlgorithmOutput = match request.algorithm {
        Algorithm::Dfs => dfs(graph, request.start()?)?.into(),
        Algorithm::Bfs => bfs(graph, request.start()?)?.into(),
        Algorithm::Dijkstra => dijkstra(graph, request.start()?, request.end()?)?.into(),
        Algorithm::Coloring => coloring(graph).into(),
        Algorithm::Islands => find_islands(graph).into(),
        Algorithm::KruskalMst => kruskal_mst(graph).into(),
        Algorithm::NodesDegrees => nodes_degrees(graph).into(),
    };

    Ok(output)
}
