//! Construction-time settings for a [`Graph`](crate::Graph).

use serde::{Deserialize, Serialize};

use crate::graph::Weight;

/// Settings a graph is created with and returns to on `reset()`.
///
/// Missing fields deserialize to their defaults, so a host application can
/// embed a partial table in its own configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Start in directed mode.
    pub directed: bool,
    /// Start in weighted mode.
    pub weighted: bool,
    /// Cost reported by `edge_weight` when the graph is unweighted.
    pub unweighted_edge_cost: Weight,
    /// Weight given to edges added without an explicit weight.
    pub default_edge_weight: Weight,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            weighted: false,
            unweighted_edge_cost: 1,
            default_edge_weight: 0,
        }
    }
}
