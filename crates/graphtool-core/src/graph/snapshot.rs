//! Capturing a graph's state and rebuilding it through the mutation API.
//!
//! A snapshot is what a persistence layer reads from and writes to; the
//! on-disk encoding is left to that layer.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::store::Graph;
use super::types::{Edge, NodeId, Representation};
use crate::error::{Error, Result};

/// Everything needed to rebuild a graph, minus its listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub directed: bool,
    pub weighted: bool,
    pub next_node_id: u32,
    /// Live node ids, ascending
    pub nodes: Vec<NodeId>,
    /// Directed edges as the user added them
    pub directed_edges: Vec<Edge>,
    /// Canonical undirected edges, which may carry their own weights
    pub undirected_edges: Vec<Edge>,
}

impl Graph {
    /// Capture the current state.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            directed: self.is_directed(),
            weighted: self.is_weighted(),
            next_node_id: self.next_node_id(),
            nodes: self.node_ids().collect(),
            directed_edges: self.directed_edges().collect(),
            undirected_edges: self.undirected_edges().collect(),
        }
    }

    /// Replace the current state with `snapshot`.
    ///
    /// The graph is rebuilt step by step through its public mutation methods,
    /// so the result satisfies the same invariants as an interactively built
    /// graph. Listeners stay subscribed and receive `on_loaded` at the end;
    /// mode switches made while replaying are not reported individually.
    ///
    /// The snapshot is validated first; on error the graph is left untouched.
    pub fn restore(&mut self, snapshot: &GraphSnapshot) -> Result<()> {
        validate(snapshot)?;

        self.reset();
        // Replay with both modes off so listeners only see the final load.
        self.apply_modes_silently(false, false);

        for &id in &snapshot.nodes {
            self.set_next_node_id(id.as_u32());
            self.create_node();
        }
        self.set_next_node_id(snapshot.next_node_id);

        for edge in &snapshot.directed_edges {
            self.add_weighted_edge(edge.a, edge.b, edge.weight);
        }
        for edge in &snapshot.undirected_edges {
            self.set_edge_weight_in(edge.a, edge.b, edge.weight, Representation::Undirected);
        }

        self.apply_modes_silently(snapshot.directed, snapshot.weighted);

        tracing::debug!(
            "Restored graph with {} nodes and {} directed edges",
            snapshot.nodes.len(),
            snapshot.directed_edges.len()
        );
        self.notify_loaded();
        Ok(())
    }
}

fn validate(snapshot: &GraphSnapshot) -> Result<()> {
    let nodes: BTreeSet<NodeId> = snapshot.nodes.iter().copied().collect();
    if nodes.len() != snapshot.nodes.len() {
        return Err(Error::InvalidSnapshot("duplicate node id".to_string()));
    }

    let edges = snapshot
        .directed_edges
        .iter()
        .chain(&snapshot.undirected_edges);
    for edge in edges {
        for endpoint in [edge.a, edge.b] {
            if !nodes.contains(&endpoint) {
                return Err(Error::InvalidSnapshot(format!(
                    "edge {} refers to unknown node {}",
                    edge.key(),
                    endpoint
                )));
            }
        }
    }

    for edge in &snapshot.undirected_edges {
        let backed = snapshot
            .directed_edges
            .iter()
            .any(|directed| directed.key().canonical() == edge.key().canonical());
        if !backed {
            return Err(Error::InvalidSnapshot(format!(
                "undirected edge {} has no directed edge behind it",
                edge.key()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeKey, GraphListener};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn n(id: u32) -> NodeId {
        NodeId::new(id)
    }

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        for _ in 0..4 {
            graph.create_node();
        }
        graph.delete_node(n(3));
        graph.add_weighted_edge(n(1), n(2), 4);
        graph.add_weighted_edge(n(2), n(1), 7);
        graph.add_weighted_edge(n(4), n(1), 2);
        graph.set_edge_weight_in(n(1), n(2), 5, Representation::Undirected);
        graph.make_directed();
        graph.make_weighted();
        graph
    }

    #[test]
    fn test_snapshot_contents() {
        let snapshot = sample_graph().snapshot();
        assert!(snapshot.directed);
        assert!(snapshot.weighted);
        assert_eq!(snapshot.next_node_id, 5);
        assert_eq!(snapshot.nodes, vec![n(1), n(2), n(4)]);
        assert_eq!(snapshot.directed_edges.len(), 3);
        assert_eq!(snapshot.undirected_edges.len(), 2);
        assert_eq!(snapshot.undirected_edges[0].weight, 5);
    }

    #[test]
    fn test_restore_reproduces_snapshot() {
        let original = sample_graph();
        let snapshot = original.snapshot();

        let mut restored = Graph::new();
        restored.create_node();
        restored.restore(&snapshot).unwrap();

        // Edge equality ignores weights, so compare them separately.
        let weights = |edges: &[Edge]| -> Vec<(EdgeKey, i32)> {
            edges.iter().map(|edge| (edge.key(), edge.weight)).collect()
        };
        let again = restored.snapshot();
        assert_eq!(again, snapshot);
        assert_eq!(weights(&again.directed_edges), weights(&snapshot.directed_edges));
        assert_eq!(weights(&again.undirected_edges), weights(&snapshot.undirected_edges));
        assert_eq!(restored.create_node(), n(5));
    }

    #[test]
    fn test_restore_notifies_loaded_once() {
        struct Loads(Rc<RefCell<(usize, usize)>>);
        impl GraphListener for Loads {
            fn on_loaded(&mut self) {
                self.0.borrow_mut().0 += 1;
            }
            fn on_weighted_changed(&mut self, _weighted: bool) {
                self.0.borrow_mut().1 += 1;
            }
        }

        let counts = Rc::new(RefCell::new((0, 0)));
        let mut graph = Graph::new();
        graph.subscribe("loads", Loads(Rc::clone(&counts)));
        graph.restore(&sample_graph().snapshot()).unwrap();

        assert_eq!(*counts.borrow(), (1, 0));
        assert!(graph.is_weighted());
    }

    #[test]
    fn test_restore_rejects_dangling_edge() {
        let mut snapshot = sample_graph().snapshot();
        snapshot.directed_edges.push(Edge::new(n(1), n(3), 0));

        let mut graph = Graph::new();
        let keep = graph.create_node();
        let result = graph.restore(&snapshot);
        assert!(matches!(result, Err(Error::InvalidSnapshot(_))));
        assert!(graph.does_node_exist(keep));
    }

    #[test]
    fn test_restore_rejects_unbacked_undirected_edge() {
        let mut snapshot = sample_graph().snapshot();
        snapshot.undirected_edges.push(Edge::new(n(2), n(4), 0));

        let result = Graph::new().restore(&snapshot);
        assert!(matches!(result, Err(Error::InvalidSnapshot(_))));
    }

    #[test]
    fn test_snapshot_survives_json() {
        let snapshot = sample_graph().snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: GraphSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);

        let mut graph = Graph::new();
        graph.restore(&decoded).unwrap();
        assert!(graph.does_edge_exist(n(4), n(1)));
        assert!(!graph.does_edge_exist(n(1), n(4)));
        assert_eq!(
            graph.undirected_edges().map(|edge| edge.key()).collect::<Vec<_>>(),
            vec![EdgeKey::new(n(1), n(2)), EdgeKey::new(n(1), n(4))]
        );
    }
}
