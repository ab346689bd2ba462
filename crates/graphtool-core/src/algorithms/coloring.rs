//! Greedy graph colouring.

use rustc_hash::FxHashSet;

use super::{ClassIndex, NodeClassification, TraversalOrder};
use crate::graph::{Graph, Representation};

/// Greedy sequential colouring in ascending id order.
///
/// Each node gets the smallest colour index not already used by a coloured
/// neighbour. Adjacency is taken from the undirected view whatever the mode,
/// because a directed edge still joins two nodes that must differ. Self
/// loops are ignored. `node_order` is the processing order; there are no edges.
pub fn coloring(graph: &Graph) -> (TraversalOrder, NodeClassification) {
    let adjacency = graph.adjacency_list_in(Representation::Undirected);
    let mut colors: NodeClassification = graph.node_ids().map(|id| (id, None)).collect();
    let mut order = TraversalOrder::new();

    for id in graph.node_ids() {
        let used: FxHashSet<ClassIndex> = adjacency
            .get(&id)
            .into_iter()
            .flatten()
            .filter_map(|neighbor| colors.get(neighbor).copied().flatten())
            .collect();

        let mut color = 0;
        while used.contains(&color) {
            color += 1;
        }

        colors.insert(id, Some(color));
        order.node_order.push(id);
    }

    tracing::trace!(
        "coloring: {} nodes, {} colors",
        order.node_order.len(),
        colors.values().flatten().max().map_or(0, |max| max + 1)
    );
    (order, colors)
}
