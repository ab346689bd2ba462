//! Grouping nodes by degree.

use rustc_hash::FxHashMap;

use super::{ClassIndex, NodeClassification, TraversalOrder};
use crate::graph::Graph;

/// Classify nodes by degree in the current mode.
///
/// A node's degree is the size of its adjacency set, so directed mode counts
/// outgoing edges. Class indices are handed out in first-seen order while
/// scanning nodes by ascending id: equal degrees share an index, different
/// degrees never do. `node_order` is the scan order.
pub fn nodes_degrees(graph: &Graph) -> (TraversalOrder, NodeClassification) {
    let adjacency = graph.adjacency_list();
    let mut class_of_degree: FxHashMap<usize, ClassIndex> = FxHashMap::default();
    let mut classes = NodeClassification::new();
    let mut order = TraversalOrder::new();

    for id in graph.node_ids() {
        let degree = adjacency.get(&id).map_or(0, |neighbors| neighbors.len());
        let next = class_of_degree.len();
        let class = *class_of_degree.entry(degree).or_insert(next);

        classes.insert(id, Some(class));
        order.node_order.push(id);
    }

    tracing::trace!("nodes_degrees: {} distinct degrees", class_of_degree.len());
    (order, classes)
}
