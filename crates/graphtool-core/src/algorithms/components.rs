//! Connected components ("islands").

use rustc_hash::FxHashSet;

use super::traversal::depth_first;
use super::{NodeClassification, TraversalOrder};
use crate::graph::{Graph, Representation};

/// Group nodes into connected components.
///
/// Unvisited nodes are taken in ascending id order, and each starts a
/// depth-first walk over the undirected view; everything that walk reaches is
/// one component. Components are numbered from 0 in the order found.
/// `node_order` concatenates the walks; `edge_order` is empty since components
/// are reported as node groups.
pub fn find_islands(graph: &Graph) -> (TraversalOrder, NodeClassification) {
    let adjacency = graph.adjacency_list_in(Representation::Undirected);
    let mut visited = FxHashSet::default();
    let mut components: NodeClassification = graph.node_ids().map(|id| (id, None)).collect();
    let mut order = TraversalOrder::new();
    let mut count = 0;

    for id in graph.node_ids() {
        if visited.contains(&id) {
            continue;
        }

        let island = depth_first(adjacency, id, &mut visited);
        for node in &island.node_order {
            components.insert(*node, Some(count));
        }
        order += island;
        count += 1;
    }
    order.edge_order.clear();

    tracing::trace!("find_islands: {} components", count);
    (order, components)
}
