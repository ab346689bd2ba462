//! Depth-first and breadth-first traversal.

use std::collections::{BTreeSet, VecDeque};

use rustc_hash::FxHashSet;

use super::{TraversalOrder, ensure_node};
use crate::error::Result;
use crate::graph::{AdjacencyList, EdgeKey, Graph, NodeId};

static NO_NEIGHBORS: BTreeSet<NodeId> = BTreeSet::new();

fn neighbors_of(
    adjacency: &AdjacencyList,
    node: NodeId,
) -> std::iter::Copied<std::collections::btree_set::Iter<'_, NodeId>> {
    adjacency.get(&node).unwrap_or(&NO_NEIGHBORS).iter().copied()
}

/// Depth-first traversal from `start` over the current mode's adjacency.
///
/// Neighbours are explored in ascending id order. Each node is recorded when
/// first reached, together with the edge `(parent, child)` that reached it;
/// the start node has no edge. Nodes that cannot be reached are absent.
pub fn dfs(graph: &Graph, start: NodeId) -> Result<TraversalOrder> {
    ensure_node(graph, start)?;

    let mut visited = FxHashSet::default();
    let order = depth_first(graph.adjacency_list(), start, &mut visited);

    tracing::trace!("dfs from {} reached {} nodes", start, order.node_order.len());
    Ok(order)
}

/// Depth-first walk shared with component detection.
///
/// Uses an explicit stack of neighbour iterators so the visiting order is the
/// same as the recursive formulation without recursing per node.
pub(crate) fn depth_first(
    adjacency: &AdjacencyList,
    start: NodeId,
    visited: &mut FxHashSet<NodeId>,
) -> TraversalOrder {
    let mut order = TraversalOrder::new();
    visited.insert(start);
    order.node_order.push(start);

    let mut stack = vec![(start, neighbors_of(adjacency, start))];
    while let Some((current, neighbors)) = stack.last_mut() {
        let current = *current;
        match neighbors.find(|next| !visited.contains(next)) {
            Some(next) => {
                visited.insert(next);
                order.node_order.push(next);
                order.edge_order.push(EdgeKey::new(current, next));
                stack.push((next, neighbors_of(adjacency, next)));
            }
            None => {
                stack.pop();
            }
        }
    }

    order
}

/// Breadth-first traversal from `start` over the current mode's adjacency.
///
/// Nodes are recorded as they leave the queue. Edges are recorded when a
/// neighbour is discovered, as `(current, neighbour)`.
pub fn bfs(graph: &Graph, start: NodeId) -> Result<TraversalOrder> {
    ensure_node(graph, start)?;

    let mut order = TraversalOrder::new();
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::from([start]);
    visited.insert(start);

    while let Some(current) = queue.pop_front() {
        order.node_order.push(current);

        for next in graph.neighbors(current) {
            if visited.insert(next) {
                order.edge_order.push(EdgeKey::new(current, next));
                queue.push_back(next);
            }
        }
    }

    tracing::trace!("bfs from {} reached {} nodes", start, order.node_order.len());
    Ok(order)
}
