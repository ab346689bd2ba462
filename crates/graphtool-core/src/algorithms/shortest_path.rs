//! Dijkstra's shortest path.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use super::{TraversalOrder, ensure_node};
use crate::error::{Error, Result};
use crate::graph::{EdgeKey, Graph, NodeId};

/// Shortest path from `start` to `end`.
///
/// Edge costs come from [`Graph::edge_weight`], so an unweighted graph counts
/// hops. The result lists the path's nodes from `start` to `end` inclusive.
/// `edge_order` starts with `(start, start)` followed by the path's edges, so
/// the animation highlights the root before walking the path. An unreachable
/// `end` gives an empty result.
///
/// Among equally short paths, the one discovered first wins: a node's parent
/// only changes on a strictly shorter distance, and queue entries with equal
/// distance pop in insertion order.
///
/// # Errors
///
/// [`Error::NodeNotFound`] for an unknown `start` or `end`, and
/// [`Error::NegativeWeight`] if a relaxed edge has a negative cost.
pub fn dijkstra(graph: &Graph, start: NodeId, end: NodeId) -> Result<TraversalOrder> {
    ensure_node(graph, start)?;
    ensure_node(graph, end)?;

    let mut distances: FxHashMap<NodeId, i64> = FxHashMap::default();
    let mut parents: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut settled: FxHashSet<NodeId> = FxHashSet::default();
    // (distance, insertion sequence, node)
    let mut queue = BinaryHeap::new();
    let mut sequence: u64 = 0;

    distances.insert(start, 0);
    queue.push(Reverse((0_i64, sequence, start)));

    while let Some(Reverse((distance, _, current))) = queue.pop() {
        if !settled.insert(current) {
            continue;
        }
        if current == end {
            break;
        }

        for next in graph.neighbors(current) {
            if settled.contains(&next) {
                continue;
            }

            let weight = graph.edge_weight(current, next);
            if weight < 0 {
                return Err(Error::NegativeWeight {
                    a: current,
                    b: next,
                    weight,
                });
            }

            let candidate = distance + i64::from(weight);
            if distances
                .get(&next)
                .is_none_or(|&known| candidate < known)
            {
                distances.insert(next, candidate);
                parents.insert(next, current);
                sequence += 1;
                queue.push(Reverse((candidate, sequence, next)));
            }
        }
    }

    if !settled.contains(&end) {
        tracing::trace!("dijkstra: {} unreachable from {}", end, start);
        return Ok(TraversalOrder::new());
    }

    let mut path = vec![end];
    let mut node = end;
    while node != start {
        match parents.get(&node) {
            Some(&parent) => {
                path.push(parent);
                node = parent;
            }
            None => return Ok(TraversalOrder::new()),
        }
    }
    path.reverse();

    // The script opens on the root as a (start, start) edge.
    let edge_order = std::iter::once(EdgeKey::new(start, start))
        .chain(path.windows(2).map(|pair| EdgeKey::new(pair[0], pair[1])))
        .collect();

    tracing::trace!(
        "dijkstra: {} -> {} costs {} over {} nodes",
        start,
        end,
        distances.get(&end).copied().unwrap_or_default(),
        path.len()
    );

    Ok(TraversalOrder {
        edge_order,
        node_order: path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::fixtures::{graph_with, key, n, two_trees};

    fn weighted_tree() -> Graph {
        let mut graph = graph_with(6, &[(1, 2), (2, 3), (3, 4), (2, 5), (5, 6)]);
        graph.make_weighted();
        graph.set_edge_weight(n(1), n(2), 4);
        graph.set_edge_weight(n(2), n(3), 9);
        graph.set_edge_weight(n(2), n(5), 8);
        graph.set_edge_weight(n(5), n(6), 2);
        graph
    }

    #[test]
    fn test_unweighted_path() {
        let graph = two_trees();
        let order = dijkstra(&graph, n(1), n(6)).unwrap();

        assert_eq!(order.node_order, vec![n(1), n(2), n(5), n(6)]);
        assert_eq!(
            order.edge_order,
            vec![key(1, 1), key(1, 2), key(2, 5), key(5, 6)]
        );
    }

    #[test]
    fn test_weighted_path() {
        let graph = weighted_tree();
        let order = dijkstra(&graph, n(1), n(6)).unwrap();
        assert_eq!(order.node_order, vec![n(1), n(2), n(5), n(6)]);
        assert_eq!(order.edge_order.len(), 4);
        assert_eq!(order.edge_order.first(), Some(&key(1, 1)));
    }

    #[test]
    fn test_weights_choose_longer_hop_path() {
        let mut graph = graph_with(4, &[(1, 2), (2, 3), (1, 4), (4, 3)]);
        graph.make_weighted();
        graph.set_edge_weight(n(1), n(2), 10);
        graph.set_edge_weight(n(2), n(3), 10);
        graph.set_edge_weight(n(1), n(4), 1);
        graph.set_edge_weight(n(4), n(3), 1);
        graph.add_edge(n(1), n(3));
        graph.set_edge_weight(n(1), n(3), 5);

        let order = dijkstra(&graph, n(1), n(3)).unwrap();
        assert_eq!(order.node_order, vec![n(1), n(4), n(3)]);

        graph.make_unweighted();
        let order = dijkstra(&graph, n(1), n(3)).unwrap();
        assert_eq!(order.node_order, vec![n(1), n(3)]);
    }

    #[test]
    fn test_equal_paths_prefer_first_discovered() {
        let graph = graph_with(4, &[(1, 2), (1, 3), (2, 4), (3, 4)]);
        let order = dijkstra(&graph, n(1), n(4)).unwrap();
        assert_eq!(order.node_order, vec![n(1), n(2), n(4)]);
    }

    #[test]
    fn test_unreachable_end() {
        let graph = two_trees();
        let order = dijkstra(&graph, n(1), n(8)).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn test_directed_respects_direction() {
        let mut graph = graph_with(3, &[(1, 2), (3, 2)]);
        graph.make_directed();
        assert!(dijkstra(&graph, n(1), n(3)).unwrap().is_empty());

        graph.make_undirected();
        let order = dijkstra(&graph, n(1), n(3)).unwrap();
        assert_eq!(order.node_order, vec![n(1), n(2), n(3)]);
    }

    #[test]
    fn test_start_equals_end() {
        let graph = two_trees();
        let order = dijkstra(&graph, n(4), n(4)).unwrap();
        assert_eq!(order.node_order, vec![n(4)]);
        assert_eq!(order.edge_order, vec![key(4, 4)]);
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let mut graph = graph_with(2, &[(1, 2)]);
        graph.make_weighted();
        graph.set_edge_weight(n(1), n(2), -3);

        assert_eq!(
            dijkstra(&graph, n(1), n(2)),
            Err(Error::NegativeWeight {
                a: n(1),
                b: n(2),
                weight: -3
            })
        );
    }

    #[test]
    fn test_missing_nodes() {
        let graph = two_trees();
        assert_eq!(dijkstra(&graph, n(0), n(1)), Err(Error::NodeNotFound(n(0))));
        assert_eq!(dijkstra(&graph, n(1), n(42)), Err(Error::NodeNotFound(n(42))));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let graph = weighted_tree();
        let first = dijkstra(&graph, n(1), n(4)).unwrap();
        let second = dijkstra(&graph, n(1), n(4)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.node_order, vec![n(1), n(2), n(3), n(4)]);
    }
}
