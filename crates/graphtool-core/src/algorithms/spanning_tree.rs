//! Kruskal's minimum spanning tree.

use petgraph::unionfind::UnionFind;
use rustc_hash::{FxHashMap, FxHashSet};

use super::TraversalOrder;
use crate::graph::{EdgeKey, Graph, NodeId, Representation, Weight};

/// Minimum spanning forest by Kruskal's algorithm.
///
/// Always works on the undirected edges, since a spanning tree is not defined
/// for directed edges. Candidates are sorted by cost, then by endpoints; an
/// edge is accepted when its endpoints are still in different trees.
/// Accepted edges are appended to `edge_order`, and each endpoint to
/// `node_order` the first time it shows up.
pub fn kruskal_mst(graph: &Graph) -> TraversalOrder {
    let indices: FxHashMap<NodeId, usize> = graph
        .node_ids()
        .enumerate()
        .map(|(index, id)| (id, index))
        .collect();
    let mut forest = UnionFind::<usize>::new(indices.len());

    let mut candidates: Vec<(Weight, EdgeKey)> = graph
        .undirected_edges()
        .map(|edge| {
            let cost = graph.edge_weight_in(edge.a, edge.b, Representation::Undirected);
            (cost, edge.key())
        })
        .collect();
    candidates.sort();

    let mut order = TraversalOrder::new();
    let mut seen = FxHashSet::default();
    for (_, key) in candidates {
        let (Some(&a), Some(&b)) = (indices.get(&key.a), indices.get(&key.b)) else {
            continue;
        };
        if !forest.union(a, b) {
            continue;
        }

        order.edge_order.push(key);
        for endpoint in [key.a, key.b] {
            if seen.insert(endpoint) {
                order.node_order.push(endpoint);
            }
        }
    }

    tracing::trace!("kruskal_mst: accepted {} edges", order.edge_order.len());
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::fixtures::{graph_with, key, n, two_trees};

    #[test]
    fn test_unweighted_forest() {
        let graph = two_trees();
        let order = kruskal_mst(&graph);

        assert_eq!(
            order.edge_order,
            vec![
                key(1, 2),
                key(2, 3),
                key(2, 5),
                key(3, 4),
                key(5, 6),
                key(7, 8)
            ]
        );
        assert_eq!(
            order.node_order,
            vec![n(1), n(2), n(3), n(5), n(4), n(6), n(7), n(8)]
        );
    }

    #[test]
    fn test_cheapest_edges_win() {
        let mut graph = graph_with(4, &[(1, 2), (2, 3), (3, 1), (3, 4)]);
        graph.make_weighted();
        graph.set_edge_weight(n(1), n(2), 5);
        graph.set_edge_weight(n(2), n(3), 1);
        graph.set_edge_weight(n(3), n(1), 2);
        graph.set_edge_weight(n(3), n(4), 3);

        let order = kruskal_mst(&graph);
        assert_eq!(order.edge_order, vec![key(2, 3), key(1, 3), key(3, 4)]);
        assert_eq!(order.node_order, vec![n(2), n(3), n(1), n(4)]);
    }

    #[test]
    fn test_directed_mode_uses_undirected_edges() {
        let mut graph = graph_with(2, &[(1, 2), (2, 1)]);
        graph.make_directed();
        let order = kruskal_mst(&graph);
        assert_eq!(order.edge_order, vec![key(1, 2)]);
    }

    #[test]
    fn test_self_loop_is_never_accepted() {
        let graph = graph_with(2, &[(1, 1), (1, 2)]);
        let order = kruskal_mst(&graph);
        assert_eq!(order.edge_order, vec![key(1, 2)]);
    }

    #[test]
    fn test_deterministic() {
        let graph = two_trees();
        assert_eq!(kruskal_mst(&graph), kruskal_mst(&graph));
    }
}
