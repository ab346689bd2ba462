//! Value types shared by the graph model and the algorithms.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Numeric edge weight.
pub type Weight = i32;

/// Adjacency view: node id to the ordered set of its neighbours.
///
/// Every live node has an entry, so isolated nodes map to an empty set.
pub type AdjacencyList = BTreeMap<NodeId, BTreeSet<NodeId>>;

/// Identifier of a node within a graph.
///
/// Ids are handed out by a counter starting at 1 and are ordered numerically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A graph vertex. Its identity never changes once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
}

/// Endpoint pair identifying an edge, ordered by `a` then `b`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EdgeKey {
    pub a: NodeId,
    pub b: NodeId,
}

impl EdgeKey {
    pub const fn new(a: NodeId, b: NodeId) -> Self {
        Self { a, b }
    }

    /// The undirected form of this pair, smaller endpoint first.
    pub fn canonical(self) -> Self {
        if self.a <= self.b {
            self
        } else {
            self.reversed()
        }
    }

    pub const fn reversed(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    pub fn touches(&self, id: NodeId) -> bool {
        self.a == id || self.b == id
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

impl std::fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.a, self.b)
    }
}

/// An edge together with its weight.
///
/// Equality and ordering only look at the endpoints; the weight is payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub const fn new(a: NodeId, b: NodeId, weight: Weight) -> Self {
        Self { a, b, weight }
    }

    pub const fn key(&self) -> EdgeKey {
        EdgeKey::new(self.a, self.b)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Which of the two parallel edge stores an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    Directed,
    Undirected,
}

/// Pairs removed by a deletion, in ascending order per representation.
///
/// Undirected pairs are reported in canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovedEdges {
    pub directed: Vec<EdgeKey>,
    pub undirected: Vec<EdgeKey>,
}

impl RemovedEdges {
    pub fn is_empty(&self) -> bool {
        self.directed.is_empty() && self.undirected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: u32) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn test_node_ordering() {
        let first = Node { id: n(1) };
        let second = Node { id: n(2) };
        assert!(first < second);
        assert_eq!(first, Node { id: n(1) });
    }

    #[test]
    fn test_edge_ordering_ignores_weight() {
        let e12 = Edge::new(n(1), n(2), 0);
        let e13 = Edge::new(n(1), n(3), 0);
        let e21 = Edge::new(n(2), n(1), 0);
        let e12_heavy = Edge::new(n(1), n(2), 5);

        assert!(e12 < e13);
        assert!(e13 < e21);
        assert!(e12 <= e21);
        assert_eq!(e12, e12_heavy);
    }

    #[test]
    fn test_canonical_key() {
        assert_eq!(EdgeKey::new(n(5), n(2)).canonical(), EdgeKey::new(n(2), n(5)));
        assert_eq!(EdgeKey::new(n(2), n(5)).canonical(), EdgeKey::new(n(2), n(5)));
        assert!(EdgeKey::new(n(3), n(3)).is_self_loop());
    }

    #[test]
    fn test_display() {
        assert_eq!(n(7).to_string(), "7");
        assert_eq!(EdgeKey::new(n(1), n(2)).to_string(), "1 -> 2");
    }
}
