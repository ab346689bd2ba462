//! The graph model.

use std::collections::{BTreeMap, BTreeSet};

use super::events::{GraphListener, ListenerRegistry};
use super::types::{AdjacencyList, Edge, EdgeKey, Node, NodeId, RemovedEdges, Representation, Weight};
use crate::config::GraphConfig;

/// An editable graph holding a directed and an undirected view of the same edges.
///
/// Every directed edge `(a, b)` the user adds is also recorded as the undirected
/// pair `(min, max)`. Switching between directed and undirected mode only
/// changes which view queries read, so the switch is lossless.
#[derive(Debug)]
pub struct Graph {
    nodes: BTreeSet<Node>,
    /// Directed edges keyed as given
    directed_edges: BTreeMap<EdgeKey, Weight>,
    /// Undirected edges keyed with the smaller node id first
    undirected_edges: BTreeMap<EdgeKey, Weight>,
    directed_adjacency: AdjacencyList,
    undirected_adjacency: AdjacencyList,
    directed: bool,
    weighted: bool,
    /// Next node ID to assign
    next_node_id: u32,
    config: GraphConfig,
    listeners: ListenerRegistry,
}

impl Graph {
    /// Create an empty, undirected, unweighted graph.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create an empty graph whose initial modes come from `config`.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            nodes: BTreeSet::new(),
            directed_edges: BTreeMap::new(),
            undirected_edges: BTreeMap::new(),
            directed_adjacency: AdjacencyList::new(),
            undirected_adjacency: AdjacencyList::new(),
            directed: config.directed,
            weighted: config.weighted,
            next_node_id: 1,
            config,
            listeners: ListenerRegistry::default(),
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Nodes
    // ------------------------------------------------------------------

    /// Create a node and return its id.
    ///
    /// Ids come from the counter, skipping any still held by a live node. Once
    /// the counter reaches `u32::MAX` it stays there and later nodes take the
    /// lowest free ids.
    pub fn create_node(&mut self) -> NodeId {
        let id = self.free_id_from(self.next_node_id);
        self.next_node_id = id.as_u32().checked_add(1).unwrap_or_else(|| {
            tracing::debug!("Node id counter exhausted at {}", id);
            u32::MAX
        });

        self.nodes.insert(Node { id });
        self.directed_adjacency.entry(id).or_default();
        self.undirected_adjacency.entry(id).or_default();

        tracing::trace!("Created node {}", id);
        id
    }

    /// First id at or after `start` that no live node holds, wrapping to 1.
    fn free_id_from(&self, start: u32) -> NodeId {
        (start..=u32::MAX)
            .chain(1..start)
            .map(NodeId::new)
            .find(|&id| !self.does_node_exist(id))
            .unwrap_or(NodeId::new(start))
    }

    /// Override the id the next `create_node` call starts from.
    ///
    /// Used when rebuilding a saved graph. `create_node` still skips ids held
    /// by live nodes.
    pub fn set_next_node_id(&mut self, next: u32) {
        self.next_node_id = next;
    }

    pub fn next_node_id(&self) -> u32 {
        self.next_node_id
    }

    /// Delete a node together with every edge touching it.
    ///
    /// Returns the removed pairs; unknown ids remove nothing.
    pub fn delete_node(&mut self, id: NodeId) -> RemovedEdges {
        if !self.nodes.remove(&Node { id }) {
            tracing::debug!("Ignoring deletion of unknown node {}", id);
            return RemovedEdges::default();
        }

        let directed: Vec<EdgeKey> = self
            .directed_edges
            .keys()
            .filter(|key| key.touches(id))
            .copied()
            .collect();
        let undirected: Vec<EdgeKey> = self
            .undirected_edges
            .keys()
            .filter(|key| key.touches(id))
            .copied()
            .collect();

        for key in &directed {
            self.directed_edges.remove(key);
        }
        for key in &undirected {
            self.undirected_edges.remove(key);
        }

        for adjacency in [&mut self.directed_adjacency, &mut self.undirected_adjacency] {
            adjacency.remove(&id);
            for neighbors in adjacency.values_mut() {
                neighbors.remove(&id);
            }
        }

        tracing::trace!(
            "Deleted node {} ({} directed, {} undirected edges)",
            id,
            directed.len(),
            undirected.len()
        );
        self.listeners.edges_deleted(&directed, &undirected);

        RemovedEdges {
            directed,
            undirected,
        }
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    /// Add the edge `a -> b` with the configured default weight.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        self.add_weighted_edge(a, b, self.config.default_edge_weight)
    }

    /// Add the edge `a -> b` with `weight`.
    ///
    /// The pair lands in both representations. If the undirected pair already
    /// exists (added from the other direction) its weight is left alone.
    /// Returns `false` if either node is missing or the directed edge exists.
    pub fn add_weighted_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> bool {
        if !self.does_node_exist(a) || !self.does_node_exist(b) {
            tracing::debug!("Ignoring edge {} -> {}: unknown node", a, b);
            return false;
        }

        let key = EdgeKey::new(a, b);
        if self.directed_edges.contains_key(&key) {
            return false;
        }

        self.directed_edges.insert(key, weight);
        self.undirected_edges.entry(key.canonical()).or_insert(weight);

        self.directed_adjacency.entry(a).or_default().insert(b);
        self.undirected_adjacency.entry(a).or_default().insert(b);
        self.undirected_adjacency.entry(b).or_default().insert(a);

        tracing::trace!("Added edge {} (weight {})", key, weight);
        true
    }

    /// Delete the directed edge `a -> b`.
    ///
    /// The undirected pair survives while `b -> a` still backs it. In
    /// undirected mode, asking for `a -> b` when only `b -> a` was added
    /// deletes `b -> a`, since both name the same visible edge.
    pub fn delete_edge(&mut self, a: NodeId, b: NodeId) -> RemovedEdges {
        let key = EdgeKey::new(a, b);
        let target = if self.directed_edges.contains_key(&key) {
            key
        } else if !self.directed && self.directed_edges.contains_key(&key.reversed()) {
            key.reversed()
        } else {
            tracing::debug!("Ignoring deletion of missing edge {}", key);
            return RemovedEdges::default();
        };

        let removed = RemovedEdges {
            undirected: self.unlink_directed(target).into_iter().collect(),
            directed: vec![target],
        };
        self.listeners
            .edges_deleted(&removed.directed, &removed.undirected);
        removed
    }

    /// Delete both directions between `a` and `b` and the undirected pair.
    pub fn delete_undirected_edge(&mut self, a: NodeId, b: NodeId) -> RemovedEdges {
        let key = EdgeKey::new(a, b).canonical();
        if !self.undirected_edges.contains_key(&key) {
            tracing::debug!("Ignoring deletion of missing undirected edge {}", key);
            return RemovedEdges::default();
        }

        let mut removed = RemovedEdges::default();
        let mut directions = vec![key];
        if !key.is_self_loop() {
            directions.push(key.reversed());
        }
        for direction in directions {
            if self.directed_edges.contains_key(&direction) {
                removed.directed.push(direction);
                removed.undirected.extend(self.unlink_directed(direction));
            }
        }
        removed.directed.sort();

        self.listeners
            .edges_deleted(&removed.directed, &removed.undirected);
        removed
    }

    /// Remove one directed edge and, if nothing else backs it, its undirected
    /// pair. Returns the undirected pair when it was removed.
    fn unlink_directed(&mut self, key: EdgeKey) -> Option<EdgeKey> {
        self.directed_edges.remove(&key);
        if let Some(neighbors) = self.directed_adjacency.get_mut(&key.a) {
            neighbors.remove(&key.b);
        }

        if self.directed_edges.contains_key(&key.reversed()) {
            tracing::trace!("Deleted edge {}, undirected pair kept", key);
            return None;
        }

        let canonical = key.canonical();
        self.undirected_edges.remove(&canonical);
        if let Some(neighbors) = self.undirected_adjacency.get_mut(&key.a) {
            neighbors.remove(&key.b);
        }
        if let Some(neighbors) = self.undirected_adjacency.get_mut(&key.b) {
            neighbors.remove(&key.a);
        }

        tracing::trace!("Deleted edge {} and undirected pair {}", key, canonical);
        Some(canonical)
    }

    /// Set the weight of `a -> b` in every representation that holds it.
    ///
    /// In undirected mode, when only `b -> a` was added, that directed edge
    /// takes the weight, as for [`delete_edge`](Self::delete_edge).
    pub fn set_edge_weight(&mut self, a: NodeId, b: NodeId, weight: Weight) -> bool {
        let (a, b) = if !self.directed
            && !self.does_directed_edge_exist(a, b)
            && self.does_directed_edge_exist(b, a)
        {
            (b, a)
        } else {
            (a, b)
        };
        let directed = self.set_edge_weight_in(a, b, weight, Representation::Directed);
        let undirected = self.set_edge_weight_in(a, b, weight, Representation::Undirected);
        directed || undirected
    }

    /// Set the weight of `a -> b` in one representation only.
    pub fn set_edge_weight_in(
        &mut self,
        a: NodeId,
        b: NodeId,
        weight: Weight,
        representation: Representation,
    ) -> bool {
        let (edges, key) = match representation {
            Representation::Directed => (&mut self.directed_edges, EdgeKey::new(a, b)),
            Representation::Undirected => {
                (&mut self.undirected_edges, EdgeKey::new(a, b).canonical())
            }
        };

        match edges.get_mut(&key) {
            Some(stored) => {
                *stored = weight;
                true
            }
            None => {
                tracing::debug!("Ignoring weight for missing edge {}", key);
                false
            }
        }
    }

    /// Cost of traversing `a -> b` in the current mode.
    ///
    /// Returns the stored weight when the graph is weighted and the edge
    /// exists, otherwise the configured unweighted cost (1 by default).
    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> Weight {
        let representation = self.representation();
        self.edge_weight_in(a, b, representation)
    }

    /// Like [`edge_weight`](Self::edge_weight), reading a fixed representation.
    pub fn edge_weight_in(&self, a: NodeId, b: NodeId, representation: Representation) -> Weight {
        if !self.weighted {
            return self.config.unweighted_edge_cost;
        }
        self.stored_weight(a, b, representation)
            .unwrap_or(self.config.unweighted_edge_cost)
    }

    /// Raw stored weight, regardless of weighted mode.
    pub fn stored_weight(&self, a: NodeId, b: NodeId, representation: Representation) -> Option<Weight> {
        match representation {
            Representation::Directed => self.directed_edges.get(&EdgeKey::new(a, b)).copied(),
            Representation::Undirected => self
                .undirected_edges
                .get(&EdgeKey::new(a, b).canonical())
                .copied(),
        }
    }

    // ------------------------------------------------------------------
    // Modes
    // ------------------------------------------------------------------

    pub fn make_directed(&mut self) {
        self.set_directed(true);
    }

    pub fn make_undirected(&mut self) {
        self.set_directed(false);
    }

    fn set_directed(&mut self, directed: bool) {
        if self.directed == directed {
            return;
        }
        self.directed = directed;
        tracing::debug!("Graph is now {}", if directed { "directed" } else { "undirected" });
        self.listeners.directed_changed(directed);
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn make_weighted(&mut self) {
        self.set_weighted(true);
    }

    pub fn make_unweighted(&mut self) {
        self.set_weighted(false);
    }

    fn set_weighted(&mut self, weighted: bool) {
        if self.weighted == weighted {
            return;
        }
        self.weighted = weighted;
        tracing::debug!("Graph is now {}", if weighted { "weighted" } else { "unweighted" });
        self.listeners.weighted_changed(weighted);
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// The representation queries read in the current mode.
    pub fn representation(&self) -> Representation {
        if self.directed {
            Representation::Directed
        } else {
            Representation::Undirected
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn does_node_exist(&self, id: NodeId) -> bool {
        self.nodes.contains(&Node { id })
    }

    /// Whether `a -> b` exists in the current mode.
    pub fn does_edge_exist(&self, a: NodeId, b: NodeId) -> bool {
        if self.directed {
            self.does_directed_edge_exist(a, b)
        } else {
            self.does_undirected_edge_exist(a, b)
        }
    }

    pub fn does_directed_edge_exist(&self, a: NodeId, b: NodeId) -> bool {
        self.directed_edges.contains_key(&EdgeKey::new(a, b))
    }

    pub fn does_undirected_edge_exist(&self, a: NodeId, b: NodeId) -> bool {
        self.undirected_edges
            .contains_key(&EdgeKey::new(a, b).canonical())
    }

    /// Nodes in ascending id order.
    pub fn nodes(&self) -> &BTreeSet<Node> {
        &self.nodes
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|node| node.id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adjacency view for the current mode.
    pub fn adjacency_list(&self) -> &AdjacencyList {
        self.adjacency_list_in(self.representation())
    }

    pub fn adjacency_list_in(&self, representation: Representation) -> &AdjacencyList {
        match representation {
            Representation::Directed => &self.directed_adjacency,
            Representation::Undirected => &self.undirected_adjacency,
        }
    }

    /// Neighbours of `id` in the current mode, ascending.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency_list()
            .get(&id)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().copied())
    }

    /// Edges of the current mode, ascending by endpoints.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges_in(self.representation())
    }

    pub fn edges_in(&self, representation: Representation) -> impl Iterator<Item = Edge> + '_ {
        let edges = match representation {
            Representation::Directed => &self.directed_edges,
            Representation::Undirected => &self.undirected_edges,
        };
        edges
            .iter()
            .map(|(key, &weight)| Edge::new(key.a, key.b, weight))
    }

    pub fn directed_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges_in(Representation::Directed)
    }

    pub fn undirected_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges_in(Representation::Undirected)
    }

    /// Number of edges in the current mode.
    pub fn edge_count(&self) -> usize {
        if self.directed {
            self.directed_edges.len()
        } else {
            self.undirected_edges.len()
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Drop all nodes and edges and return to the construction-time modes.
    ///
    /// Subscribed listeners stay registered.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.directed_edges.clear();
        self.undirected_edges.clear();
        self.directed_adjacency.clear();
        self.undirected_adjacency.clear();
        self.directed = self.config.directed;
        self.weighted = self.config.weighted;
        self.next_node_id = 1;
        tracing::debug!("Graph reset");
    }

    // ------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------

    /// Register `listener` under `name`.
    ///
    /// Returns `false` without replacing anything if the name is taken.
    /// Listeners must not hold a handle back into this graph: they run while
    /// the graph is mutably borrowed.
    pub fn subscribe(&mut self, name: impl Into<String>, listener: impl GraphListener + 'static) -> bool {
        self.listeners.subscribe(name.into(), Box::new(listener))
    }

    pub fn unsubscribe(&mut self, name: &str) -> bool {
        self.listeners.unsubscribe(name)
    }

    pub fn unsubscribe_all(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn notify_loaded(&mut self) {
        self.listeners.loaded();
    }

    /// Set both modes without notifying listeners.
    pub(crate) fn apply_modes_silently(&mut self, directed: bool, weighted: bool) {
        self.directed = directed;
        self.weighted = weighted;
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
