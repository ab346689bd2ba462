//! Change notifications emitted by the graph.
//!
//! Views that mirror the graph (edge shapes, cached algorithm results) register
//! a [`GraphListener`] under a name. Listeners run synchronously, in the order
//! they subscribed, inside the mutating call that triggered them.

use super::types::EdgeKey;

/// Callback trait for structural changes to a graph.
///
/// Every method has an empty default, so implementors only override what they
/// care about.
pub trait GraphListener {
    /// Called with the directed pairs removed by a deletion.
    fn on_directed_edges_deleted(&mut self, _edges: &[EdgeKey]) {}

    /// Called with the canonical undirected pairs removed by a deletion.
    fn on_undirected_edges_deleted(&mut self, _edges: &[EdgeKey]) {}

    /// Called when weighted mode actually changes.
    fn on_weighted_changed(&mut self, _weighted: bool) {}

    /// Called when directed mode actually changes.
    fn on_directed_changed(&mut self, _directed: bool) {}

    /// Called after the graph was rebuilt from a snapshot.
    fn on_loaded(&mut self) {}
}

/// Named listeners in subscription order.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    listeners: Vec<(String, Box<dyn GraphListener>)>,
}

impl ListenerRegistry {
    /// Register a listener. Returns `false` and keeps the existing one if
    /// `name` is already taken.
    pub(crate) fn subscribe(&mut self, name: String, listener: Box<dyn GraphListener>) -> bool {
        if self.listeners.iter().any(|(existing, _)| *existing == name) {
            tracing::debug!("Listener '{}' already subscribed", name);
            return false;
        }
        self.listeners.push((name, listener));
        true
    }

    pub(crate) fn unsubscribe(&mut self, name: &str) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| existing != name);
        self.listeners.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.listeners.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.listeners.iter().map(|(name, _)| name.as_str())
    }

    /// Notify about removed pairs. Empty lists are not sent.
    pub(crate) fn edges_deleted(&mut self, directed: &[EdgeKey], undirected: &[EdgeKey]) {
        if !directed.is_empty() {
            self.each(|listener| listener.on_directed_edges_deleted(directed));
        }
        if !undirected.is_empty() {
            self.each(|listener| listener.on_undirected_edges_deleted(undirected));
        }
    }

    pub(crate) fn weighted_changed(&mut self, weighted: bool) {
        self.each(|listener| listener.on_weighted_changed(weighted));
    }

    pub(crate) fn directed_changed(&mut self, directed: bool) {
        self.each(|listener| listener.on_directed_changed(directed));
    }

    pub(crate) fn loaded(&mut self) {
        self.each(|listener| listener.on_loaded());
    }

    fn each(&mut self, mut notify: impl FnMut(&mut dyn GraphListener)) {
        for (_, listener) in &mut self.listeners {
            notify(listener.as_mut());
        }
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
