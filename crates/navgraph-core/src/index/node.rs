//! Node arena.
//!
//! Nodes live in a single growable `Vec` and refer to each other by
//! position, so adjacency lists hold plain indices instead of references.

/// Unique identifier for a node in the graph, assigned in insertion order.
pub type NodeId = usize;

/// An inserted point and its per-layer adjacency lists.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// The point itself. Never mutated after insertion.
    pub(crate) data: T,
    /// `layers[l]` holds the neighbors on layer `l`, for `l` in `0..=level`.
    pub(crate) layers: Vec<Vec<NodeId>>,
}

impl<T> Node<T> {
    /// Creates a node present on layers `0..=level`, with no edges yet.
    pub(crate) fn new(data: T, level: usize) -> Self {
        Self {
            data,
            layers: vec![Vec::new(); level + 1],
        }
    }

    /// Highest layer this node lives on.
    #[must_use]
    pub fn level(&self) -> usize {
        self.layers.len() - 1
    }

    /// The stored point.
    #[must_use]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Neighbors on `layer`; empty above the node's level.
    #[must_use]
    pub fn neighbors(&self, layer: usize) -> &[NodeId] {
        self.layers.get(layer).map_or(&[], Vec::as_slice)
    }
}

/// Append-only arena of nodes.
#[derive(Debug, Clone)]
pub(crate) struct NodeStore<T> {
    nodes: Vec<Node<T>>,
}

impl<T> NodeStore<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a node and returns its id.
    pub(crate) fn push(&mut self, node: Node<T>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id)
    }

    /// Point of a node known to exist.
    pub(crate) fn data(&self, id: NodeId) -> &T {
        &self.nodes[id].data
    }

    /// Neighbors of `id` on `layer`; empty for unknown nodes or layers.
    pub(crate) fn neighbors(&self, id: NodeId, layer: usize) -> &[NodeId] {
        self.nodes.get(id).map_or(&[], |node| node.neighbors(layer))
    }

    /// Mutable adjacency list of `id` on `layer`, if the node lives there.
    pub(crate) fn links_mut(&mut self, id: NodeId, layer: usize) -> Option<&mut Vec<NodeId>> {
        self.nodes.get_mut(id).and_then(|node| node.layers.get_mut(layer))
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Node<T>> {
        self.nodes.iter()
    }
}
