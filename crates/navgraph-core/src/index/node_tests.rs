//! Tests for the node arena.

use super::node::{Node, NodeId, NodeStore};

#[test]
fn test_node_has_layers_up_to_level() {
    let node = Node::new(vec![1.0_f32], 3);
    assert_eq!(node.level(), 3);
    for layer in 0..=3 {
        assert!(node.neighbors(layer).is_empty());
    }
}

#[test]
fn test_node_level_zero_still_has_bottom_list() {
    let node = Node::new(vec![1.0_f32], 0);
    assert_eq!(node.level(), 0);
    assert_eq!(node.layers.len(), 1);
}

#[test]
fn test_neighbors_above_level_is_empty() {
    let node = Node::new((), 1);
    assert!(node.neighbors(5).is_empty());
}

#[test]
fn test_store_assigns_sequential_ids() {
    let mut store = NodeStore::with_capacity(4);
    assert!(store.is_empty());

    let ids: Vec<NodeId> = (0..4).map(|i| store.push(Node::new(i, 0))).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
    assert_eq!(store.len(), 4);
    assert_eq!(*store.data(2), 2);
}

#[test]
fn test_store_links_mut_respects_level() {
    let mut store = NodeStore::with_capacity(2);
    let a = store.push(Node::new('a', 1));
    let b = store.push(Node::new('b', 0));

    store.links_mut(a, 1).unwrap().push(b);
    assert_eq!(store.neighbors(a, 1), &[b]);

    // b only lives on layer 0
    assert!(store.links_mut(b, 1).is_none());
    assert!(store.links_mut(9, 0).is_none());
    assert!(store.neighbors(9, 0).is_empty());
}

#[test]
fn test_store_reserve_grows_capacity() {
    let mut store: NodeStore<u8> = NodeStore::with_capacity(1);
    store.reserve(64);
    assert!(store.capacity() >= 64);
}
