//! Tests for candidate ordering.

use super::candidate::Candidate;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[test]
fn test_orders_by_distance_first() {
    let near = Candidate::new(9, 1.0);
    let far = Candidate::new(0, 2.0);
    assert_eq!(near.cmp(&far), Ordering::Less);
    assert!(far > near);
}

#[test]
fn test_ties_break_by_id() {
    let first = Candidate::new(1, 1.5);
    let second = Candidate::new(3, 1.5);
    assert!(first < second);
    assert_ne!(first, second);
    assert_eq!(first, Candidate::new(1, 1.5));
}

#[test]
fn test_nan_sorts_after_everything() {
    let nan = Candidate::new(0, f32::NAN);
    let inf = Candidate::new(1, f32::INFINITY);
    assert!(nan > inf);
}

#[test]
fn test_heaps_pop_in_expected_order() {
    let items = [
        Candidate::new(4, 3.0),
        Candidate::new(2, 1.0),
        Candidate::new(0, 3.0),
        Candidate::new(7, 0.5),
    ];

    let mut max_heap: BinaryHeap<Candidate> = items.iter().copied().collect();
    let popped: Vec<usize> = std::iter::from_fn(|| max_heap.pop().map(|c| c.id)).collect();
    assert_eq!(popped, vec![4, 0, 2, 7]);

    let mut min_heap: BinaryHeap<Reverse<Candidate>> = items.iter().copied().map(Reverse).collect();
    let popped: Vec<usize> = std::iter::from_fn(|| min_heap.pop().map(|c| c.0.id)).collect();
    assert_eq!(popped, vec![7, 2, 0, 4]);
}
