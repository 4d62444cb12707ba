//! Tests for the bounded priority queue
//!
//! CRITICAL: occupied slots must stay ordered, and the capacity contract is
//! enforced on every insert.

use proptest::prelude::*;
use sort_tracer_core_rs::{Element, Order, PriorityQueue, QueueError};

fn filled(values: &[i64], order: Order) -> PriorityQueue<i64> {
    let mut queue = PriorityQueue::new(values.len().max(1), order).unwrap();
    for value in values {
        queue.insert(*value).unwrap();
    }
    queue
}

#[test]
fn test_descending_inserts_produce_ordered_prefix() {
    let queue = filled(&[3, 1, 4, 1, 5], Order::Descending);
    assert_eq!(queue.as_slice(), &[5, 4, 3, 1, 1]);
    assert_eq!(queue.peek(), Some(&5));
}

#[test]
fn test_capacity_contract() {
    let mut queue = filled(&[7, 8, 9], Order::Descending);
    assert!(queue.is_full());

    let result = queue.insert(10);
    assert_eq!(result, Err(QueueError::CapacityExceeded { capacity: 3 }));
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_extract_from_new_queue_fails() {
    let mut queue: PriorityQueue<i64> = PriorityQueue::new(4, Order::Descending).unwrap();
    assert_eq!(queue.extract_extreme(), Err(QueueError::EmptyContainer));
}

#[test]
fn test_invalid_configuration() {
    let result: Result<PriorityQueue<i64>, _> = PriorityQueue::new(0, Order::Ascending);
    let err = result.unwrap_err();
    assert_eq!(err.kind(), "InvalidConfigurationError");
}

#[test]
fn test_end_to_end_script() {
    let mut queue = PriorityQueue::new(5, Order::Descending).unwrap();
    for token in ["5", "3", "8", "1"] {
        queue.insert(Element::from(token)).unwrap();
    }
    assert_eq!(queue.to_string(), "8 5 3 1");

    let extracted = queue.extract_extreme().unwrap();
    assert_eq!(extracted, Element::from("8"));
    assert_eq!(queue.to_string(), "5 3 1");

    queue.insert(Element::from("2")).unwrap();
    assert_eq!(queue.to_string(), "5 3 2 1");
}

#[test]
fn test_extraction_drains_in_priority_order() {
    let mut queue = filled(&[4, 9, 2, 7], Order::Ascending);
    let mut drained = Vec::new();
    while !queue.is_empty() {
        drained.push(queue.extract_extreme().unwrap());
    }
    assert_eq!(drained, vec![2, 4, 7, 9]);
}

#[test]
fn test_slot_freed_by_extraction_can_be_reused() {
    let mut queue = filled(&[1, 2], Order::Descending);
    queue.extract_extreme().unwrap();
    queue.insert(5).unwrap();
    assert_eq!(queue.as_slice(), &[5, 1]);
    assert!(queue.insert(0).is_err());
}

proptest! {
    #[test]
    fn prop_prefix_monotonic_after_every_insert(
        values in prop::collection::vec(-50i64..50, 1..40),
        descending in any::<bool>(),
    ) {
        let order = if descending { Order::Descending } else { Order::Ascending };
        let mut queue = PriorityQueue::new(values.len(), order).unwrap();

        for value in &values {
            queue.insert(*value).unwrap();
            let slice = queue.as_slice();
            for pair in slice.windows(2) {
                prop_assert!(!order.ranks_before(pair[1].cmp(&pair[0])));
            }
        }
        prop_assert!(queue.is_full());
    }

    #[test]
    fn prop_drain_matches_sorted_input(values in prop::collection::vec(any::<i32>(), 1..30)) {
        let mut queue = PriorityQueue::new(values.len(), Order::Descending).unwrap();
        for value in &values {
            queue.insert(*value).unwrap();
        }

        let mut expected = values.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));

        let mut drained = Vec::new();
        while let Ok(value) = queue.extract_extreme() {
            drained.push(value);
        }
        prop_assert_eq!(drained, expected);
    }
}
