//! Heap Sort
//!
//! Two phases, each timed separately:
//!
//! ```text
//! BuildingHeap: for node = (n-2)/2 down to 0 → heapify(node, n-1)
//! Extracting:   for end = n-1 down to 1     → swap(0, end); heapify(0, end-1)
//! Done:         heap region is a single element
//! ```
//!
//! For an ascending sort the heap is a max-heap (the element ranked last sits
//! at the root and is moved to the tail); a descending sort uses a min-heap.
//!
//! # Snapshots
//!
//! - Build phase: the full array after every heapify call except the first,
//!   numbered from 1. That gives `internal_nodes - 1` snapshots.
//! - Extraction phase: the unsorted prefix after every extraction, numbered
//!   by iteration. That gives `n - 1` snapshots.

use super::{SortAlgorithm, SortAlgorithmKind, SortError, SortPhase, SortReport, SortStep};
use crate::core::order::Order;
use crate::core::time::{PhaseTimer, PhaseTimings};
use crate::core::value::{ensure_comparable, Comparable, Incomparable};

/// Instrumented heap sort
///
/// # Example
///
/// ```
/// use sort_tracer_core_rs::sorting::{HeapSort, SortAlgorithm};
/// use sort_tracer_core_rs::Order;
///
/// let mut data = vec![4, 10, 3, 5, 1];
/// let report = HeapSort.sort(&mut data, Order::Ascending).unwrap();
///
/// assert_eq!(data, vec![1, 3, 4, 5, 10]);
/// assert_eq!(report.build_steps(), 1);
/// assert_eq!(report.extraction_steps(), 4);
/// assert!(report.timings.build_heap_ms.is_some());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl SortAlgorithm for HeapSort {
    fn kind(&self) -> SortAlgorithmKind {
        SortAlgorithmKind::HeapSort
    }

    fn sort<T: Comparable + Clone>(
        &self,
        data: &mut [T],
        order: Order,
    ) -> Result<SortReport<T>, SortError> {
        ensure_comparable(data)?;

        let n = data.len();
        let mut steps = Vec::new();

        // Phase 1: BuildingHeap
        let timer = PhaseTimer::start();
        if n >= 2 {
            let last_internal = (n - 2) / 2;
            for (calls, node) in (0..=last_internal).rev().enumerate() {
                heapify(data, node, n - 1, order)?;
                // The first subtree is not shown on its own
                if calls > 0 {
                    steps.push(SortStep {
                        phase: SortPhase::BuildingHeap,
                        index: calls,
                        state: data.to_vec(),
                    });
                }
            }
        }
        let build_ms = timer.elapsed_ms();

        // Phase 2: Extracting
        let timer = PhaseTimer::start();
        for (iteration, end) in (1..n).rev().enumerate() {
            data.swap(0, end);
            heapify(data, 0, end - 1, order)?;
            steps.push(SortStep {
                phase: SortPhase::Extracting,
                index: iteration + 1,
                state: data[..end].to_vec(),
            });
        }
        let sort_ms = timer.elapsed_ms();

        Ok(SortReport {
            algorithm: self.kind(),
            order,
            features: self.features(),
            steps,
            timings: PhaseTimings::with_build(build_ms, sort_ms),
        })
    }
}

/// Sift `data[node]` down within `data[..=last]`
///
/// The root of the heap is the element ranked last by `order`. Between two
/// children the right one wins only if the left strictly ranks before it, so
/// equal children resolve to the left.
fn heapify<T: Comparable>(
    data: &mut [T],
    mut node: usize,
    last: usize,
    order: Order,
) -> Result<(), Incomparable> {
    while 2 * node + 1 <= last {
        let mut child = 2 * node + 1;
        if child < last && order.ranks_before(data[child].try_compare(&data[child + 1])?) {
            child += 1;
        }

        if !order.ranks_before(data[node].try_compare(&data[child])?) {
            break;
        }
        data.swap(node, child);
        node = child;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::Element;
    use std::cmp::Ordering;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Tagged {
        rank: i64,
        tag: char,
    }

    impl Comparable for Tagged {
        fn try_compare(&self, other: &Self) -> Result<Ordering, Incomparable> {
            Ok(self.rank.cmp(&other.rank))
        }
    }

    fn is_heap(data: &[i64], order: Order) -> bool {
        (1..data.len()).all(|child| {
            let parent = (child - 1) / 2;
            !order.ranks_before(data[parent].cmp(&data[child]))
        })
    }

    #[test]
    fn test_heapify_builds_max_heap_for_ascending() {
        let mut data = vec![1, 5, 3, 9, 7, 2];
        for node in (0..=2).rev() {
            heapify(&mut data, node, 5, Order::Ascending).unwrap();
        }
        assert!(is_heap(&data, Order::Ascending));
        assert_eq!(data[0], 9);
    }

    #[test]
    fn test_heapify_builds_min_heap_for_descending() {
        let mut data = vec![9, 5, 3, 1, 7, 2];
        for node in (0..=2).rev() {
            heapify(&mut data, node, 5, Order::Descending).unwrap();
        }
        assert!(is_heap(&data, Order::Descending));
        assert_eq!(data[0], 1);
    }

    #[test]
    fn test_equal_children_prefer_left() {
        let mut data = vec![
            Tagged { rank: 0, tag: 'r' },
            Tagged { rank: 5, tag: 'a' },
            Tagged { rank: 5, tag: 'b' },
        ];
        heapify(&mut data, 0, 2, Order::Ascending).unwrap();

        let tags: Vec<char> = data.iter().map(|item| item.tag).collect();
        assert_eq!(tags, vec!['a', 'r', 'b']);
    }

    #[test]
    fn test_trace_for_known_input() {
        let mut data = vec![5, 3, 8, 1, 9, 2];
        let report = HeapSort.sort(&mut data, Order::Ascending).unwrap();

        assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);

        // last_internal = 2 → three heapify calls, two snapshots
        let build: Vec<_> = report.steps_in(SortPhase::BuildingHeap).collect();
        assert_eq!(build.len(), 2);
        assert_eq!(build[0].index, 1);
        assert_eq!(build[0].state, vec![5, 9, 8, 1, 3, 2]);
        assert_eq!(build[1].state, vec![9, 5, 8, 1, 3, 2]);

        let extraction: Vec<_> = report.steps_in(SortPhase::Extracting).collect();
        assert_eq!(extraction.len(), 5);
        assert_eq!(extraction[0].index, 1);
        assert_eq!(extraction[0].state, vec![8, 5, 2, 1, 3]);
        assert_eq!(extraction[4].state, vec![1]);
    }

    #[test]
    fn test_descending_sort() {
        let mut data = vec![2, 7, 1, 8, 2, 8];
        HeapSort.sort(&mut data, Order::Descending).unwrap();
        assert_eq!(data, vec![8, 8, 7, 2, 2, 1]);
    }

    #[test]
    fn test_trivial_inputs_record_nothing() {
        let mut empty: Vec<i64> = vec![];
        let report = HeapSort.sort(&mut empty, Order::Ascending).unwrap();
        assert!(report.steps.is_empty());

        let mut single = vec![42];
        let report = HeapSort.sort(&mut single, Order::Ascending).unwrap();
        assert!(report.steps.is_empty());
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_two_elements() {
        let mut data = vec![1, 2];
        let report = HeapSort.sort(&mut data, Order::Ascending).unwrap();
        assert_eq!(data, vec![1, 2]);
        assert_eq!(report.build_steps(), 0);
        assert_eq!(report.extraction_steps(), 1);
    }

    #[test]
    fn test_type_mismatch_leaves_data_untouched() {
        let mut data = vec![Element::Int(3), Element::from("a"), Element::Int(1)];
        let before = data.clone();

        let err = HeapSort.sort(&mut data, Order::Ascending).unwrap_err();
        assert_eq!(err.kind(), "TypeMismatchError");
        assert_eq!(data, before);
    }
}
