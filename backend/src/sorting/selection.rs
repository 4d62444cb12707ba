//! Selection Sort (adjacent-swap variant)
//!
//! Despite the name this walks each element backwards through the sorted
//! prefix by adjacent transpositions, insertion-sort style:
//!
//! ```text
//! for i in 1..n:
//!     j = i
//!     while j > 0 and data[j] ranks before data[j-1]:
//!         swap(j, j-1); record snapshot; j -= 1
//! ```
//!
//! One snapshot is recorded per swap, never per comparison, so the number of
//! snapshots equals the number of inversions in the input.

use super::{SortAlgorithm, SortAlgorithmKind, SortError, SortPhase, SortReport, SortStep};
use crate::core::order::Order;
use crate::core::time::{PhaseTimer, PhaseTimings};
use crate::core::value::{ensure_comparable, Comparable};

/// Instrumented adjacent-swap sort
///
/// # Example
///
/// ```
/// use sort_tracer_core_rs::sorting::{SelectionSort, SortAlgorithm};
/// use sort_tracer_core_rs::Order;
///
/// let mut data = vec![3, 1, 2];
/// let report = SelectionSort.sort(&mut data, Order::Ascending).unwrap();
///
/// assert_eq!(data, vec![1, 2, 3]);
/// assert_eq!(report.swap_steps(), 2);
/// assert_eq!(report.steps[0].state, vec![1, 3, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn kind(&self) -> SortAlgorithmKind {
        SortAlgorithmKind::SelectionSort
    }

    fn sort<T: Comparable + Clone>(
        &self,
        data: &mut [T],
        order: Order,
    ) -> Result<SortReport<T>, SortError> {
        ensure_comparable(data)?;

        let mut steps = Vec::new();
        let mut swaps = 0;

        let timer = PhaseTimer::start();
        for i in 1..data.len() {
            let mut j = i;
            while j > 0 && order.ranks_before(data[j].try_compare(&data[j - 1])?) {
                data.swap(j, j - 1);
                swaps += 1;
                steps.push(SortStep {
                    phase: SortPhase::Scanning,
                    index: swaps,
                    state: data.to_vec(),
                });
                j -= 1;
            }
        }
        let sort_ms = timer.elapsed_ms();

        Ok(SortReport {
            algorithm: self.kind(),
            order,
            features: self.features(),
            steps,
            timings: PhaseTimings::single(sort_ms),
        })
    }
}
