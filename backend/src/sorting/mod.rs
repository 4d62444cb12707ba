//! Sort Engine
//!
//! In-place sorting algorithms instrumented for step-by-step display.
//!
//! # Overview
//!
//! Each algorithm sorts a caller-owned slice in place and returns a
//! [`SortReport`]: the ordered snapshots of every structurally meaningful
//! intermediate state, the algorithm's descriptive features and the
//! wall-clock duration of each phase.
//!
//! Available algorithms:
//! 1. **HeapSort**: build a heap, then repeatedly move the root to the tail
//! 2. **SelectionSort**: walk each element backwards by adjacent swaps
//!
//! # Algorithm Interface
//!
//! ```rust
//! use sort_tracer_core_rs::sorting::{HeapSort, SortAlgorithm};
//! use sort_tracer_core_rs::Order;
//!
//! let mut data = vec![5, 3, 8, 1];
//! let report = HeapSort.sort(&mut data, Order::Ascending).unwrap();
//!
//! assert_eq!(data, vec![1, 3, 5, 8]);
//! assert_eq!(report.extraction_steps(), 3);
//! ```
//!
//! # Critical Invariants
//!
//! 1. **In place**: the only copies made are the recorded snapshots
//! 2. **Validated first**: incomparable input is rejected before any swap
//! 3. **Deterministic**: the same input always yields the same snapshots

use crate::core::order::Order;
use crate::core::time::PhaseTimings;
use crate::core::value::{Comparable, Incomparable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod heap;
pub mod selection;

pub use heap::HeapSort;
pub use selection::SelectionSort;

/// Errors raised by the sort engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("Unsupported sorting algorithm '{0}': expected heapsort or selectionsort")]
    UnsupportedAlgorithm(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(#[from] Incomparable),
}

impl SortError {
    /// Name of the error kind, as reported in failed traces
    pub fn kind(&self) -> &'static str {
        match self {
            SortError::UnsupportedAlgorithm(_) => "UnsupportedAlgorithmError",
            SortError::TypeMismatch(_) => "TypeMismatchError",
        }
    }
}

/// Algorithm selector used by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum SortAlgorithmKind {
    #[serde(rename = "heapsort")]
    HeapSort,
    #[serde(rename = "selectionsort")]
    SelectionSort,
}

impl SortAlgorithmKind {
    /// Title used in transcripts
    pub fn title(self) -> &'static str {
        match self {
            SortAlgorithmKind::HeapSort => "Heapsort",
            SortAlgorithmKind::SelectionSort => "Selectionsort",
        }
    }
}

impl fmt::Display for SortAlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortAlgorithmKind::HeapSort => write!(f, "heapsort"),
            SortAlgorithmKind::SelectionSort => write!(f, "selectionsort"),
        }
    }
}

impl FromStr for SortAlgorithmKind {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heapsort" | "heap_sort" | "heap" => Ok(SortAlgorithmKind::HeapSort),
            "selectionsort" | "selection_sort" | "selection" => {
                Ok(SortAlgorithmKind::SelectionSort)
            }
            _ => Err(SortError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for SortAlgorithmKind {
    type Error = SortError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Descriptive metadata printed alongside a sort
///
/// These are static labels carried for display, not a computed analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortFeatures {
    pub best_case: &'static str,
    pub average_case: &'static str,
    pub worst_case: &'static str,
    pub memory: &'static str,
    pub stable: bool,
}

impl SortFeatures {
    /// Labels shown for both heap sort and selection sort
    pub const IN_PLACE_N_LOG_N: SortFeatures = SortFeatures {
        best_case: "n log n",
        average_case: "n log n",
        worst_case: "n log n",
        memory: "1",
        stable: false,
    };
}

/// Phase in which a snapshot was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortPhase {
    /// Heap sort: sifting internal nodes into a heap
    BuildingHeap,
    /// Heap sort: moving the root behind the shrinking heap region
    Extracting,
    /// Selection sort: walking an element backwards
    Scanning,
}

/// One recorded intermediate state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortStep<T> {
    pub phase: SortPhase,

    /// 1-based counter within the phase (heap number, iteration or swap count)
    pub index: usize,

    /// Visible region after the step
    pub state: Vec<T>,
}

/// Everything a sort produced besides the sorted slice itself
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortReport<T> {
    pub algorithm: SortAlgorithmKind,
    pub order: Order,
    pub features: SortFeatures,
    pub steps: Vec<SortStep<T>>,
    pub timings: PhaseTimings,
}

impl<T> SortReport<T> {
    /// Snapshots recorded in `phase`
    pub fn steps_in(&self, phase: SortPhase) -> impl Iterator<Item = &SortStep<T>> {
        self.steps.iter().filter(move |step| step.phase == phase)
    }

    /// Number of heap-construction snapshots
    pub fn build_steps(&self) -> usize {
        self.steps_in(SortPhase::BuildingHeap).count()
    }

    /// Number of heap-extraction snapshots
    pub fn extraction_steps(&self) -> usize {
        self.steps_in(SortPhase::Extracting).count()
    }

    /// Number of adjacent-swap snapshots
    pub fn swap_steps(&self) -> usize {
        self.steps_in(SortPhase::Scanning).count()
    }
}

/// An instrumented in-place sort
pub trait SortAlgorithm {
    /// Selector identifying this algorithm
    fn kind(&self) -> SortAlgorithmKind;

    /// Static feature labels
    fn features(&self) -> SortFeatures {
        SortFeatures::IN_PLACE_N_LOG_N
    }

    /// Sort `data` in place by `order`, recording every intermediate state
    ///
    /// # Errors
    /// `TypeMismatch` if two elements cannot be compared. Validation runs
    /// before the first swap, so `data` is untouched on error.
    fn sort<T: Comparable + Clone>(
        &self,
        data: &mut [T],
        order: Order,
    ) -> Result<SortReport<T>, SortError>;
}

/// Sort `data` with the algorithm selected by `kind`
///
/// # Example
/// ```
/// use sort_tracer_core_rs::sorting::{sort_with, SortAlgorithmKind};
/// use sort_tracer_core_rs::Order;
///
/// let mut data = vec![5, 3, 8, 1];
/// let report = sort_with(SortAlgorithmKind::SelectionSort, &mut data, Order::Descending).unwrap();
/// assert_eq!(data, vec![8, 5, 3, 1]);
/// assert_eq!(report.swap_steps(), 2);
/// ```
pub fn sort_with<T: Comparable + Clone>(
    kind: SortAlgorithmKind,
    data: &mut [T],
    order: Order,
) -> Result<SortReport<T>, SortError> {
    match kind {
        SortAlgorithmKind::HeapSort => HeapSort.sort(data, order),
        SortAlgorithmKind::SelectionSort => SelectionSort.sort(data, order),
    }
}
