//! Wall-clock instrumentation for the sort engine
//!
//! Timings use [`Instant`], which is monotonic: system clock adjustments
//! during a sort never produce negative or skewed phase durations.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Measures one phase of an algorithm
///
/// # Example
/// ```
/// use sort_tracer_core_rs::PhaseTimer;
///
/// let timer = PhaseTimer::start();
/// let elapsed = timer.elapsed_ms();
/// assert!(elapsed >= 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PhaseTimer {
    started: Instant,
}

impl PhaseTimer {
    /// Read the monotonic clock and start measuring
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Fractional milliseconds since [`PhaseTimer::start`]
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

/// Phase durations reported by a sort, in fractional milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhaseTimings {
    /// Heap construction phase (heap sort only)
    pub build_heap_ms: Option<f64>,

    /// Sorting phase (extraction for heap sort, the whole run otherwise)
    pub sort_ms: f64,

    /// Sum of all phases
    pub total_ms: f64,
}

impl PhaseTimings {
    /// Timings for a single-phase algorithm
    pub fn single(sort_ms: f64) -> Self {
        Self {
            build_heap_ms: None,
            sort_ms,
            total_ms: sort_ms,
        }
    }

    /// Timings for an algorithm with a separate build phase
    pub fn with_build(build_heap_ms: f64, sort_ms: f64) -> Self {
        Self {
            build_heap_ms: Some(build_heap_ms),
            sort_ms,
            total_ms: build_heap_ms + sort_ms,
        }
    }
}
