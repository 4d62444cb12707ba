//! Sort Tracer Core - Rust Engine
//!
//! In-memory ordered containers and sorting algorithms instrumented for
//! step-by-step display.
//!
//! # Architecture
//!
//! - **core**: Ordering direction, comparable elements, phase timing
//! - **models**: Bounded priority queue and the trace event log
//! - **sorting**: Heap sort and selection sort with recorded snapshots
//! - **orchestrator**: Trace recorder and transcript rendering
//!
//! # Critical Invariants
//!
//! 1. Algorithms never print; they return data and the recorder renders it
//! 2. All configuration is passed explicitly (no globals, files or env vars)
//! 3. Contract violations are errors, never silently ignored
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod core;
pub mod models;
pub mod orchestrator;
pub mod sorting;

// Re-exports for convenience
pub use crate::core::order::{Order, UnknownOrder};
pub use crate::core::time::{PhaseTimer, PhaseTimings};
pub use crate::core::value::{
    ensure_comparable, parse_sequence, split_sequence, Comparable, Element, ElementType,
    Incomparable, ValueError,
};
pub use models::{
    event::{EventLog, TraceEvent},
    queue::{PriorityQueue, QueueError},
};
pub use orchestrator::{
    run_configured_trace, QueueTraceConfig, QueueTraceSession, RecorderStatus, SortTraceConfig,
    TraceError, TraceRecorder, TraceRequest, Transcript,
};
pub use sorting::{
    sort_with, HeapSort, SelectionSort, SortAlgorithm, SortAlgorithmKind, SortError,
    SortFeatures, SortPhase, SortReport, SortStep,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn sort_tracer_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::tracer::run_trace, m)?)?;
    Ok(())
}
