//! Trace recorder - drives the queue and the sort engine from scripts
//!
//! Implements the synchronous `Idle → Running → Finished` loop that executes
//! one operation per step and logs every observable state.
//!
//! See `engine.rs` for the recorder and `transcript.rs` for rendering.

pub mod engine;
pub mod transcript;

// Re-export main types for convenience
pub use engine::{
    resolve_script, run_configured_trace, trace_sort, QueueOp, QueueTraceConfig,
    QueueTraceSession, RecorderStatus, SortTrace, SortTraceConfig, TraceError, TraceRecorder,
    TraceRequest, EXTRACT_SENTINEL,
};
pub use transcript::{queue_transcript, sort_transcript, Transcript};
