//! Data structures driven by the trace recorder

pub mod event;
pub mod queue;

// Re-exports
pub use event::{EventLog, TraceEvent};
pub use queue::{PriorityQueue, QueueError};
