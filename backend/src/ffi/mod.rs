//! Python bindings
//!
//! Exposes the trace recorder to Python as `run_trace(config: dict) -> dict`.

pub mod tracer;
pub mod types;
