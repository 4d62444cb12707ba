//! PyO3 wrapper for the trace recorder
//!
//! # Example (from Python)
//!
//! ```python
//! from sort_tracer_core_rs import run_trace
//!
//! result = run_trace({"kind": "queue", "order": "max", "script": ["5", "3", "8", "*"]})
//! print("\n".join(result["lines"]))
//! ```

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{parse_trace_request, transcript_to_py};
use crate::orchestrator::run_configured_trace;

/// Run a queue or sort trace described by `config`
///
/// # Errors
///
/// Raises ValueError for malformed configuration and RuntimeError when the
/// trace halts; the message carries the failing step and error kind.
#[pyfunction]
pub fn run_trace(py: Python<'_>, config: &Bound<'_, PyDict>) -> PyResult<Py<PyDict>> {
    let request = parse_trace_request(config)?;

    let transcript = run_configured_trace(&request)
        .map_err(|e| PyRuntimeError::new_err(format!("{}: {}", e.kind(), e)))?;

    transcript_to_py(py, &transcript)
}
