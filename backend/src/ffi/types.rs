//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList, etc.)

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::orchestrator::{QueueTraceConfig, SortTraceConfig, TraceRequest, Transcript};
use crate::{Element, ElementType, Order, SortAlgorithmKind};

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with clear error messages.
///
/// # Errors
/// Returns PyValueError if the field is missing or the conversion fails.
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("Missing required field '{}'", key)))?
        .extract()
}

/// Extract an optional field from a Python dict.
///
/// Missing keys and `None` values both map to `None`.
fn extract_optional<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Option<T>>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => Ok(Some(value.extract()?)),
        _ => Ok(None),
    }
}

/// Convert a Python scalar (int, float or str) into an element
fn element_from_py(value: &Bound<'_, PyAny>) -> PyResult<Element> {
    if let Ok(i) = value.extract::<i64>() {
        return Ok(Element::Int(i));
    }
    if let Ok(x) = value.extract::<f64>() {
        return Ok(Element::Float(x));
    }
    value.extract::<String>().map(Element::Text).map_err(|_| {
        PyValueError::new_err(format!(
            "Unsupported element {}: expected int, float or str",
            value
        ))
    })
}

fn elements_from_py(list: &Bound<'_, PyList>) -> PyResult<Vec<Element>> {
    list.iter().map(|item| element_from_py(&item)).collect()
}

fn parse_field<T: std::str::FromStr>(value: Option<String>, default: T) -> PyResult<T>
where
    T::Err: std::fmt::Display,
{
    match value {
        Some(text) => text
            .parse()
            .map_err(|e: T::Err| PyValueError::new_err(e.to_string())),
        None => Ok(default),
    }
}

fn parse_element_type(value: Option<String>) -> PyResult<Option<ElementType>> {
    value
        .map(|text| {
            text.parse::<ElementType>()
                .map_err(|e| PyValueError::new_err(e.to_string()))
        })
        .transpose()
}

// ========================================================================
// Request parsing
// ========================================================================

/// Build a [`TraceRequest`] from a Python dict
///
/// ```python
/// {"kind": "queue", "order": "max", "capacity": 5, "script": ["5", "3", "*"]}
/// {"kind": "sort", "algorithm": "heapsort", "initial_sequence": [5, 3, 8], "order": "ascending"}
/// ```
pub fn parse_trace_request(dict: &Bound<'_, PyDict>) -> PyResult<TraceRequest> {
    let kind: String = extract_required(dict, "kind")?;

    match kind.as_str() {
        "queue" => {
            let script: Bound<'_, PyList> = extract_required(dict, "script")?;
            Ok(TraceRequest::Queue(QueueTraceConfig {
                order: parse_field(extract_optional(dict, "order")?, Order::Descending)?,
                capacity: extract_optional(dict, "capacity")?,
                script: elements_from_py(&script)?,
                element_type: parse_element_type(extract_optional(dict, "element_type")?)?,
            }))
        }
        "sort" => {
            let sequence: Bound<'_, PyList> = extract_required(dict, "initial_sequence")?;
            let algorithm: String = extract_required(dict, "algorithm")?;
            Ok(TraceRequest::Sort(SortTraceConfig {
                initial_sequence: elements_from_py(&sequence)?,
                algorithm: algorithm
                    .parse::<SortAlgorithmKind>()
                    .map_err(|e| PyValueError::new_err(e.to_string()))?,
                element_type: parse_element_type(extract_optional(dict, "element_type")?)?,
                order: parse_field(extract_optional(dict, "order")?, Order::Ascending)?,
            }))
        }
        other => Err(PyValueError::new_err(format!(
            "Unknown trace kind '{}': expected 'queue' or 'sort'",
            other
        ))),
    }
}

/// Convert a transcript into `{"lines": [...], "summary": [...], "digest": str}`
pub fn transcript_to_py(py: Python<'_>, transcript: &Transcript) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("lines", transcript.lines.clone())?;
    dict.set_item("summary", transcript.summary.clone())?;
    dict.set_item("digest", transcript.digest())?;
    Ok(dict.unbind())
}
