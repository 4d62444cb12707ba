//! Trace Recorder Engine
//!
//! Drives the priority queue or the sort engine from a scripted request and
//! records every observable state in an [`EventLog`]:
//!
//! ```text
//! TraceRequest ──► TraceRecorder (Idle → Running → Finished | Failed)
//!                     │
//!                     ├─ queue: QueueTraceSession, one operation per step
//!                     └─ sort:  one full sort via the sort engine
//!                     │
//!                     ▼
//!                  EventLog ──► Transcript (lines + summary)
//! ```
//!
//! Execution is synchronous and strictly in script order. A failing
//! operation halts the session: nothing after it is executed or logged
//! except the `Failed` event naming the step.
//!
//! # Example
//!
//! ```rust
//! use sort_tracer_core_rs::orchestrator::{run_configured_trace, QueueTraceConfig, TraceRequest};
//! use sort_tracer_core_rs::{Element, Order};
//!
//! let request = TraceRequest::Queue(QueueTraceConfig {
//!     order: Order::Descending,
//!     capacity: Some(5),
//!     script: ["5", "3", "8", "1", "*", "2"].iter().map(|t| Element::from(*t)).collect(),
//!     element_type: None,
//! });
//!
//! let transcript = run_configured_trace(&request).unwrap();
//! assert_eq!(transcript.lines[3], "\t1: 8 5 3 1");
//! assert_eq!(transcript.lines[5], "\t2: 5 3 2 1");
//! ```

use crate::core::order::Order;
use crate::core::value::{Element, ElementType, ValueError};
use crate::models::event::{EventLog, TraceEvent};
use crate::models::queue::{PriorityQueue, QueueError};
use crate::orchestrator::transcript::{self, Transcript};
use crate::sorting::{sort_with, SortAlgorithmKind, SortError, SortPhase, SortReport};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Script token that extracts instead of inserting
pub const EXTRACT_SENTINEL: &str = "*";

// ============================================================================
// Configuration Types
// ============================================================================

/// Priority queue demo configuration
///
/// # Fields
///
/// * `order` - `descending` for a max-queue, `ascending` for a min-queue
/// * `capacity` - number of slots; defaults to the script length
/// * `script` - tokens to insert, with `*` meaning extract
/// * `element_type` - when set, every non-sentinel token is re-parsed as this type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueTraceConfig {
    #[serde(default = "default_queue_order")]
    pub order: Order,

    #[serde(default)]
    pub capacity: Option<usize>,

    pub script: Vec<Element>,

    #[serde(default)]
    pub element_type: Option<ElementType>,
}

fn default_queue_order() -> Order {
    Order::Descending
}

/// Sort demo configuration
///
/// # Fields
///
/// * `initial_sequence` - values to sort
/// * `algorithm` - `heapsort` or `selectionsort`
/// * `element_type` - when set, every value is re-parsed as this type
/// * `order` - output order, ascending by default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortTraceConfig {
    pub initial_sequence: Vec<Element>,

    pub algorithm: SortAlgorithmKind,

    #[serde(default)]
    pub element_type: Option<ElementType>,

    #[serde(default = "default_sort_order")]
    pub order: Order,
}

fn default_sort_order() -> Order {
    Order::Ascending
}

/// Everything the CLI layer can ask the recorder to run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceRequest {
    Queue(QueueTraceConfig),
    Sort(SortTraceConfig),
}

// ============================================================================
// Errors
// ============================================================================

/// Trace failures, reported with the 1-based step that caused them
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid entry at step {index}: {source}")]
    InvalidEntry { index: usize, source: ValueError },

    #[error("Step {index} ('{token}') failed: {source}")]
    Operation {
        index: usize,
        token: String,
        source: QueueError,
    },

    #[error("Sort failed: {0}")]
    Sort(#[from] SortError),
}

impl TraceError {
    /// Name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            TraceError::InvalidConfiguration(_) => "InvalidConfigurationError",
            TraceError::InvalidEntry { .. } => "InvalidEntryError",
            TraceError::Operation { source, .. } => source.kind(),
            TraceError::Sort(source) => source.kind(),
        }
    }

    /// Step that failed, if the failure belongs to one
    pub fn step(&self) -> Option<usize> {
        match self {
            TraceError::InvalidEntry { index, .. } | TraceError::Operation { index, .. } => {
                Some(*index)
            }
            _ => None,
        }
    }

    /// Offending token, if any
    pub fn token(&self) -> Option<&str> {
        match self {
            TraceError::Operation { token, .. } => Some(token.as_str()),
            TraceError::InvalidEntry {
                source: ValueError::InvalidEntry { token, .. },
                ..
            } => Some(token.as_str()),
            _ => None,
        }
    }
}

// ============================================================================
// Recorder status
// ============================================================================

/// Lifecycle of a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecorderStatus {
    Idle,
    Running,
    Finished,
    /// Halted on a step (None when the failure precedes any step)
    Failed { step: Option<usize> },
}

// ============================================================================
// Queue sessions
// ============================================================================

/// One resolved script operation
#[derive(Debug, Clone, PartialEq)]
pub enum QueueOp {
    Insert(Element),
    Extract,
}

/// Resolve raw script tokens into operations
///
/// `*` is always the extraction sentinel, even when an element type is
/// given. Fails on the first token that does not parse.
pub fn resolve_script(
    script: &[Element],
    element_type: Option<ElementType>,
) -> Result<Vec<(String, QueueOp)>, TraceError> {
    script
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let token = raw.to_string();
            if matches!(raw, Element::Text(t) if t == EXTRACT_SENTINEL) {
                return Ok((token, QueueOp::Extract));
            }
            let value = match element_type {
                Some(ty) => ty
                    .parse_token(&token)
                    .map_err(|source| TraceError::InvalidEntry { index: i + 1, source })?,
                None => raw.clone(),
            };
            Ok((token, QueueOp::Insert(value)))
        })
        .collect()
}

/// Step-by-step execution of a queue script
///
/// # Example
///
/// ```rust
/// use sort_tracer_core_rs::orchestrator::{QueueTraceConfig, QueueTraceSession, RecorderStatus};
/// use sort_tracer_core_rs::{Element, Order};
///
/// let config = QueueTraceConfig {
///     order: Order::Ascending,
///     capacity: None,
///     script: vec![Element::Int(4), Element::Int(2), Element::from("*")],
///     element_type: None,
/// };
///
/// let mut session = QueueTraceSession::new(&config).unwrap();
/// assert_eq!(session.status(), RecorderStatus::Idle);
///
/// session.step().unwrap();
/// assert_eq!(session.status(), RecorderStatus::Running);
///
/// session.run().unwrap();
/// assert_eq!(session.status(), RecorderStatus::Finished);
/// assert_eq!(session.queue().as_slice(), &[Element::Int(4)]);
/// ```
#[derive(Debug, Clone)]
pub struct QueueTraceSession {
    queue: PriorityQueue<Element>,
    ops: Vec<(String, QueueOp)>,
    cursor: usize,
    status: RecorderStatus,
    log: EventLog,
}

impl QueueTraceSession {
    /// Validate the configuration and resolve the script
    pub fn new(config: &QueueTraceConfig) -> Result<Self, TraceError> {
        let ops = resolve_script(&config.script, config.element_type)?;
        let capacity = config.capacity.unwrap_or_else(|| config.script.len().max(1));
        let queue = PriorityQueue::new(capacity, config.order).map_err(|e| match e {
            QueueError::InvalidConfiguration(msg) => TraceError::InvalidConfiguration(msg),
            other => TraceError::InvalidConfiguration(other.to_string()),
        })?;

        Ok(Self {
            queue,
            ops,
            cursor: 0,
            status: RecorderStatus::Idle,
            log: EventLog::new(),
        })
    }

    /// Execute the next operation
    ///
    /// Returns the logged event, or `None` once the script is exhausted or
    /// the session has failed.
    pub fn step(&mut self) -> Result<Option<&TraceEvent>, TraceError> {
        if matches!(self.status, RecorderStatus::Finished | RecorderStatus::Failed { .. }) {
            return Ok(None);
        }
        let Some((token, op)) = self.ops.get(self.cursor).cloned() else {
            self.status = RecorderStatus::Finished;
            return Ok(None);
        };

        self.status = RecorderStatus::Running;
        self.cursor += 1;
        let step = self.cursor;

        let outcome = match op {
            QueueOp::Insert(value) => self.queue.insert(value).map(|()| None),
            QueueOp::Extract => self.queue.extract_extreme().map(Some),
        };

        match outcome {
            Ok(extracted) => {
                let state = self.queue.iter().map(|e| e.to_string()).collect();
                let event = match extracted {
                    None => TraceEvent::Inserted { step, token, state },
                    Some(value) => TraceEvent::Extracted {
                        step,
                        token,
                        value: value.to_string(),
                        state,
                    },
                };
                self.log.log(event);
                if self.cursor == self.ops.len() {
                    self.status = RecorderStatus::Finished;
                }
                Ok(self.log.last())
            }
            Err(source) => {
                self.status = RecorderStatus::Failed { step: Some(step) };
                self.log.log(TraceEvent::Failed {
                    step,
                    token: Some(token.clone()),
                    kind: source.kind().to_string(),
                    message: source.to_string(),
                });
                Err(TraceError::Operation {
                    index: step,
                    token,
                    source,
                })
            }
        }
    }

    /// Execute every remaining operation, halting on the first failure
    pub fn run(&mut self) -> Result<(), TraceError> {
        while self.step()?.is_some() {}
        Ok(())
    }

    pub fn status(&self) -> RecorderStatus {
        self.status
    }

    pub fn queue(&self) -> &PriorityQueue<Element> {
        &self.queue
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Number of operations in the script
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

// ============================================================================
// Sort traces
// ============================================================================

/// Result of a traced sort
#[derive(Debug, Clone)]
pub struct SortTrace {
    pub sorted: Vec<Element>,
    pub report: SortReport<Element>,
    pub log: EventLog,
}

/// Parse the configured sequence and sort it, logging one event per snapshot
pub fn trace_sort(config: &SortTraceConfig) -> Result<SortTrace, TraceError> {
    let mut data = match config.element_type {
        Some(ty) => config
            .initial_sequence
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                ty.parse_token(&raw.to_string())
                    .map_err(|source| TraceError::InvalidEntry { index: i + 1, source })
            })
            .collect::<Result<Vec<_>, _>>()?,
        None => config.initial_sequence.clone(),
    };

    let report = sort_with(config.algorithm, &mut data, config.order)?;

    let mut log = EventLog::new();
    for (i, snapshot) in report.steps.iter().enumerate() {
        let step = i + 1;
        let state = snapshot.state.iter().map(Element::repr).collect();
        log.log(match snapshot.phase {
            SortPhase::BuildingHeap => TraceEvent::HeapBuilt {
                step,
                heap: snapshot.index,
                state,
            },
            SortPhase::Extracting => TraceEvent::HeapExtraction {
                step,
                iteration: snapshot.index,
                state,
            },
            SortPhase::Scanning => TraceEvent::AdjacentSwap {
                step,
                swap_count: snapshot.index,
                state,
            },
        });
    }

    Ok(SortTrace {
        sorted: data,
        report,
        log,
    })
}

// ============================================================================
// Trace Recorder
// ============================================================================

/// Runs one [`TraceRequest`] and keeps its event log
#[derive(Debug, Clone)]
pub struct TraceRecorder {
    request: TraceRequest,
    status: RecorderStatus,
    log: EventLog,
}

impl TraceRecorder {
    pub fn new(request: TraceRequest) -> Self {
        Self {
            request,
            status: RecorderStatus::Idle,
            log: EventLog::new(),
        }
    }

    /// Run the request to completion and render its transcript
    ///
    /// On failure the log keeps every event up to and including the
    /// `Failed` event, and the status records the failing step.
    pub fn run(&mut self) -> Result<Transcript, TraceError> {
        self.status = RecorderStatus::Running;
        self.log.clear();

        let result = match &self.request {
            TraceRequest::Queue(config) => run_queue(config, &mut self.log),
            TraceRequest::Sort(config) => run_sort(config, &mut self.log),
        };

        match &result {
            Ok(_) => self.status = RecorderStatus::Finished,
            Err(err) => {
                self.status = RecorderStatus::Failed { step: err.step() };
                let already_logged = matches!(self.log.last(), Some(TraceEvent::Failed { .. }));
                if !already_logged {
                    self.log.log(TraceEvent::Failed {
                        step: err.step().unwrap_or(0),
                        token: err.token().map(str::to_string),
                        kind: err.kind().to_string(),
                        message: err.to_string(),
                    });
                }
            }
        }
        result
    }

    pub fn status(&self) -> RecorderStatus {
        self.status
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn request(&self) -> &TraceRequest {
        &self.request
    }
}

fn run_queue(config: &QueueTraceConfig, log: &mut EventLog) -> Result<Transcript, TraceError> {
    let mut session = QueueTraceSession::new(config)?;
    let result = session.run();
    *log = session.log().clone();
    result?;
    Ok(transcript::queue_transcript(session.log(), session.queue()))
}

fn run_sort(config: &SortTraceConfig, log: &mut EventLog) -> Result<Transcript, TraceError> {
    let trace = trace_sort(config)?;
    *log = trace.log.clone();
    Ok(transcript::sort_transcript(&trace))
}

/// Entry operation for the CLI and FFI layers
pub fn run_configured_trace(request: &TraceRequest) -> Result<Transcript, TraceError> {
    TraceRecorder::new(request.clone()).run()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<Element> {
        values.iter().map(|v| Element::from(*v)).collect()
    }

    fn queue_config(script: &[&str], capacity: Option<usize>) -> QueueTraceConfig {
        QueueTraceConfig {
            order: Order::Descending,
            capacity,
            script: tokens(script),
            element_type: None,
        }
    }

    #[test]
    fn test_resolve_script_keeps_sentinel() {
        let ops = resolve_script(&tokens(&["3", "*", "1"]), Some(ElementType::Int)).unwrap();
        assert_eq!(ops[0].1, QueueOp::Insert(Element::Int(3)));
        assert_eq!(ops[1].1, QueueOp::Extract);
        assert_eq!(ops[1].0, "*");
    }

    #[test]
    fn test_resolve_script_reports_bad_token_index() {
        let err = resolve_script(&tokens(&["3", "x"]), Some(ElementType::Int)).unwrap_err();
        assert_eq!(err.step(), Some(2));
        assert_eq!(err.token(), Some("x"));
        assert_eq!(err.kind(), "InvalidEntryError");
    }

    #[test]
    fn test_capacity_defaults_to_script_length() {
        let session = QueueTraceSession::new(&queue_config(&["1", "2", "*"], None)).unwrap();
        assert_eq!(session.queue().capacity(), 3);
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_zero_capacity_is_invalid_configuration() {
        let err = QueueTraceSession::new(&queue_config(&["1"], Some(0))).unwrap_err();
        assert_eq!(err.kind(), "InvalidConfigurationError");
        assert_eq!(err.step(), None);
    }

    #[test]
    fn test_session_halts_on_failure() {
        let mut session = QueueTraceSession::new(&queue_config(&["1", "*", "*", "2"], Some(2))).unwrap();

        let err = session.run().unwrap_err();
        assert_eq!(err.step(), Some(3));
        assert_eq!(err.kind(), "EmptyContainerError");
        assert_eq!(session.status(), RecorderStatus::Failed { step: Some(3) });

        // Nothing after the failing step ran
        assert_eq!(session.log().len(), 3);
        assert!(session.queue().is_empty());
        assert!(session.step().unwrap().is_none());
    }

    #[test]
    fn test_recorder_status_transitions() {
        let request = TraceRequest::Queue(queue_config(&["5", "3"], None));
        let mut recorder = TraceRecorder::new(request);
        assert_eq!(recorder.status(), RecorderStatus::Idle);

        recorder.run().unwrap();
        assert_eq!(recorder.status(), RecorderStatus::Finished);
        assert_eq!(recorder.log().events_of_type("Inserted").len(), 2);
    }

    #[test]
    fn test_recorder_logs_sort_failure() {
        let request = TraceRequest::Sort(SortTraceConfig {
            initial_sequence: vec![Element::Int(1), Element::from("a")],
            algorithm: SortAlgorithmKind::HeapSort,
            element_type: None,
            order: Order::Ascending,
        });
        let mut recorder = TraceRecorder::new(request);

        let err = recorder.run().unwrap_err();
        assert_eq!(err.kind(), "TypeMismatchError");
        assert_eq!(recorder.status(), RecorderStatus::Failed { step: None });
        assert_eq!(recorder.log().events_of_type("Failed").len(), 1);
    }

    #[test]
    fn test_trace_sort_logs_one_event_per_snapshot() {
        let config = SortTraceConfig {
            initial_sequence: tokens(&["5", "3", "8", "1"]),
            algorithm: SortAlgorithmKind::SelectionSort,
            element_type: Some(ElementType::Int),
            order: Order::Ascending,
        };

        let trace = trace_sort(&config).unwrap();
        assert_eq!(
            trace.sorted,
            vec![Element::Int(1), Element::Int(3), Element::Int(5), Element::Int(8)]
        );
        assert_eq!(trace.log.len(), trace.report.steps.len());
        assert_eq!(trace.log.events_of_type("AdjacentSwap").len(), 4);
    }

    #[test]
    fn test_request_deserializes_from_json() {
        let json = r#"{"kind": "queue", "order": "ascending", "script": ["b", "a", "*"]}"#;
        let request: TraceRequest = serde_json::from_str(json).unwrap();
        match request {
            TraceRequest::Queue(config) => {
                assert_eq!(config.order, Order::Ascending);
                assert_eq!(config.capacity, None);
                assert_eq!(config.script.len(), 3);
            }
            other => panic!("expected queue request, got {:?}", other),
        }

        let json = r#"{"kind": "sort", "algorithm": "selectionsort", "initial_sequence": [3, 1.5, 2]}"#;
        let request: TraceRequest = serde_json::from_str(json).unwrap();
        match request {
            TraceRequest::Sort(config) => {
                assert_eq!(config.algorithm, SortAlgorithmKind::SelectionSort);
                assert_eq!(config.order, Order::Ascending);
                assert_eq!(config.initial_sequence[1], Element::Float(1.5));
            }
            other => panic!("expected sort request, got {:?}", other),
        }
    }
}
