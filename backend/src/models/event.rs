//! Trace event log
//!
//! Every observable step of a trace session is captured as a [`TraceEvent`].
//! The log is the single source the transcript is rendered from, which keeps
//! the algorithms free of any printing.
//!
//! # Event Types
//!
//! - **Queue**: `Inserted`, `Extracted`
//! - **Heap sort**: `HeapBuilt`, `HeapExtraction`
//! - **Selection sort**: `AdjacentSwap`
//! - **Failure**: `Failed` (last event of a halted session)
//!
//! Steps are 1-based and strictly increasing within one session.
//!
//! # Example
//!
//! ```rust
//! use sort_tracer_core_rs::models::{EventLog, TraceEvent};
//!
//! let mut log = EventLog::new();
//! log.log(TraceEvent::Inserted {
//!     step: 1,
//!     token: "5".to_string(),
//!     state: vec!["5".to_string()],
//! });
//!
//! assert_eq!(log.len(), 1);
//! assert_eq!(log.events()[0].event_type(), "Inserted");
//! ```

use serde::Serialize;

/// One recorded step of a trace session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum TraceEvent {
    /// A value was inserted into the priority queue
    Inserted {
        step: usize,
        token: String,
        state: Vec<String>,
    },

    /// The extreme value was removed from the priority queue
    Extracted {
        step: usize,
        token: String,
        value: String,
        state: Vec<String>,
    },

    /// A heapify call completed during heap construction
    HeapBuilt {
        step: usize,
        heap: usize,
        state: Vec<String>,
    },

    /// The heap root was moved behind the heap region
    ///
    /// `state` is the remaining unsorted prefix.
    HeapExtraction {
        step: usize,
        iteration: usize,
        state: Vec<String>,
    },

    /// Two neighbours were swapped by selection sort
    AdjacentSwap {
        step: usize,
        swap_count: usize,
        state: Vec<String>,
    },

    /// The session halted on this step
    Failed {
        step: usize,
        token: Option<String>,
        kind: String,
        message: String,
    },
}

impl TraceEvent {
    /// Step at which the event occurred
    pub fn step(&self) -> usize {
        match self {
            TraceEvent::Inserted { step, .. }
            | TraceEvent::Extracted { step, .. }
            | TraceEvent::HeapBuilt { step, .. }
            | TraceEvent::HeapExtraction { step, .. }
            | TraceEvent::AdjacentSwap { step, .. }
            | TraceEvent::Failed { step, .. } => *step,
        }
    }

    /// Event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            TraceEvent::Inserted { .. } => "Inserted",
            TraceEvent::Extracted { .. } => "Extracted",
            TraceEvent::HeapBuilt { .. } => "HeapBuilt",
            TraceEvent::HeapExtraction { .. } => "HeapExtraction",
            TraceEvent::AdjacentSwap { .. } => "AdjacentSwap",
            TraceEvent::Failed { .. } => "Failed",
        }
    }

    /// Visible state after the step (None for failures)
    pub fn state(&self) -> Option<&[String]> {
        match self {
            TraceEvent::Inserted { state, .. }
            | TraceEvent::Extracted { state, .. }
            | TraceEvent::HeapBuilt { state, .. }
            | TraceEvent::HeapExtraction { state, .. }
            | TraceEvent::AdjacentSwap { state, .. } => Some(state),
            TraceEvent::Failed { .. } => None,
        }
    }
}

/// Ordered collection of trace events
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventLog {
    events: Vec<TraceEvent>,
}

impl EventLog {
    /// Create empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append event
    pub fn log(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    /// Number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if no events were logged
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in order
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Most recent event
    pub fn last(&self) -> Option<&TraceEvent> {
        self.events.last()
    }

    /// Events recorded at a specific step
    pub fn events_at_step(&self, step: usize) -> Vec<&TraceEvent> {
        self.events.iter().filter(|e| e.step() == step).collect()
    }

    /// Events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&TraceEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Remove all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
