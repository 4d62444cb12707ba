//! Transcript rendering
//!
//! Turns an [`EventLog`] into the human-readable lines printed by the CLI
//! layer, plus a summary block (features, final state and timing).
//!
//! # Critical Invariants
//!
//! - **Pure**: rendering only reads the log; it never re-runs an algorithm
//! - **Deterministic lines**: `lines` never contain timing, so the
//!   [`Transcript::digest`] of two runs over the same input is identical

use crate::core::value::Element;
use crate::models::event::{EventLog, TraceEvent};
use crate::models::queue::PriorityQueue;
use crate::orchestrator::engine::SortTrace;
use crate::sorting::SortAlgorithmKind;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Rendered output of a trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    /// One line per recorded step, plus section headers
    pub lines: Vec<String>,

    /// Features, final state and timing
    pub summary: Vec<String>,
}

impl Transcript {
    /// Lines and summary separated by a blank line, ready to print verbatim
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        if !self.summary.is_empty() {
            out.push_str("\n\n");
            out.push_str(&self.summary.join("\n"));
        }
        out
    }

    /// SHA256 of the step lines, hex encoded
    ///
    /// The summary is excluded because it carries wall-clock timings.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for line in &self.lines {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }
}

// ============================================================================
// Queue transcripts
// ============================================================================

/// Render a queue session
///
/// Extraction lines right-align `Deleted item: <value>` to twice the queue
/// capacity; an emptied queue shows `[]`.
pub fn queue_transcript(log: &EventLog, queue: &PriorityQueue<Element>) -> Transcript {
    let width = 2 * queue.capacity();

    let lines = log
        .events()
        .iter()
        .filter_map(|event| match event {
            TraceEvent::Inserted { token, state, .. } => {
                Some(format!("\t{}: {}", token, state.join(" ")))
            }
            TraceEvent::Extracted {
                token,
                value,
                state,
                ..
            } => {
                let shown = if state.is_empty() {
                    "[]".to_string()
                } else {
                    state.join(" ")
                };
                let pad = width.saturating_sub(shown.chars().count()).max(1);
                Some(format!(
                    "\t{}: {}{}Deleted item: {}",
                    token,
                    shown,
                    " ".repeat(pad),
                    value
                ))
            }
            _ => None,
        })
        .collect();

    let final_state = if queue.is_empty() {
        "[]".to_string()
    } else {
        queue.to_string()
    };

    let summary = vec![
        format!(
            "{}-priority queue, capacity {}",
            queue.order().extreme_name(),
            queue.capacity()
        ),
        format!("Final queue: {}", final_state),
        format!(
            "Insertions: {}, extractions: {}",
            log.events_of_type("Inserted").len(),
            log.events_of_type("Extracted").len()
        ),
    ];

    Transcript { lines, summary }
}

// ============================================================================
// Sort transcripts
// ============================================================================

/// Render a traced sort
pub fn sort_transcript(trace: &SortTrace) -> Transcript {
    let report = &trace.report;
    let mut lines = Vec::new();

    if report.algorithm == SortAlgorithmKind::HeapSort {
        lines.push("Initial heap construction:".to_string());
        lines.push(String::new());
        lines.extend(trace.log.events_of_type("HeapBuilt").into_iter().filter_map(step_line));
        lines.push(String::new());
    }
    lines.push("Sorting:".to_string());
    lines.push(String::new());
    lines.extend(
        trace
            .log
            .events()
            .iter()
            .filter(|e| matches!(e, TraceEvent::HeapExtraction { .. } | TraceEvent::AdjacentSwap { .. }))
            .filter_map(step_line),
    );

    let features = &report.features;
    let sorted: Vec<String> = trace.sorted.iter().map(Element::repr).collect();
    let mut summary = vec![
        format!("{} features:", report.algorithm.title()),
        String::new(),
        format!("\tBest case: {}", features.best_case),
        format!("\tAverage case: {}", features.average_case),
        format!("\tWorst case: {}", features.worst_case),
        format!("\tMemory: {}", features.memory),
        format!("\tStable: {}", if features.stable { "yes" } else { "no" }),
        String::new(),
        format!("Sorted array: {}", sorted.join(", ")),
        String::new(),
        "Running time estimates:".to_string(),
        String::new(),
    ];

    let timings = &report.timings;
    if let Some(build_ms) = timings.build_heap_ms {
        summary.push(format!("\tTime taken to build the initial heap: {:.6} ms", build_ms));
    }
    summary.push(format!("\tTime taken to sort: {:.6} ms", timings.sort_ms));
    if timings.build_heap_ms.is_some() {
        summary.push(format!("\tTotal time: {:.6} ms", timings.total_ms));
    }

    Transcript { lines, summary }
}

fn step_line(event: &TraceEvent) -> Option<String> {
    match event {
        TraceEvent::HeapBuilt { heap, state, .. } => {
            Some(format!("\tHeap {}: {}", heap, state.join(", ")))
        }
        TraceEvent::HeapExtraction {
            iteration, state, ..
        } => Some(format!("\tHeap {}: {}", iteration, state.join(", "))),
        TraceEvent::AdjacentSwap {
            swap_count, state, ..
        } => Some(format!("\tArray {}: {}", swap_count, state.join(", "))),
        _ => None,
    }
}
