//! Command-line front end for the trace recorder.
//!
//! Builds a `TraceRequest` from arguments or a JSON file, runs it and prints
//! the transcript verbatim.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use sort_tracer_core_rs::{
    run_configured_trace, split_sequence, Element, ElementType, Order, QueueTraceConfig,
    SortAlgorithmKind, SortTraceConfig, TraceError, TraceRequest,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sort-tracer")]
#[command(version)]
#[command(about = "Step-by-step priority queue and sorting traces")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print the transcript as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an insert/extract script against a bounded priority queue
    Queue {
        /// max or min
        #[arg(short, long, default_value = "max")]
        order: Order,

        /// Number of slots (default: script length)
        #[arg(short, long)]
        capacity: Option<usize>,

        /// Space-separated tokens; '*' extracts the extreme element
        #[arg(short, long)]
        script: String,

        /// Parse tokens as str, int, float or mixed
        #[arg(short = 't', long = "type")]
        element_type: Option<ElementType>,
    },

    /// Sort a sequence step by step
    Sort {
        /// heapsort or selectionsort
        #[arg(short, long, default_value = "heapsort")]
        algorithm: SortAlgorithmKind,

        /// Parse values as str, int, float or mixed
        #[arg(short = 't', long = "type", default_value = "float")]
        element_type: ElementType,

        /// ascending or descending
        #[arg(short, long, default_value = "ascending")]
        order: Order,

        /// Space-separated values
        #[arg(short, long)]
        values: String,
    },

    /// Run a JSON-encoded trace request
    Run {
        /// Path to the request file
        request: PathBuf,
    },
}

fn build_request(command: Commands) -> Result<TraceRequest> {
    let request = match command {
        Commands::Queue {
            order,
            capacity,
            script,
            element_type,
        } => TraceRequest::Queue(QueueTraceConfig {
            order,
            capacity,
            script: split_sequence(&script).into_iter().map(Element::Text).collect(),
            element_type,
        }),
        Commands::Sort {
            algorithm,
            element_type,
            order,
            values,
        } => TraceRequest::Sort(SortTraceConfig {
            initial_sequence: split_sequence(&values).into_iter().map(Element::Text).collect(),
            algorithm,
            element_type: Some(element_type),
            order,
        }),
        Commands::Run { request } => {
            let raw = std::fs::read_to_string(&request)
                .with_context(|| format!("Failed to read {}", request.display()))?;
            let value: Value = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid JSON in {}", request.display()))?;
            check_names(&value)
                .with_context(|| format!("Invalid trace request in {}", request.display()))?;
            serde_json::from_value(value)
                .with_context(|| format!("Invalid trace request in {}", request.display()))?
        }
    };
    Ok(request)
}

/// Parse the named fields of a JSON request up front so a bad name fails
/// with its error kind
fn check_names(request: &Value) -> Result<(), TraceError> {
    let field = |key: &str| request.get(key).and_then(Value::as_str);

    if let Some(name) = field("algorithm") {
        name.parse::<SortAlgorithmKind>()?;
    }
    if let Some(name) = field("order") {
        name.parse::<Order>()
            .map_err(|e| TraceError::InvalidConfiguration(e.to_string()))?;
    }
    if let Some(name) = field("element_type") {
        name.parse::<ElementType>()
            .map_err(|e| TraceError::InvalidConfiguration(e.to_string()))?;
    }
    Ok(())
}

fn report_failure(err: &TraceError) {
    match (err.step(), err.token()) {
        (Some(step), Some(token)) => {
            eprintln!("{} at step {} ('{}'): {}", err.kind(), step, token, err)
        }
        _ => eprintln!("{}: {}", err.kind(), err),
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let request = match build_request(cli.command) {
        Ok(request) => request,
        Err(err) => match err.downcast_ref::<TraceError>() {
            Some(trace_err) => {
                eprintln!("{}", err);
                report_failure(trace_err);
                return Ok(ExitCode::FAILURE);
            }
            None => return Err(err),
        },
    };

    match run_configured_trace(&request) {
        Ok(transcript) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&transcript)?);
            } else {
                println!("{}", transcript.render());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            report_failure(&err);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> Result<ExitCode> {
    run(Cli::parse())
}
