//! Trace loading for the validate command

use std::path::Path;

use aa_guard::Trace;
use alloy_rpc_types_trace::geth::DefaultFrame;
use serde::Deserialize;
use tracing::debug;

use super::{read_input, Result};

/// The trace layouts accepted on input.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TraceInput {
    /// A JSON array of `{op, depth}` records.
    Entries(Trace),
    /// A geth default-tracer frame, as returned by `debug_traceTransaction`.
    Frame(DefaultFrame),
}

/// Parse a trace from JSON.
pub fn parse_trace(json: &str) -> Result<Trace> {
    let trace = match serde_json::from_str(json)? {
        TraceInput::Entries(trace) => trace,
        TraceInput::Frame(frame) => Trace::from(&frame),
    };
    debug!(len = trace.len(), "Parsed trace");
    Ok(trace)
}

/// Load a trace from a JSON file. A path of `-` reads stdin.
pub fn load_trace(path: &Path) -> Result<Trace> {
    parse_trace(&read_input(path)?)
}
