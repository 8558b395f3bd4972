//! Validate module for validation-phase opcode traces
//!
//! Loads a trace from a file or fetches it from a node, then checks the two validation phases
//! against the banned-opcode policy.

mod cmd;

pub use cmd::*;

pub use crate::common::{
    load_trace, print_output, CliError as ValidateError, LogArgs, Result, RpcArgs, TraceSource,
};
