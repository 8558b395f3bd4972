//! Decode module for revert payloads
//!
//! Turns the raw bytes returned by a failed call into a structured outcome: a plain
//! `Error(string)`, an `EntryPoint` `FailedOp`, a compiler panic, or an unrecognised payload.

mod cmd;

pub use cmd::*;

pub use crate::common::{load_input, print_output, CliError as DecodeCmdError, LogArgs, Result};
