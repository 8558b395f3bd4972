//! Calldata module for pricing transaction data

mod cmd;

pub use cmd::*;

pub use crate::common::{load_input, print_output, CliError as CalldataCmdError, LogArgs, Result};
