//! Address module for deterministic deployment addresses

mod cmd;

pub use cmd::*;

pub use crate::common::{load_input, print_output, CliError as AddressCmdError, LogArgs, Result};
