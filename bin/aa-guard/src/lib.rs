//! Command-line front end for `aa-guard`.
//!
//! Each subcommand lives in its own module; the argument groups, input loading, output and the
//! RPC trace source they share live in [`common`].

mod cmd;
pub use cmd::*;

pub mod address;
pub mod calldata;
pub mod common;
pub mod decode;
pub mod validate;

pub use common::{CliError, Result};
