//! Argument groups, input loading, output and the RPC trace source shared by the subcommands.

mod error;
mod hex;
mod logging;
mod output;
mod rpc;
mod trace;

pub use error::*;
pub use hex::*;
pub use logging::*;
pub use output::*;
pub use rpc::*;
pub use trace::*;
