//! Test utilities for building traces and revert payloads.

mod payload;
mod trace;

pub use payload::*;
pub use trace::*;
