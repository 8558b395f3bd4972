//! Verification helpers for account-abstraction execution environments.
//!
//! The crate bundles the pure pieces an automated bundler test-suite needs once it has fetched
//! data from a node: decoding revert payloads, policing opcode traces of the validation phases,
//! computing counterfactual deployment addresses, and pricing calldata. None of them perform I/O.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod constants;

mod address;
pub use address::*;

mod calldata;
pub use calldata::*;

mod revert;
pub use revert::*;

mod trace;
pub use trace::*;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
