//! Validation-phase opcode policy.
//!
//! ERC-4337 requires the validation phases of a user operation to be deterministic, so a bundler
//! can simulate them and trust the result when the bundle lands. They must not branch on values
//! the block producer controls (block number, base fee, gas price) nor on the remaining gas,
//! except for the `GAS` that immediately precedes a call.
//!
//! The test contracts bracket the phases with two `block.number` reads. The validator slices the
//! opcode trace at those `NUMBER` markers and checks each phase against a [`BannedOps`] set.

mod banned;
mod entry;
mod error;
mod validator;

pub use banned::*;
pub use entry::*;
pub use error::*;
pub use validator::*;
