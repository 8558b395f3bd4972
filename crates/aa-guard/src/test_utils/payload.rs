//! Helpers for encoding revert payloads.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{Panic, Revert, SolError};

use crate::{v07, FailedOp};

/// Encode an `Error(string)` payload.
pub fn encode_error(message: &str) -> Bytes {
    Revert { reason: message.to_string() }.abi_encode().into()
}

/// Encode a v0.6 `FailedOp(uint256,address,string)` payload.
pub fn encode_failed_op(op_index: u64, paymaster: Address, reason: &str) -> Bytes {
    FailedOp { opIndex: U256::from(op_index), paymaster, reason: reason.to_string() }
        .abi_encode()
        .into()
}

/// Encode a v0.7 `FailedOp(uint256,string)` payload.
pub fn encode_failed_op_v07(op_index: u64, reason: &str) -> Bytes {
    v07::FailedOp { opIndex: U256::from(op_index), reason: reason.to_string() }.abi_encode().into()
}

/// Encode a `Panic(uint256)` payload.
pub fn encode_panic(code: u64) -> Bytes {
    Panic { code: U256::from(code) }.abi_encode().into()
}
