//! Constants shared by the decoders and validators.
//!
//! It groups the constants by concern as sub-modules.

/// Four-byte selectors of the revert payloads understood by the decoder.
pub mod selectors {
    use alloy_primitives::hex;

    /// `Error(string)`, emitted by `revert("...")` and failing `require`.
    pub const ERROR: [u8; 4] = hex!("08c379a0");
    /// `FailedOp(uint256,address,string)`, emitted by the v0.6 `EntryPoint`.
    pub const FAILED_OP: [u8; 4] = hex!("00fa072b");
    /// `FailedOp(uint256,string)`, emitted by the v0.7 and later `EntryPoint`.
    pub const FAILED_OP_V07: [u8; 4] = hex!("220266b6");
    /// `Panic(uint256)`, emitted by compiler-inserted checks.
    pub const PANIC: [u8; 4] = hex!("4e487b71");

    /// Length of a selector in bytes.
    pub const SELECTOR_LEN: usize = 4;
}

/// Calldata pricing as defined by EIP-2028.
pub mod calldata {
    /// Gas charged per zero byte of calldata.
    pub const ZERO_BYTE_GAS: u64 = 4;
    /// Gas charged per non-zero byte of calldata.
    pub const NON_ZERO_BYTE_GAS: u64 = 16;
}

/// Mnemonics and limits used when slicing a validation trace.
pub mod trace {
    /// Mnemonic that brackets the protected phases. The test contracts call `block.number`
    /// exactly twice, once just before and once just after the phase boundary.
    pub const PHASE_MARKER: &str = "NUMBER";
    /// Number of phase markers a well-formed trace carries.
    pub const EXPECTED_MARKERS: usize = 2;
    /// Mnemonic every correctly sliced phase is expected to contain.
    pub const PHASE_SENTINEL: &str = "POP";
    /// Entries at this depth or shallower are top-level call overhead and are not policed.
    pub const MAX_UNPOLICED_DEPTH: u64 = 1;
    /// Mnemonic whose use is tolerated right before a call.
    pub const GAS: &str = "GAS";
    /// Substring identifying the call family (`CALL`, `STATICCALL`, `DELEGATECALL`, ...).
    pub const CALL_FAMILY: &str = "CALL";
}

/// Constants for deterministic address derivation.
pub mod address {
    /// Length of a factory address in bytes.
    pub const ADDRESS_LEN: usize = 20;
    /// Length of a salt in bytes.
    pub const SALT_LEN: usize = 32;
}
