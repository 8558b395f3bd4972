use aa_guard::{CalldataError, DecodeError, ShapeMismatchError, TraceError};
use alloy_primitives::hex::FromHexError;
use alloy_transport::TransportError;

/// Error types for the aa-guard commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// RPC transport error
    #[error("RPC transport error: {0}")]
    RpcTransport(#[from] TransportError),

    /// Failed to read input
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid hex string
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] FromHexError),

    /// Revert payload could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Trace is malformed
    #[error("Trace error: {0}")]
    Trace(#[from] TraceError),

    /// Factory address or salt has the wrong length
    #[error("Invalid address input: {0}")]
    Address(#[from] ShapeMismatchError),

    /// Calldata could not be priced
    #[error("Calldata error: {0}")]
    Calldata(#[from] CalldataError),

    /// The trace breaks the opcode policy
    #[error("Trace violates the validation-phase opcode policy")]
    ValidationFailed,

    /// Logging could not be initialised
    #[error("Logging error: {0}")]
    Logging(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for the aa-guard commands
pub type Result<T> = std::result::Result<T, CliError>;
