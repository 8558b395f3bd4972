use core::fmt;

use alloy_primitives::{hex, Address, Bytes, U256};
use alloy_sol_types::{Panic, Revert, SolError};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{v07, DecodeError, FailedOp, PanicCode, RevertSelector};
use crate::constants::selectors::SELECTOR_LEN;

/// Structured outcome of a failed call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DecodedOutcome {
    /// `Error(string)` revert.
    PlainError {
        /// The revert message.
        message: String,
    },
    /// `EntryPoint` rejected a user operation.
    FailedOperation {
        /// Index of the operation within the bundle.
        op_index: U256,
        /// The paymaster blamed for the failure, if any.
        paymaster: Option<Address>,
        /// The `AAxx` reason string.
        message: String,
    },
    /// Compiler-inserted panic.
    Panic {
        /// The raw panic code.
        code: U256,
        /// Description of the code, or the code in hex if it is not in the table.
        description: String,
    },
    /// Payload whose selector is not recognised.
    Unknown {
        /// The undecoded payload.
        raw: Bytes,
    },
}

impl DecodedOutcome {
    /// Whether the payload was not recognised.
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }

    /// The message carried by the outcome, if it has one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::PlainError { message } | Self::FailedOperation { message, .. } => Some(message),
            Self::Panic { description, .. } => Some(description),
            Self::Unknown { .. } => None,
        }
    }
}

impl fmt::Display for DecodedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlainError { message } => write!(f, "Error(\"{message}\")"),
            Self::FailedOperation { op_index, paymaster: Some(paymaster), message } => {
                write!(f, "FailedOp({op_index}, {paymaster}, \"{message}\")")
            }
            Self::FailedOperation { op_index, paymaster: None, message } => {
                write!(f, "FailedOp({op_index}, \"{message}\")")
            }
            Self::Panic { code, description } => write!(f, "Panic(0x{code:x}): {description}"),
            Self::Unknown { raw } => write!(f, "unknown revert 0x{}", hex::encode(raw)),
        }
    }
}

/// How unrecognised payloads are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Unrecognised payloads are errors.
    Strict,
    /// Unrecognised payloads decode to [`DecodedOutcome::Unknown`].
    #[default]
    Lenient,
}

impl DecodeMode {
    /// Maps a `strict` flag to a mode.
    pub const fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// Decoder for revert payloads with a fixed [`DecodeMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RevertDecoder {
    mode: DecodeMode,
}

impl RevertDecoder {
    /// Creates a decoder with the given mode.
    pub const fn new(mode: DecodeMode) -> Self {
        Self { mode }
    }

    /// Creates a strict decoder.
    pub const fn strict() -> Self {
        Self::new(DecodeMode::Strict)
    }

    /// Creates a lenient decoder.
    pub const fn lenient() -> Self {
        Self::new(DecodeMode::Lenient)
    }

    /// The decoder's mode.
    pub const fn mode(&self) -> DecodeMode {
        self.mode
    }

    /// Decodes a payload. See [`decode_revert`].
    pub fn decode(&self, payload: &[u8]) -> Result<DecodedOutcome, DecodeError> {
        decode_revert(payload, self.mode)
    }

    /// Decodes a hex-encoded payload. See [`decode_revert_hex`].
    pub fn decode_hex(&self, payload: &str) -> Result<DecodedOutcome, DecodeError> {
        decode_revert_hex(payload, self.mode)
    }
}

/// Decodes a revert payload.
///
/// In [`DecodeMode::Lenient`], payloads shorter than a selector or with an unknown selector decode
/// to [`DecodedOutcome::Unknown`]. In [`DecodeMode::Strict`] they are returned as
/// [`DecodeError::TooShort`] and [`DecodeError::SelectorMismatch`]. A known selector with
/// malformed arguments is a [`DecodeError::ShapeMismatch`] in both modes.
pub fn decode_revert(payload: &[u8], mode: DecodeMode) -> Result<DecodedOutcome, DecodeError> {
    match decode_known(payload) {
        Err(err) if mode == DecodeMode::Lenient && err.is_selector_mismatch() => {
            trace!(len = payload.len(), "Unrecognised revert payload");
            Ok(DecodedOutcome::Unknown { raw: Bytes::copy_from_slice(payload) })
        }
        result => result,
    }
}

/// Decodes a hex-encoded revert payload. The `0x` prefix is optional.
pub fn decode_revert_hex(payload: &str, mode: DecodeMode) -> Result<DecodedOutcome, DecodeError> {
    let bytes = hex::decode(payload.trim())?;
    decode_revert(&bytes, mode)
}

fn decode_known(payload: &[u8]) -> Result<DecodedOutcome, DecodeError> {
    let Some(&head) = payload.first_chunk::<SELECTOR_LEN>() else {
        return Err(DecodeError::TooShort { len: payload.len() });
    };
    let selector = RevertSelector::from_bytes(head)
        .ok_or(DecodeError::SelectorMismatch { selector: head })?;
    trace!(%selector, "Decoding revert payload");

    let outcome = match selector {
        RevertSelector::Error => {
            let revert = decode_exact::<Revert>(payload, selector)?;
            DecodedOutcome::PlainError { message: revert.reason }
        }
        RevertSelector::FailedOp => {
            let failed = decode_exact::<FailedOp>(payload, selector)?;
            DecodedOutcome::FailedOperation {
                op_index: failed.opIndex,
                paymaster: (!failed.paymaster.is_zero()).then_some(failed.paymaster),
                message: failed.reason,
            }
        }
        RevertSelector::FailedOpV07 => {
            let failed = decode_exact::<v07::FailedOp>(payload, selector)?;
            DecodedOutcome::FailedOperation {
                op_index: failed.opIndex,
                paymaster: None,
                message: failed.reason,
            }
        }
        RevertSelector::Panic => {
            let panic = decode_exact::<Panic>(payload, selector)?;
            DecodedOutcome::Panic {
                code: panic.code,
                description: PanicCode::from_code(panic.code).description(),
            }
        }
    };
    Ok(outcome)
}

/// Decodes `payload` as `E`, rejecting any encoding that does not re-encode to the same bytes.
///
/// Dirty padding, trailing bytes and invalid UTF-8 in string arguments all fail here.
fn decode_exact<E: SolError>(payload: &[u8], selector: RevertSelector) -> Result<E, DecodeError> {
    let shape = |source: alloy_sol_types::Error| DecodeError::ShapeMismatch { selector, source };
    let decoded = E::abi_decode_validate(payload).map_err(shape)?;
    if decoded.abi_encode() != payload {
        return Err(shape(alloy_sol_types::Error::custom("non-canonical argument encoding")));
    }
    Ok(decoded)
}
