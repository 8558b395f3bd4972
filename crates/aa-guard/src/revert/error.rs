use alloy_primitives::hex;

/// Error types for revert payload decoding.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload is too short to carry a selector.
    #[error("payload of {len} bytes is too short to carry a selector")]
    TooShort {
        /// Length of the payload.
        len: usize,
    },
    /// The selector matches none of the known errors.
    #[error("unknown selector 0x{}", hex::encode(.selector))]
    SelectorMismatch {
        /// The unrecognised selector.
        selector: [u8; 4],
    },
    /// The selector is known but the arguments do not match its layout.
    #[error("malformed {selector} arguments: {source}")]
    ShapeMismatch {
        /// The recognised selector.
        selector: super::RevertSelector,
        /// The underlying ABI decoding error.
        #[source]
        source: alloy_sol_types::Error,
    },
    /// The payload is not valid hex.
    #[error("invalid payload hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl DecodeError {
    /// Whether the error only means that no known selector matched. This is the one failure that
    /// lenient decoding turns into [`DecodedOutcome::Unknown`](super::DecodedOutcome::Unknown).
    pub const fn is_selector_mismatch(&self) -> bool {
        matches!(self, Self::TooShort { .. } | Self::SelectorMismatch { .. })
    }

    /// Whether the selector was recognised but its arguments could not be parsed.
    pub const fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }
}
