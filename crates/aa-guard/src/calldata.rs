//! Intrinsic calldata cost.
//!
//! The cost model mirrors the EIP-2028 transaction data pricing rule byte for byte: every zero
//! byte costs [`ZERO_BYTE_GAS`](constants::calldata::ZERO_BYTE_GAS) and every other byte costs
//! [`NON_ZERO_BYTE_GAS`](constants::calldata::NON_ZERO_BYTE_GAS). There is no rounding or
//! per-word batching.

use alloy_primitives::hex;
use serde::{Deserialize, Serialize};

use crate::constants;

/// Error returned when a payload cannot be interpreted as bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalldataError {
    /// The hex string is malformed.
    #[error("invalid calldata hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Byte composition of a calldata payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalldataCost {
    /// Number of zero bytes.
    pub zero_bytes: u64,
    /// Number of non-zero bytes.
    pub non_zero_bytes: u64,
}

impl CalldataCost {
    /// Counts the zero and non-zero bytes of `data`.
    pub fn of(data: impl AsRef<[u8]>) -> Self {
        let data = data.as_ref();
        let zero_bytes = data.iter().filter(|&&byte| byte == 0).count() as u64;
        Self { zero_bytes, non_zero_bytes: data.len() as u64 - zero_bytes }
    }

    /// Counts the bytes of a hex-encoded payload. The `0x` prefix is optional.
    pub fn from_hex(data: &str) -> Result<Self, CalldataError> {
        Ok(Self::of(hex::decode(data.trim())?))
    }

    /// Total number of bytes.
    pub const fn len(&self) -> u64 {
        self.zero_bytes + self.non_zero_bytes
    }

    /// Whether the payload is empty.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The intrinsic gas charged for the payload.
    pub const fn gas(&self) -> u64 {
        self.zero_bytes * constants::calldata::ZERO_BYTE_GAS +
            self.non_zero_bytes * constants::calldata::NON_ZERO_BYTE_GAS
    }
}

/// Returns the intrinsic gas cost of `data`.
pub fn calldata_gas(data: impl AsRef<[u8]>) -> u64 {
    CalldataCost::of(data).gas()
}

/// Returns the intrinsic gas cost of a hex-encoded payload. The `0x` prefix is optional.
pub fn calldata_gas_hex(data: &str) -> Result<u64, CalldataError> {
    CalldataCost::from_hex(data).map(|cost| cost.gas())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_is_free() {
        assert_eq!(calldata_gas([0u8; 0]), 0);
        assert!(CalldataCost::of(Vec::<u8>::new()).is_empty());
    }

    #[test]
    fn test_mixed_payload() {
        let cost = CalldataCost::of([0x00u8, 0x01, 0x00, 0xff, 0x10]);
        assert_eq!(cost, CalldataCost { zero_bytes: 2, non_zero_bytes: 3 });
        assert_eq!(cost.len(), 5);
        assert_eq!(cost.gas(), 2 * 4 + 3 * 16);
    }

    #[test]
    fn test_hex_payload() {
        assert_eq!(calldata_gas_hex("0x0001").unwrap(), 20);
        assert_eq!(calldata_gas_hex("ff").unwrap(), 16);
        assert_eq!(calldata_gas_hex("0x").unwrap(), 0);
        assert_eq!(
            CalldataCost::from_hex(" 0x00ff00\n").unwrap(),
            CalldataCost { zero_bytes: 2, non_zero_bytes: 1 }
        );
    }

    #[test]
    fn test_invalid_hex_is_an_error() {
        assert!(matches!(calldata_gas_hex("0xzz"), Err(CalldataError::InvalidHex(_))));
        assert!(matches!(calldata_gas_hex("0x123"), Err(CalldataError::InvalidHex(_))));
        assert!(matches!(CalldataCost::from_hex("0x0g"), Err(CalldataError::InvalidHex(_))));
    }
}
