//! Counterfactual address derivation.
//!
//! A counterfactual address is known before anything is deployed there. Account factories deploy
//! wallets with CREATE2, so the address follows EIP-1014:
//!
//! ```text
//! address = keccak256(0xff ++ factory ++ salt ++ keccak256(init_code))[12..]
//! ```
//!
//! The CREATE2 factory itself is usually deployed with a keyless (Nick's method) transaction,
//! whose address follows the CREATE rule `keccak256(rlp([deployer, nonce]))[12..]`.

use alloy_primitives::{keccak256, Address, B256};

use crate::constants::address::{ADDRESS_LEN, SALT_LEN};

/// Error returned when a fixed-width input has the wrong length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{field} must be exactly {expected} bytes, got {actual}")]
pub struct ShapeMismatchError {
    /// Name of the offending input.
    pub field: &'static str,
    /// Required length in bytes.
    pub expected: usize,
    /// Length that was supplied.
    pub actual: usize,
}

/// Computes the CREATE2 address of `init_code` deployed by `factory` with `salt`.
pub fn resolve_counterfactual_address(factory: Address, salt: B256, init_code: &[u8]) -> Address {
    resolve_from_init_code_hash(factory, salt, keccak256(init_code))
}

/// Computes the CREATE2 address from an already hashed init code.
pub fn resolve_from_init_code_hash(factory: Address, salt: B256, init_code_hash: B256) -> Address {
    factory.create2(salt, init_code_hash)
}

/// Computes the CREATE2 address from untyped inputs, rejecting any factory or salt that is not
/// exactly 20 or 32 bytes long. Inputs are never truncated or padded.
pub fn try_resolve_counterfactual_address(
    factory: &[u8],
    salt: &[u8],
    init_code: &[u8],
) -> Result<Address, ShapeMismatchError> {
    let factory = fixed_width(factory, "factory address", ADDRESS_LEN).map(Address::from_slice)?;
    let salt = fixed_width(salt, "salt", SALT_LEN).map(B256::from_slice)?;
    Ok(resolve_counterfactual_address(factory, salt, init_code))
}

/// Computes the CREATE address of the contract deployed by `deployer` at `nonce`.
pub fn resolve_create_address(deployer: Address, nonce: u64) -> Address {
    deployer.create(nonce)
}

fn fixed_width<'a>(
    bytes: &'a [u8],
    field: &'static str,
    expected: usize,
) -> Result<&'a [u8], ShapeMismatchError> {
    if bytes.len() == expected {
        Ok(bytes)
    } else {
        Err(ShapeMismatchError { field, expected, actual: bytes.len() })
    }
}
