//! Revert payload decoding.
//!
//! A failed call returns an opaque payload: a four-byte selector followed by the ABI-encoded
//! arguments of a Solidity error. The decoder recognises a closed set of selectors (see
//! [`RevertSelector`]) and turns a payload into a [`DecodedOutcome`]. In lenient mode decoding is
//! total, since payloads that match no selector become [`DecodedOutcome::Unknown`]. A payload
//! whose selector is known but whose arguments do not parse is always reported as
//! [`DecodeError::ShapeMismatch`], so callers can tell it apart from an unknown selector.

mod decoder;
mod error;
mod panic;
mod selector;

pub use decoder::*;
pub use error::*;
pub use panic::*;
pub use selector::*;
