use core::fmt;

use alloy_sol_types::sol;

use crate::constants::selectors;

sol! {
    /// `EntryPoint` v0.6 validation failure.
    #[derive(Debug, PartialEq, Eq)]
    error FailedOp(uint256 opIndex, address paymaster, string reason);
}

/// Errors of the v0.7 and later `EntryPoint`, which dropped the paymaster argument.
pub mod v07 {
    use alloy_sol_types::sol;

    sol! {
        /// `EntryPoint` v0.7 validation failure.
        #[derive(Debug, PartialEq, Eq)]
        error FailedOp(uint256 opIndex, string reason);
    }
}

/// The closed set of revert selectors the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevertSelector {
    /// `Error(string)`
    Error,
    /// `FailedOp(uint256,address,string)`
    FailedOp,
    /// `FailedOp(uint256,string)`
    FailedOpV07,
    /// `Panic(uint256)`
    Panic,
}

impl RevertSelector {
    /// All known selectors.
    pub const ALL: [Self; 4] = [Self::Error, Self::FailedOp, Self::FailedOpV07, Self::Panic];

    /// Looks up the selector of a payload.
    pub const fn from_bytes(selector: [u8; 4]) -> Option<Self> {
        match selector {
            selectors::ERROR => Some(Self::Error),
            selectors::FAILED_OP => Some(Self::FailedOp),
            selectors::FAILED_OP_V07 => Some(Self::FailedOpV07),
            selectors::PANIC => Some(Self::Panic),
            _ => None,
        }
    }

    /// The four selector bytes.
    pub const fn bytes(self) -> [u8; 4] {
        match self {
            Self::Error => selectors::ERROR,
            Self::FailedOp => selectors::FAILED_OP,
            Self::FailedOpV07 => selectors::FAILED_OP_V07,
            Self::Panic => selectors::PANIC,
        }
    }

    /// The Solidity signature of the error.
    pub const fn signature(self) -> &'static str {
        match self {
            Self::Error => "Error(string)",
            Self::FailedOp => "FailedOp(uint256,address,string)",
            Self::FailedOpV07 => "FailedOp(uint256,string)",
            Self::Panic => "Panic(uint256)",
        }
    }
}

impl fmt::Display for RevertSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.signature())
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::keccak256;
    use alloy_sol_types::{Panic, Revert, SolError};

    use super::*;

    #[test]
    fn test_selectors_match_signatures() {
        for selector in RevertSelector::ALL {
            let hash = keccak256(selector.signature());
            assert_eq!(hash[..4], selector.bytes(), "{selector}");
            assert_eq!(RevertSelector::from_bytes(selector.bytes()), Some(selector));
        }
    }

    #[test]
    fn test_selectors_match_sol_bindings() {
        assert_eq!(Revert::SELECTOR, RevertSelector::Error.bytes());
        assert_eq!(Panic::SELECTOR, RevertSelector::Panic.bytes());
        assert_eq!(FailedOp::SELECTOR, RevertSelector::FailedOp.bytes());
        assert_eq!(v07::FailedOp::SELECTOR, RevertSelector::FailedOpV07.bytes());
    }

    #[test]
    fn test_unknown_selector() {
        assert_eq!(RevertSelector::from_bytes([0xde, 0xad, 0xbe, 0xef]), None);
    }
}
