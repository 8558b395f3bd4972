//! Banned opcode bitflags.

use core::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Set of opcodes forbidden inside a protected phase.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BannedOps: u8 {
        /// Remaining gas (GAS opcode)
        const GAS = 1 << 0;
        /// Base fee per gas (BASEFEE opcode)
        const BASEFEE = 1 << 1;
        /// Gas price of the transaction (GASPRICE opcode)
        const GASPRICE = 1 << 2;
        /// Block number (NUMBER opcode)
        const NUMBER = 1 << 3;
    }
}

impl BannedOps {
    /// Opcodes banned in the primary validation phase.
    pub const PRIMARY: Self =
        Self::GAS.union(Self::BASEFEE).union(Self::GASPRICE).union(Self::NUMBER);

    /// Opcodes banned in the secondary phase. `GAS` is allowed there.
    pub const SECONDARY: Self = Self::BASEFEE.union(Self::GASPRICE).union(Self::NUMBER);

    /// Maps a mnemonic to its flag, if the opcode is one the policy knows about.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::from_name(mnemonic)
    }

    /// Whether `mnemonic` is in the set.
    pub fn bans(self, mnemonic: &str) -> bool {
        Self::from_mnemonic(mnemonic).is_some_and(|op| self.contains(op))
    }
}

/// The protected phases of a validation trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Everything before the first marker.
    Primary,
    /// Everything between the two markers.
    Secondary,
}

impl Phase {
    /// The opcodes banned in this phase.
    pub const fn banned_ops(self) -> BannedOps {
        match self {
            Self::Primary => BannedOps::PRIMARY,
            Self::Secondary => BannedOps::SECONDARY,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Secondary => f.write_str("secondary"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets() {
        assert_eq!(BannedOps::PRIMARY, BannedOps::all());
        assert!(!BannedOps::SECONDARY.contains(BannedOps::GAS));
        assert_eq!(BannedOps::PRIMARY.difference(BannedOps::SECONDARY), BannedOps::GAS);
    }

    #[test]
    fn test_mnemonics() {
        assert_eq!(BannedOps::from_mnemonic("BASEFEE"), Some(BannedOps::BASEFEE));
        assert_eq!(BannedOps::from_mnemonic("SLOAD"), None);
        assert_eq!(BannedOps::from_mnemonic("basefee"), None);
        assert!(BannedOps::PRIMARY.bans("GAS"));
        assert!(!BannedOps::SECONDARY.bans("GAS"));
        assert!(Phase::Secondary.banned_ops().bans("NUMBER"));
        assert!(!Phase::Primary.banned_ops().bans("POP"));
    }
}
