use core::fmt;

use serde::{Deserialize, Serialize};

use super::Phase;

/// A banned opcode executed inside a protected phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyViolation {
    /// The phase in which the violation occurred.
    pub phase: Phase,
    /// The offending mnemonics, one entry per occurrence in execution order, so a mnemonic may
    /// repeat.
    pub banned: Vec<String>,
    /// Every policed operation of the phase, in execution order.
    pub operations: Vec<String>,
}

impl fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} phase used banned opcodes {:?}: {:?}",
            self.phase, self.banned, self.operations
        )
    }
}

/// Error types for trace validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    /// The trace does not carry exactly two phase markers.
    #[error("expected NUMBER to appear exactly 2 times in the trace, found {actual}")]
    PhaseCount {
        /// Number of markers found.
        actual: usize,
    },
    /// A phase lacks the sentinel operation, so the trace was sliced incorrectly.
    #[error("{phase} phase contains no POP: {operations:?}")]
    PhaseEmpty {
        /// The malformed phase.
        phase: Phase,
        /// The policed operations of that phase.
        operations: Vec<String>,
    },
    /// A banned opcode executed inside a protected phase.
    #[error("{0}")]
    PolicyViolation(PolicyViolation),
}
