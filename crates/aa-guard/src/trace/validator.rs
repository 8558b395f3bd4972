use core::{fmt, ops::Range};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{Phase, PolicyViolation, TraceEntry, TraceError};
use crate::constants::trace::{CALL_FAMILY, GAS, MAX_UNPOLICED_DEPTH, PHASE_MARKER, PHASE_SENTINEL};

/// Result of a completed validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ValidationOutcome {
    /// Neither phase used a banned opcode.
    Valid,
    /// A phase used a banned opcode.
    Violation(PolicyViolation),
}

impl ValidationOutcome {
    /// Whether the trace passed.
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The violation, if any.
    pub const fn violation(&self) -> Option<&PolicyViolation> {
        match self {
            Self::Valid => None,
            Self::Violation(violation) => Some(violation),
        }
    }

    /// Converts a violation into [`TraceError::PolicyViolation`].
    pub fn into_result(self) -> Result<(), TraceError> {
        match self {
            Self::Valid => Ok(()),
            Self::Violation(violation) => Err(TraceError::PolicyViolation(violation)),
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::Violation(violation) => fmt::Display::fmt(violation, f),
        }
    }
}

/// Checks the validation phases of an opcode trace against the banned-opcode policy.
///
/// The trace is split at its two `NUMBER` markers. The primary phase ends one entry before the
/// first marker and the secondary phase spans from just after the first marker to one entry
/// before the second, so the instruction that consumes each marker's result is not policed.
/// Only entries below the top-level frame are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpcodeTraceValidator {
    check_secondary_phase: bool,
}

impl OpcodeTraceValidator {
    /// Creates a validator that polices the primary phase only.
    pub const fn new() -> Self {
        Self { check_secondary_phase: false }
    }

    /// Enables or disables the secondary-phase policy.
    pub const fn check_secondary_phase(mut self, enabled: bool) -> Self {
        self.check_secondary_phase = enabled;
        self
    }

    /// Whether the secondary-phase policy is enabled.
    pub const fn checks_secondary_phase(&self) -> bool {
        self.check_secondary_phase
    }

    /// Validates a trace.
    ///
    /// Returns an error if the trace is malformed: it does not carry exactly two markers, or a
    /// phase lacks a `POP`. The primary phase is checked first. A well-formed trace yields a
    /// [`ValidationOutcome`].
    pub fn validate(&self, trace: &[TraceEntry]) -> Result<ValidationOutcome, TraceError> {
        let markers = trace
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is(PHASE_MARKER))
            .map(|(position, _)| position)
            .collect::<Vec<_>>();
        let &[first, second] = markers.as_slice() else {
            return Err(TraceError::PhaseCount { actual: markers.len() });
        };

        let primary_window = 0..first.saturating_sub(1);
        let secondary_window = first + 1..second.saturating_sub(1);
        debug!(?primary_window, ?secondary_window, len = trace.len(), "Sliced validation phases");

        let primary = policed(trace, primary_window);
        let secondary = policed(trace, secondary_window);
        ensure_sentinel(Phase::Primary, &primary)?;
        ensure_sentinel(Phase::Secondary, &secondary)?;

        if let Some(violation) = check_phase(Phase::Primary, &primary) {
            return Ok(ValidationOutcome::Violation(violation));
        }
        if self.check_secondary_phase {
            if let Some(violation) = check_phase(Phase::Secondary, &secondary) {
                return Ok(ValidationOutcome::Violation(violation));
            }
        }
        Ok(ValidationOutcome::Valid)
    }
}

/// Validates a trace. See [`OpcodeTraceValidator::validate`].
pub fn validate_trace(
    trace: &[TraceEntry],
    check_secondary_phase: bool,
) -> Result<ValidationOutcome, TraceError> {
    OpcodeTraceValidator::new().check_secondary_phase(check_secondary_phase).validate(trace)
}

/// The entries of `window` that execute below the top-level frame. An inverted window is empty.
fn policed(trace: &[TraceEntry], window: Range<usize>) -> Vec<&TraceEntry> {
    trace
        .get(window)
        .unwrap_or_default()
        .iter()
        .filter(|entry| entry.depth > MAX_UNPOLICED_DEPTH)
        .collect()
}

fn mnemonics(entries: &[&TraceEntry]) -> Vec<String> {
    entries.iter().map(|entry| entry.operation.clone()).collect()
}

fn ensure_sentinel(phase: Phase, entries: &[&TraceEntry]) -> Result<(), TraceError> {
    if entries.iter().any(|entry| entry.is(PHASE_SENTINEL)) {
        return Ok(());
    }
    Err(TraceError::PhaseEmpty { phase, operations: mnemonics(entries) })
}

fn check_phase(phase: Phase, entries: &[&TraceEntry]) -> Option<PolicyViolation> {
    let banned_ops = phase.banned_ops();
    let banned = entries
        .iter()
        .enumerate()
        .filter(|(position, entry)| {
            banned_ops.bans(&entry.operation) && !precedes_call(entries, *position)
        })
        .map(|(_, entry)| {
            trace!(%phase, op = %entry.operation, index = entry.index, "Banned opcode");
            entry.operation.clone()
        })
        .collect::<Vec<_>>();

    if banned.is_empty() {
        return None;
    }
    debug!(%phase, ?banned, "Validation phase used banned opcodes");
    Some(PolicyViolation { phase, banned, operations: mnemonics(entries) })
}

/// Whether the entry at `position` is a `GAS` immediately followed by a call.
fn precedes_call(entries: &[&TraceEntry], position: usize) -> bool {
    entries[position].is(GAS) &&
        entries.get(position + 1).is_some_and(|next| next.operation.contains(CALL_FAMILY))
}
