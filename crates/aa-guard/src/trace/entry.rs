use core::ops::Deref;

use alloy_rpc_types_trace::geth::{DefaultFrame, StructLog};
use serde::{Deserialize, Serialize};

/// One executed instruction of an opcode trace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceEntry {
    /// The instruction mnemonic, e.g. `STATICCALL`.
    #[serde(alias = "op")]
    pub operation: String,
    /// Call depth at which the instruction executed. The outermost frame is depth 1.
    pub depth: u64,
    /// Position of the entry in the trace.
    #[serde(default)]
    pub index: usize,
}

impl TraceEntry {
    /// Creates an entry.
    pub fn new(operation: impl Into<String>, depth: u64, index: usize) -> Self {
        Self { operation: operation.into(), depth, index }
    }

    /// Whether the entry executed the given mnemonic.
    pub fn is(&self, mnemonic: &str) -> bool {
        self.operation == mnemonic
    }
}

/// An ordered, immutable opcode trace. Entry indices always equal their position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<TraceEntry>", into = "Vec<TraceEntry>")]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    /// Creates a trace from entries in execution order, renumbering them by position.
    pub fn new(entries: Vec<TraceEntry>) -> Self {
        let mut entries = entries;
        for (index, entry) in entries.iter_mut().enumerate() {
            entry.index = index;
        }
        Self { entries }
    }

    /// Builds a trace from geth struct logs.
    pub fn from_struct_logs<'a>(logs: impl IntoIterator<Item = &'a StructLog>) -> Self {
        logs.into_iter().map(|log| (log.op.to_string(), log.depth)).collect()
    }

    /// The entries in execution order.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Consumes the trace, returning its entries.
    pub fn into_entries(self) -> Vec<TraceEntry> {
        self.entries
    }
}

impl Deref for Trace {
    type Target = [TraceEntry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl From<Vec<TraceEntry>> for Trace {
    fn from(entries: Vec<TraceEntry>) -> Self {
        Self::new(entries)
    }
}

impl From<Trace> for Vec<TraceEntry> {
    fn from(trace: Trace) -> Self {
        trace.entries
    }
}

impl From<&DefaultFrame> for Trace {
    fn from(frame: &DefaultFrame) -> Self {
        Self::from_struct_logs(&frame.struct_logs)
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Trace {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        iter.into_iter()
            .enumerate()
            .map(|(index, (operation, depth))| TraceEntry::new(operation, depth, index))
            .collect::<Vec<_>>()
            .into()
    }
}
