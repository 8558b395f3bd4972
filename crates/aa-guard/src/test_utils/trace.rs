//! A builder for assembling opcode traces.

use crate::{
    constants::trace::{PHASE_MARKER, PHASE_SENTINEL},
    Trace, TraceEntry,
};

/// Depth of the contract under test. Entries at depth 1 are not policed.
pub const INNER_DEPTH: u64 = 2;

/// A builder for assembling opcode traces in execution order.
#[derive(Debug, Default)]
pub struct TraceBuilder {
    entries: Vec<TraceEntry>,
}

impl TraceBuilder {
    /// Build the trace.
    pub fn build(self) -> Trace {
        Trace::new(self.entries)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trace is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry.
    pub fn op(mut self, mnemonic: &str, depth: u64) -> Self {
        let index = self.entries.len();
        self.entries.push(TraceEntry::new(mnemonic, depth, index));
        self
    }

    /// Append a series of entries at the same depth.
    pub fn ops<'a>(self, mnemonics: impl IntoIterator<Item = &'a str>, depth: u64) -> Self {
        mnemonics.into_iter().fold(self, |builder, mnemonic| builder.op(mnemonic, depth))
    }

    /// Append a series of entries inside the contract under test.
    pub fn inner<'a>(self, mnemonics: impl IntoIterator<Item = &'a str>) -> Self {
        self.ops(mnemonics, INNER_DEPTH)
    }

    /// Append a `POP` inside the contract under test.
    pub fn pop(self) -> Self {
        self.op(PHASE_SENTINEL, INNER_DEPTH)
    }

    /// Append a top-level `PUSH1` followed by a `NUMBER` marker. The `PUSH1` is the entry the
    /// validator skips before each marker.
    pub fn marker(self) -> Self {
        self.op("PUSH1", 1).op(PHASE_MARKER, 1)
    }

    /// Build a well-formed trace whose phases execute `primary` and `secondary` inside the
    /// contract under test. Each phase ends with a `POP`.
    pub fn phases(primary: &[&str], secondary: &[&str]) -> Trace {
        Self::default()
            .inner(primary.iter().copied())
            .pop()
            .marker()
            .inner(secondary.iter().copied())
            .pop()
            .marker()
            .build()
    }
}
