//! Reference-to-owner resolution.

use crate::span_index::SpanIndex;
use glint_analysis_common::DeclId;

/// Maps a reference line to the function owning it.
///
/// Thin wrapper over the span index, kept as its own seam so the
/// containment policy (currently innermost-span-wins) can change without
/// touching the aggregator.
pub(crate) struct OwnerResolver<'a> {
    index: &'a SpanIndex,
}

impl<'a> OwnerResolver<'a> {
    pub fn new(index: &'a SpanIndex) -> Self {
        Self { index }
    }

    /// The identity of the function whose span contains `line`, if any.
    pub fn resolve(&self, line: u32) -> Option<&'a DeclId> {
        self.index.lookup(line)
    }
}
