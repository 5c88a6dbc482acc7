//! Function span indexing and containment lookup.

use glint_analysis_common::{DeclId, FunctionDecl, LineSpan};
use std::collections::HashMap;
use tracing::debug;

/// Index of function definitions keyed by declaration identity.
///
/// A display name may describe several records (same-named `static` helpers,
/// overload sets); they stay distinct here because the key is the identity,
/// and the name is only kept for rendering messages.
pub(crate) struct SpanIndex {
    records: Vec<SpanRecord>,
    names: HashMap<DeclId, String>,
}

struct SpanRecord {
    id: DeclId,
    span: LineSpan,
}

impl SpanIndex {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            names: HashMap::new(),
        }
    }

    /// Index one function definition.
    ///
    /// Header-resident declarations are never indexed. Declarations whose
    /// span did not resolve, or resolved inverted, cannot own any line and
    /// are skipped.
    pub fn record(&mut self, decl: &FunctionDecl) -> bool {
        if decl.in_header {
            return false;
        }
        let Some(span) = decl.span else {
            debug!(function = %decl.name, "span did not resolve, not indexed");
            return false;
        };
        if span.is_empty() {
            debug!(function = %decl.name, start = span.start, end = span.end, "inverted span, not indexed");
            return false;
        }
        self.names.insert(decl.id.clone(), decl.name.clone());
        self.records.push(SpanRecord {
            id: decl.id.clone(),
            span,
        });
        true
    }

    /// Find the function owning `line`.
    ///
    /// When spans overlap, the innermost (smallest) containing span wins,
    /// so a reference inside a nested definition resolves to the nested
    /// function. Equal-sized candidates go to the first recorded.
    pub fn lookup(&self, line: u32) -> Option<&DeclId> {
        let mut best: Option<&SpanRecord> = None;
        for record in &self.records {
            if !record.span.contains(line) {
                continue;
            }
            match best {
                Some(current) if record.span.len() >= current.span.len() => {}
                _ => best = Some(record),
            }
        }
        best.map(|record| &record.id)
    }

    /// Display name of an indexed function.
    pub fn display_name(&self, id: &DeclId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
