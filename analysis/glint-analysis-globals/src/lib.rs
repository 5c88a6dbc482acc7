//! Single-use global variable analysis.
//!
//! This crate flags global (static-storage) variables whose entire observed
//! usage sits inside one function, suggesting the variable could be that
//! function's local instead. It works in three steps:
//! 1. Index every function definition's line span and every global-storage
//!    variable declaration (declaration pass)
//! 2. Resolve each identifier use to the innermost function span containing
//!    it, and record the owning function against the variable (reference
//!    pass)
//! 3. Report every variable whose referencing-function set has exactly one
//!    member
//!
//! Running the passes in this order makes resolution independent of
//! traversal order: a reference into a function defined later in the file
//! still resolves, because every span is indexed before the first reference
//! is looked at.
//!
//! # Example
//!
//! ```ignore
//! use glint_analysis_globals::GlobalsAnalyzer;
//! use glint_lang_c::CTranslationUnit;
//!
//! let unit = CTranslationUnit::parse(path, &source)?;
//! let report = GlobalsAnalyzer::analyze(&unit)?;
//! for finding in &report.findings {
//!     println!("{}:{}: {}", finding.location.file.display(), finding.location.line, finding.message());
//! }
//! ```

mod aggregate;
mod error;
mod registry;
mod report;
mod resolve;
mod span_index;
mod types;

pub use error::Error;
pub use report::emit;
pub use types::*;

use glint_analysis_common::FrontEnd;
use registry::GlobalRegistry;
use resolve::OwnerResolver;
use span_index::SpanIndex;
use std::time::Instant;
use tracing::{debug, info};

/// Per-translation-unit analyzer.
///
/// All state lives inside one `analyze` call, so a batch driver gets
/// independent results per unit by construction.
pub struct GlobalsAnalyzer;

impl GlobalsAnalyzer {
    /// Analyze one translation unit for single-use globals.
    pub fn analyze(front_end: &dyn FrontEnd) -> Result<Report, Error> {
        let start = Instant::now();

        // 1. Declaration pass: function spans and tracked globals
        let decls = front_end.declarations()?;

        let mut index = SpanIndex::new();
        for function in &decls.functions {
            index.record(function);
        }

        let mut registry = GlobalRegistry::new();
        for variable in &decls.variables {
            registry.track(variable);
        }
        info!(
            functions = index.len(),
            globals = registry.len(),
            "Indexed declarations"
        );

        if registry.is_empty() {
            return Ok(Report {
                findings: vec![],
                stats: Stats {
                    functions_indexed: index.len(),
                    globals_tracked: 0,
                    references_resolved: 0,
                    references_dropped: 0,
                    findings_reported: 0,
                    duration_ms: start.elapsed().as_millis() as u64,
                },
            });
        }

        // 2. Reference pass
        let events = front_end.references()?;
        let resolver = OwnerResolver::new(&index);
        let aggregated = aggregate::run(&mut registry, &resolver, &events);
        debug!(
            resolved = aggregated.resolved,
            dropped = aggregated.dropped,
            "Aggregated references"
        );

        // 3. Report
        let findings = report::build(&registry, &index);
        info!(count = findings.len(), "Analysis complete");

        Ok(Report {
            stats: Stats {
                functions_indexed: index.len(),
                globals_tracked: registry.len(),
                references_resolved: aggregated.resolved,
                references_dropped: aggregated.dropped,
                findings_reported: findings.len(),
                duration_ms: start.elapsed().as_millis() as u64,
            },
            findings,
        })
    }
}
