//! Report building and diagnostic emission.

use crate::registry::GlobalRegistry;
use crate::span_index::SpanIndex;
use crate::types::{Finding, Report, BAD_GLOBAL_TEMPLATE};
use glint_analysis_common::DiagnosticSink;

/// Select every tracked global referenced by exactly one function.
///
/// Zero-reference globals carry no usage information and stay out of the
/// report; globals referenced from two or more functions are legitimate
/// shared state.
pub(crate) fn build(registry: &GlobalRegistry, index: &SpanIndex) -> Vec<Finding> {
    let mut findings = Vec::new();

    for global in registry.iter() {
        if global.referenced_by.len() != 1 {
            continue;
        }
        let Some(owner) = global.referenced_by.iter().next() else {
            continue;
        };
        let sole_function = index
            .display_name(owner)
            .unwrap_or("<unknown>")
            .to_string();

        findings.push(Finding {
            variable: global.decl.name.clone(),
            location: global.decl.location.clone(),
            sole_function,
        });
    }

    // Registry iteration order is arbitrary; order by declaration site for
    // reproducible output.
    findings.sort_by(|a, b| {
        a.location
            .cmp(&b.location)
            .then_with(|| a.variable.cmp(&b.variable))
    });

    findings
}

/// Send one warning per finding to the sink, with the variable name and the
/// sole referencing function as substitution arguments.
pub fn emit(report: &Report, sink: &mut dyn DiagnosticSink) {
    for finding in &report.findings {
        sink.warn(
            &finding.location,
            BAD_GLOBAL_TEMPLATE,
            &[&finding.variable, &finding.sole_function],
        );
    }
}
