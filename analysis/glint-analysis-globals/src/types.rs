//! Public types for single-use global analysis.

use glint_analysis_common::{render_template, Location};
use serde::{Deserialize, Serialize};

/// Warning template for a confined global, rendered with the variable name
/// (`%0`) and the sole referencing function (`%1`).
pub const BAD_GLOBAL_TEMPLATE: &str =
    "Bad Implementation of Global Variable '%0' Found in '%1'";

/// The analysis result for one translation unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// All confined globals found, ordered by declaration location.
    pub findings: Vec<Finding>,

    /// Analysis statistics.
    pub stats: Stats,
}

/// A global variable whose entire observed usage sits in one function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// The variable's declared name.
    pub variable: String,

    /// The variable's declaration site.
    pub location: Location,

    /// Display name of the only function referencing the variable.
    pub sole_function: String,
}

impl Finding {
    /// The rendered warning text.
    pub fn message(&self) -> String {
        render_template(BAD_GLOBAL_TEMPLATE, &[&self.variable, &self.sole_function])
    }
}

/// Analysis statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    /// Function definitions indexed in the declaration pass.
    pub functions_indexed: usize,

    /// Global variables tracked in the declaration pass.
    pub globals_tracked: usize,

    /// References attributed to a containing function.
    pub references_resolved: usize,

    /// References dropped (untracked target or outside every span).
    pub references_dropped: usize,

    /// Number of findings reported.
    pub findings_reported: usize,

    /// Analysis duration in milliseconds.
    pub duration_ms: u64,
}
