//! Diagnostic rendering for the CLI.

use glint_analysis_common::{render_template, DiagnosticSink, Location};
use glint_analysis_globals::Report;
use serde::Serialize;
use std::path::PathBuf;

/// One analyzed translation unit and its report, for JSON output.
#[derive(Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    #[serde(flatten)]
    pub report: Report,
}

/// Renders warnings compiler-style on stderr:
/// `file:line:column: warning: <message>`.
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn warn(&mut self, location: &Location, template: &str, args: &[&str]) {
        eprintln!("{}", format_warning(location, template, args));
    }
}

pub(crate) fn format_warning(location: &Location, template: &str, args: &[&str]) -> String {
    // Columns are stored 0-indexed; compilers print them 1-based.
    format!(
        "{}:{}:{}: warning: {}",
        location.file.display(),
        location.line,
        location.column + 1,
        render_template(template, args)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn warnings_render_compiler_style() {
        let location = Location {
            file: PathBuf::from("src/main.c"),
            line: 7,
            column: 4,
        };
        let rendered = format_warning(&location, "'%0' confined to '%1'", &["counter", "tick"]);
        assert_eq!(
            rendered,
            "src/main.c:7:5: warning: 'counter' confined to 'tick'"
        );
    }
}
