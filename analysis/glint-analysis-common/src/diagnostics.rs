//! Diagnostic emission contract.

use crate::events::Location;

/// Sink for rendered warnings, in the style of a compiler diagnostics
/// engine: a location, a message template and positional substitution
/// arguments (`%0`, `%1`, ...).
pub trait DiagnosticSink {
    fn warn(&mut self, location: &Location, template: &str, args: &[&str]);
}

/// Substitute `%0`, `%1`, ... placeholders with `args`.
pub fn render_template(template: &str, args: &[&str]) -> String {
    let mut message = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        message = message.replace(&format!("%{i}"), arg);
    }
    message
}
