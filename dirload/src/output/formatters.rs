//! Output formatter implementations.

use std::fmt::Write as _;

use crate::operations::{AutoloadOutcome, PlannedAutoload};
use crate::{Error, Result};

use super::OutputFormatter;

/// Characters that force an argument into double quotes.
fn needs_quoting(c: char) -> bool {
    c.is_whitespace() || matches!(c, '"' | '\'' | '\\' | '#' | ';')
}

/// Quote a single argument for the player's input command syntax.
///
/// Plain arguments are left alone. Anything else is wrapped in double
/// quotes with `"`, `\` and control characters escaped.
///
/// # Examples
///
/// ```
/// use dirload::output::quote_argument;
///
/// assert_eq!(quote_argument("ep1.mkv"), "ep1.mkv");
/// assert_eq!(quote_argument("my show/ep 1.mkv"), "\"my show/ep 1.mkv\"");
/// assert_eq!(quote_argument(r"C:\a.mkv"), r#""C:\\a.mkv""#);
/// assert_eq!(quote_argument(""), "\"\"");
/// ```
#[must_use]
pub fn quote_argument(arg: &str) -> String {
    if !arg.is_empty() && !arg.contains(needs_quoting) {
        return arg.to_string();
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &AutoloadOutcome) -> Result<String> {
        serde_json::to_string_pretty(outcome).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for player input commands, one per line.
///
/// Outcomes without a plan produce no commands.
pub struct CommandsFormatter;

impl OutputFormatter for CommandsFormatter {
    fn format(&self, outcome: &AutoloadOutcome) -> Result<String> {
        let AutoloadOutcome::Planned(planned) = outcome else {
            return Ok(String::new());
        };

        let lines: Vec<String> = planned
            .plan
            .actions
            .iter()
            .map(|action| {
                action
                    .command()
                    .iter()
                    .map(|arg| quote_argument(arg))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl HumanFormatter {
    fn format_planned(planned: &PlannedAutoload) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", planned.plan.description);

        let _ = writeln!(out, "Playlist:");
        for (index, entry) in planned.entries.iter().enumerate() {
            let marker = if index == planned.current { '>' } else { ' ' };
            let _ = writeln!(out, "  {marker} {entry}");
        }

        let _ = writeln!(out, "Actions:");
        for action in &planned.plan.actions {
            let _ = writeln!(out, "  {}", action.description());
        }

        for warning in &planned.plan.warnings {
            let _ = writeln!(out, "Warning: {warning}");
        }
        out.trim_end().to_string()
    }
}

impl OutputFormatter for HumanFormatter {
    fn format(&self, outcome: &AutoloadOutcome) -> Result<String> {
        Ok(match outcome {
            AutoloadOutcome::Skipped { reason } => format!("Skipped: {reason}"),
            AutoloadOutcome::NoMedia { dir } => format!("No media files found in {dir}"),
            AutoloadOutcome::Planned(planned) => Self::format_planned(planned),
        })
    }
}
