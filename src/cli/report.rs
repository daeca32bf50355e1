//! Report formatting and printing utilities.
//!
//! Issues are printed cargo-style for humans, or as a JSON array for tools.
//! Kept apart from the lint engine so cmtlint can be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::commands::CommandResult;
use crate::core::violation::{Fix, MessageId};
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a lint result in the pretty format to stdout.
pub fn print(result: &CommandResult) {
    let mut stdout = io::stdout().lock();
    if result.issues.is_empty() {
        print_success_to(result.files_checked, &mut stdout);
    } else {
        report_to(&result.issues, &mut stdout);
    }
}

/// Print issues in cargo-style format to a custom writer.
///
/// `issues` are expected to be sorted already.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);
    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no issues found",
            source_files,
            if source_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

// ============================================================
// JSON output
// ============================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonIssue<'a> {
    file: &'a str,
    /// 1-based; `None` for file-level issues.
    line: Option<usize>,
    /// 1-based; `None` for file-level issues.
    column: Option<usize>,
    severity: String,
    rule: &'a str,
    message_id: Option<MessageId>,
    message: String,
    fix: Option<&'a Fix>,
}

impl<'a> From<&'a Issue> for JsonIssue<'a> {
    fn from(issue: &'a Issue) -> Self {
        let location = issue.location();
        let message_id = match issue {
            Issue::Comment(comment) => Some(comment.violation.message_id),
            Issue::ParseError(_) => None,
        };
        Self {
            file: issue.file_path(),
            line: location.map(|loc| loc.line),
            column: location.map(|loc| loc.column + 1),
            severity: issue.report_severity().to_string(),
            rule: issue.report_rule(),
            message_id,
            message: issue.message(),
            fix: issue.fix(),
        }
    }
}

/// Print issues as a pretty JSON array to stdout.
pub fn print_json(issues: &[Issue]) -> Result<()> {
    report_json_to(issues, &mut io::stdout().lock())
}

/// Print issues as a pretty JSON array to a custom writer.
pub fn report_json_to<W: Write>(issues: &[Issue], writer: &mut W) -> Result<()> {
    let json: Vec<JsonIssue> = issues.iter().map(JsonIssue::from).collect();
    serde_json::to_writer_pretty(&mut *writer, &json).context("Failed to write JSON report")?;
    writeln!(writer)?;
    Ok(())
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().dimmed().cyan()
    );

    let Some(location) = issue.location() else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path());
        let _ = writeln!(writer);
        return;
    };

    // Clickable location: --> path:line:col (col is 1-based)
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        issue.file_path(),
        location.line,
        location.column + 1
    );

    if let Some(source_line) = issue.source_line() {
        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            location.line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        let prefix: String = source_line.chars().take(location.column).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let span: String = source_line
            .chars()
            .skip(location.column)
            .take(issue.span_length().unwrap_or(1))
            .collect();
        let carets = "^".repeat(UnicodeWidthStr::width(span.as_str()).max(1));
        let carets = match severity {
            Severity::Error => carets.as_str().red(),
            Severity::Warning => carets.as_str().yellow(),
        };
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            carets,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(fix) = issue.fix() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} replace with {}",
            "",
            "=".blue(),
            "help:".bold().cyan(),
            fix.text,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;
    let fixable = issues.iter().filter(|i| i.fix().is_some()).count();

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
    if fixable > 0 {
        let _ = writeln!(
            writer,
            "  {} potentially fixable with {}",
            fixable,
            "cmtlint fix --apply".cyan()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| i.location().map(|loc| loc.line))
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}
