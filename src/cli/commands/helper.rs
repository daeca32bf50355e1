use super::CommandResult;
use crate::issues::{Issue, Report, Severity};

pub fn finish(mut issues: Vec<Issue>, files_checked: usize) -> CommandResult {
    issues.sort_by(Issue::report_order);

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();
    let error_count = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    CommandResult {
        issues,
        error_count,
        warning_count,
        parse_error_count,
        files_checked,
    }
}
