//! Fix command - apply the fixes rules attach to their violations.
//!
//! Only `prefer-inline-code-words-comments` produces fixes: each configured
//! word found outside inline code is wrapped in backticks.
//!
//! Use `--apply` to actually write the files (default is dry-run mode).

use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::FixCommand, exit_status::ExitStatus, report::SUCCESS_MARK};
use crate::{
    core::{LintContext, fixer::apply_fixes},
    issues::{CommentIssue, Issue},
};

/// Fixable issues grouped by file path.
type FixesByFile<'a> = BTreeMap<&'a str, Vec<&'a CommentIssue>>;

pub fn fix(cmd: FixCommand) -> Result<ExitStatus> {
    let ctx = LintContext::new(&cmd.common)?;
    let issues = ctx.lint();
    let by_file = group_fixes(&issues);

    let parse_error_count = issues
        .iter()
        .filter(|issue| matches!(issue, Issue::ParseError(_)))
        .count();
    if parse_error_count > 0 {
        eprintln!(
            "{} {} file(s) could not be parsed and were left untouched",
            "warning:".bold().yellow(),
            parse_error_count
        );
    }

    if by_file.is_empty() {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Checked {} source file(s) - nothing to fix", ctx.files.len()).green()
        );
        return Ok(ExitStatus::Success);
    }

    let fix_count: usize = by_file.values().map(Vec::len).sum();

    if !cmd.apply {
        preview_to(&ctx, &by_file, &mut io::stdout().lock())?;
        println!(
            "{} {} issue(s) in {} file(s).",
            "Would fix".yellow().bold(),
            fix_count,
            by_file.len()
        );
        println!("Run with {} to write these fixes.", "--apply".cyan());
        // Pending fixes in dry-run mode signal work to do.
        return Ok(ExitStatus::Failure);
    }

    let mut applied = 0;
    let mut skipped = 0;
    let mut files_modified = 0;
    for (path, file_issues) in &by_file {
        let Some(file) = ctx.parsed_files().get(*path) else {
            continue;
        };
        let output = apply_fixes(
            &file.source,
            file_issues.iter().filter_map(|issue| issue.violation.fix.as_ref()),
        );
        skipped += output.skipped;
        if !output.is_changed() {
            continue;
        }
        fs::write(path, file.to_file_contents(&output.output))
            .with_context(|| format!("Failed to write {}", path))?;
        tracing::debug!(file = %path, applied = output.applied, "fixed file");
        applied += output.applied;
        files_modified += 1;
    }

    println!(
        "{} {} issue(s) in {} file(s).",
        "Fixed".green().bold(),
        applied,
        files_modified
    );
    if skipped > 0 {
        println!("  - skipped: {} overlapping fix(es), run again to apply them", skipped);
    }

    Ok(ExitStatus::Success)
}

fn group_fixes(issues: &[Issue]) -> FixesByFile<'_> {
    let mut by_file: FixesByFile = BTreeMap::new();
    for issue in issues {
        if let Issue::Comment(comment) = issue
            && comment.violation.fix.is_some()
        {
            by_file
                .entry(comment.file_path.as_str())
                .or_default()
                .push(comment);
        }
    }
    by_file
}

/// Print every pending fix as `path:line:col  before -> after`.
fn preview_to<W: Write>(ctx: &LintContext, by_file: &FixesByFile, writer: &mut W) -> Result<()> {
    for (path, file_issues) in by_file {
        let Some(file) = ctx.parsed_files().get(*path) else {
            continue;
        };
        for issue in file_issues {
            let Some(fix) = &issue.violation.fix else {
                continue;
            };
            let before = file.source.get(fix.range.clone()).unwrap_or_default();
            let location = issue.violation.location;
            writeln!(
                writer,
                "{}:{}:{}  {} {} {}",
                path,
                location.line,
                location.column + 1,
                before.red(),
                "->".dimmed(),
                fix.text.as_str().green()
            )?;
        }
    }
    writeln!(writer)?;
    Ok(())
}
