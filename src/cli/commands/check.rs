use anyhow::Result;

use super::super::{
    args::{CheckCommand, OutputFormat},
    exit_status::ExitStatus,
    report,
};
use super::helper::finish;
use crate::core::LintContext;

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = LintContext::new(&cmd.common)?;
    let result = finish(ctx.lint(), ctx.files.len());
    tracing::debug!(
        errors = result.error_count,
        warnings = result.warning_count,
        parse_errors = result.parse_error_count,
        "check finished"
    );

    match cmd.format {
        OutputFormat::Pretty => report::print(&result),
        OutputFormat::Json => report::print_json(&result.issues)?,
    }

    Ok(result.exit_status())
}
