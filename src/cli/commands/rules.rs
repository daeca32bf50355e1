use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use super::super::exit_status::ExitStatus;
use crate::rules::{ALL_RULES, Fixable, RuleMeta, RuleSeverity};

pub fn rules() -> Result<ExitStatus> {
    print_rules_to(ALL_RULES, &mut io::stdout().lock())?;
    Ok(ExitStatus::Success)
}

/// Print the rule table: name, default severity, flags, description and docs.
pub fn print_rules_to<W: Write>(rules: &[&RuleMeta], writer: &mut W) -> Result<()> {
    let name_width = rules.iter().map(|meta| meta.name.len()).max().unwrap_or(0);

    for meta in rules {
        let severity = format!("{:<5}", meta.default_severity.to_string());
        let severity = match meta.default_severity {
            RuleSeverity::Error => severity.red(),
            RuleSeverity::Warn => severity.yellow(),
            RuleSeverity::Off => severity.dimmed(),
        };
        let recommended = if meta.recommended { "recommended" } else { "" };
        let fixable = match meta.fixable {
            Fixable::Code => "fixable",
            Fixable::No => "",
        };

        writeln!(
            writer,
            "{:<name_width$}  {}  {:<11}  {:<7}  {}",
            meta.name.bold(),
            severity,
            recommended,
            fixable,
            meta.description,
            name_width = name_width
        )?;
        writeln!(
            writer,
            "{:<name_width$}  {}",
            "",
            meta.docs_url().dimmed(),
            name_width = name_width
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_table_lists_every_rule() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_rules_to(ALL_RULES, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), ALL_RULES.len() * 2);
        assert!(lines[0].starts_with("enforce-header-comment"));
        assert!(lines[0].contains("error  recommended"));
        assert!(lines[1].trim_start().starts_with("https://"));

        let inline_code = lines
            .iter()
            .find(|line| line.starts_with("prefer-inline-code-words-comments"))
            .unwrap();
        assert!(inline_code.contains("fixable"));
        assert!(output.contains("disallow tag comments"));
    }
}
