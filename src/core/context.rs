use std::{
    cell::OnceCell,
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, EnabledRule, load_config},
    core::{comments::SourceFile, file_scanner::scan_files, parsers::parse_source},
    issues::{CommentIssue, Issue, ParseErrorIssue, Severity},
    rules::CommentRule,
};

/// Parsed source files plus the files that failed to read or parse.
struct ParsedFiles {
    files: BTreeMap<String, SourceFile>,
    errors: Vec<ParseErrorIssue>,
}

/// Everything one lint run works on.
///
/// Configuration is loaded and the rules are built eagerly, so a bad config
/// fails before any file is touched. Files are parsed lazily on first access.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--source-root`)
/// 2. `.cmtlintrc.json` config file
/// 3. Built-in defaults
pub struct LintContext {
    pub config: Config,
    /// Directory scanned for source files.
    pub root_dir: PathBuf,
    /// All source files to lint, sorted.
    pub files: BTreeSet<String>,
    pub rules: Vec<EnabledRule>,
    pub verbose: bool,
    parsed_files: OnceCell<ParsedFiles>,
}

impl LintContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let search_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&search_dir)?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .cmtlintrc.json found, using default configuration");
        }
        let config = config_result.config;

        let root_dir = match &common_args.source_root {
            Some(root) => root.clone(),
            None => PathBuf::from(&config.source_root),
        };
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let rules = config.enabled_rules()?;
        tracing::debug!(
            rules = ?rules.iter().map(|enabled| enabled.rule.name()).collect::<Vec<_>>(),
            "enabled rules"
        );

        let scan_result = scan_files(path, &config.includes, &config.ignores, verbose);
        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            rules,
            verbose,
            parsed_files: OnceCell::new(),
        })
    }

    /// Build a context over an explicit file set.
    pub fn with_files(config: Config, root_dir: &Path, files: BTreeSet<String>) -> Result<Self> {
        let rules = config.enabled_rules()?;
        Ok(Self {
            config,
            root_dir: root_dir.to_path_buf(),
            files,
            rules,
            verbose: false,
            parsed_files: OnceCell::new(),
        })
    }

    fn parsed(&self) -> &ParsedFiles {
        self.parsed_files.get_or_init(|| {
            // Each file gets its own swc globals and source map, so reading and
            // parsing run fully in parallel.
            let results: Vec<(String, Result<SourceFile>)> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let parsed = std::fs::read_to_string(file_path)
                        .with_context(|| format!("Failed to read file: {}", file_path))
                        .and_then(|code| parse_source(code, file_path));
                    (file_path.clone(), parsed)
                })
                .collect();

            let mut files = BTreeMap::new();
            let mut errors = Vec::new();
            for (file_path, result) in results {
                match result {
                    Ok(file) => {
                        files.insert(file_path, file);
                    }
                    Err(e) => {
                        tracing::debug!(file = %file_path, error = %e, "skipping unparsable file");
                        if self.verbose {
                            eprintln!("Warning: {} - {}", file_path, e);
                        }
                        errors.push(ParseErrorIssue {
                            file_path,
                            error: e.to_string(),
                        });
                    }
                }
            }
            ParsedFiles { files, errors }
        })
    }

    /// Parsed source files, keyed by path.
    pub fn parsed_files(&self) -> &BTreeMap<String, SourceFile> {
        &self.parsed().files
    }

    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.parsed().errors
    }

    /// Run every enabled rule over every parsed file.
    ///
    /// Files are linted in parallel; the result is sorted by file and
    /// position and includes one issue per unparsable file.
    pub fn lint(&self) -> Vec<Issue> {
        let rules = &self.rules;
        let mut issues: Vec<Issue> = self
            .parsed_files()
            .par_iter()
            .flat_map_iter(|(_, file)| lint_file(file, rules))
            .collect();

        issues.extend(self.parse_errors().iter().cloned().map(Issue::ParseError));
        issues.sort_by(Issue::report_order);
        issues
    }
}

/// Run `rules` over one file and bind the violations to it.
pub fn lint_file(file: &SourceFile, rules: &[EnabledRule]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for enabled in rules {
        let Some(severity) = Severity::from_rule_severity(enabled.severity) else {
            continue;
        };
        let violations = enabled.rule.check(file);
        tracing::debug!(
            file = %file.path,
            rule = enabled.rule.name(),
            count = violations.len(),
            "rule finished"
        );
        issues.extend(violations.into_iter().map(|violation| {
            Issue::Comment(CommentIssue {
                file_path: file.path.clone(),
                severity,
                source_line: file.line_text(violation.location.line).map(str::to_string),
                violation,
            })
        }));
    }
    issues
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::config::{Preset, RuleEntry};
    use crate::issues::Report;
    use crate::rules::RuleSeverity;

    fn write(dir: &Path, name: &str, content: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_lint_reports_sorted_issues() {
        let dir = tempdir().unwrap();
        let b = write(dir.path(), "b.ts", "// FIXME: later\nexport const b = 1\n");
        let a = write(dir.path(), "a.ts", "const a = 1\n// BUG: broken\n");

        let config = Config {
            preset: Preset::None,
            rules: [(
                "no-tag-comments".to_string(),
                RuleEntry::Severity(RuleSeverity::Error),
            )]
            .into(),
            ..Config::default()
        };
        let ctx =
            LintContext::with_files(config, dir.path(), [a.clone(), b.clone()].into()).unwrap();
        let issues = ctx.lint();

        let summary: Vec<(&str, String, Severity)> = issues
            .iter()
            .map(|issue| (issue.file_path(), issue.message(), issue.report_severity()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (a.as_str(), "Exist 'BUG' tag comment".to_string(), Severity::Error),
                (b.as_str(), "Exist 'FIXME' tag comment".to_string(), Severity::Error),
            ]
        );
        assert_eq!(issues[0].source_line(), Some("// BUG: broken"));
    }

    #[test]
    fn test_parse_errors_become_issues() {
        let dir = tempdir().unwrap();
        let broken = write(dir.path(), "broken.ts", "const = ;\n");
        let good = write(dir.path(), "good.ts", "export const ok = 1\n");

        let config = Config {
            preset: Preset::None,
            ..Config::default()
        };
        let ctx =
            LintContext::with_files(config, dir.path(), [broken.clone(), good].into()).unwrap();

        assert_eq!(ctx.parsed_files().len(), 1);
        let issues = ctx.lint();
        assert_eq!(issues.len(), 1);
        assert!(matches!(&issues[0], Issue::ParseError(e) if e.file_path == broken));
    }

    #[test]
    fn test_context_from_source_root() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(
            dir.path().join(".cmtlintrc.json"),
            r#"{ "preset": "header" }"#,
        )
        .unwrap();
        write(dir.path(), "index.js", "export default 1\n");
        write(dir.path(), "README.md", "# readme\n");

        let args = CommonArgs {
            source_root: Some(dir.path().to_path_buf()),
            verbose: false,
        };
        let ctx = LintContext::new(&args).unwrap();
        assert_eq!(ctx.files.len(), 1);
        assert_eq!(ctx.rules.len(), 1);

        let messages: Vec<String> = ctx.lint().iter().map(|issue| issue.message()).collect();
        assert_eq!(
            messages,
            vec![
                "Header comment is enforced",
                "Header comment need `@author` tag",
                "Header comment need `@license` tag",
            ]
        );
    }

    #[test]
    fn test_invalid_config_fails_early() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(
            dir.path().join(".cmtlintrc.json"),
            r#"{ "rules": { "no-such-rule": "warn" } }"#,
        )
        .unwrap();

        let args = CommonArgs {
            source_root: Some(dir.path().to_path_buf()),
            verbose: false,
        };
        assert!(LintContext::new(&args).is_err());
    }
}
