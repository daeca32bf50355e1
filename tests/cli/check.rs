use anyhow::Result;
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

const NO_HEADER: &str = r#"{ "preset": "base" }"#;

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/index.ts",
        r#"/**
 * @author kazupon
 * @license MIT
 */

export const answer = 42
"#,
    )?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 0);
    assert_snapshot!(stdout, @"✓ Checked 1 source file - no issues found");

    Ok(())
}

#[test]
fn test_default_preset_reports_header_and_scope() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        r#"const a = 1
// TODO: refactor
"#,
    )?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 1);
    assert!(stdout.contains("error: Header comment is enforced  enforce-header-comment"));
    assert!(stdout.contains("error: Header comment need `@author` tag"));
    assert!(stdout.contains("error: Header comment need `@license` tag"));
    assert!(stdout.contains(
        "warning: Tag comment 'TODO' is missing a scope. Use format: TODO(scope)  prefer-scope-on-tag-comment"
    ));
    assert!(stdout.contains("--> ./src/app.ts:2:4"));
    assert!(stdout.contains("2 | // TODO: refactor\n  |    ^^^^\n"));
    assert!(stdout.contains("✘ 4 problems (3 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_warnings_do_not_fail() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "// FIXME(core): broken\nexport {}\n")?;
    test.write_config(NO_HEADER)?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("warning: Exist 'FIXME' tag comment  no-tag-comments"));
    assert!(stdout.contains("✘ 1 problems (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_rule_severity_override() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "// FIXME(core): broken\nexport {}\n")?;
    test.write_config(
        r#"{
  "preset": "base",
  "rules": { "no-tag-comments": ["error", { "tags": ["FIXME"] }] }
}"#,
    )?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 1);
    assert!(stdout.contains("error: Exist 'FIXME' tag comment"));

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "export {}\n// TODO: later\n")?;
    test.write_config(NO_HEADER)?;

    let mut cmd = test.check_command();
    cmd.args(["--format", "json"]);
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);

    let issues: Value = serde_json::from_str(&stdout)?;
    assert_eq!(
        issues,
        serde_json::json!([{
            "file": "./src/app.ts",
            "line": 2,
            "column": 4,
            "severity": "warning",
            "rule": "prefer-scope-on-tag-comment",
            "messageId": "missingScope",
            "message": "Tag comment 'TODO' is missing a scope. Use format: TODO(scope)",
            "fix": null
        }])
    );

    Ok(())
}

#[test]
fn test_parse_error_is_reported() -> Result<()> {
    let test = CliTest::with_file("src/broken.ts", "const = ;\n")?;
    test.write_config(NO_HEADER)?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 1);
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("--> ./src/broken.ts"));

    Ok(())
}

#[test]
fn test_config_ignores_and_non_sources() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config(
        r#"{
  "preset": "base",
  "ignores": ["**/generated/**"]
}"#,
    )?;
    test.write_file("src/generated/types.ts", "// TODO: generated\n")?;
    test.write_file("node_modules/pkg/index.js", "// TODO: vendored\n")?;
    test.write_file("README.md", "<!-- TODO: docs -->\n")?;
    test.write_file("src/app.ts", "export {}\n")?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 0);
    assert_snapshot!(stdout, @"✓ Checked 1 source file - no issues found");

    Ok(())
}

#[test]
fn test_source_root_argument() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config(NO_HEADER)?;
    test.write_file("packages/core/a.ts", "// BUG: off by one\nexport {}\n")?;
    test.write_file("scripts/b.ts", "// BUG: ignored\nexport {}\n")?;

    let mut cmd = test.check_command();
    cmd.args(["--source-root", "packages"]);
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);
    assert!(stdout.contains("--> packages/core/a.ts:1:4"));
    assert!(!stdout.contains("scripts"));

    Ok(())
}

#[test]
fn test_invalid_config_exits_with_error() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "export {}\n")?;
    test.write_config(r#"{ "rules": { "no-such-rule": "warn" } }"#)?;

    let (code, stdout, stderr) = run(test.check_command())?;
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("unknown rule 'no-such-rule'"));

    Ok(())
}

#[test]
fn test_invalid_rule_options() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "export {}\n")?;
    test.write_config(
        r#"{ "rules": { "prefer-scope-on-tag-comment": ["warn", { "tags": [] }] } }"#,
    )?;

    let (code, _, stderr) = run(test.check_command())?;
    assert_eq!(code, 2);
    assert!(
        stderr.contains("option 'tags' of rule 'prefer-scope-on-tag-comment' must not be empty")
    );

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Usage: cmtlint"));

    Ok(())
}
