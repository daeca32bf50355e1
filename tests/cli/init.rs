use anyhow::{Context, Result};
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);
    assert_snapshot!(stdout, @"✓ Created .cmtlintrc.json");
    assert!(test.root().join(".cmtlintrc.json").exists());

    let content = test.read_file(".cmtlintrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["preset"], "recommended");
    assert_eq!(parsed["sourceRoot"], "./");
    assert!(parsed.get("ignores").is_some());
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    // The generated config drives a normal run.
    test.write_file("src/index.ts", "/**\n * @author me\n * @license MIT\n */\n\nexport {}\n")?;
    let (code, _, _) = run(test.check_command())?;
    assert_eq!(code, 0);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config("{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, stdout, stderr) = run(cmd)?;
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert_snapshot!(stderr, @"Error: .cmtlintrc.json already exists");
    assert_eq!(test.read_file(".cmtlintrc.json")?, "{}");

    Ok(())
}
