use anyhow::Result;

use crate::{CliTest, run};

const WORDS_CONFIG: &str = r#"{
  "preset": "none",
  "rules": {
    "prefer-inline-code-words-comments": ["error", { "words": ["Vue", "Nuxt"] }]
  }
}"#;

const SOURCE: &str = "// Vue and `Nuxt`\nconst app = 1 // built on Nuxt\n/* Vue, again */\n";

#[test]
fn test_fix_dry_run_previews_without_writing() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", SOURCE)?;
    test.write_config(WORDS_CONFIG)?;

    let (code, stdout, _) = run(test.fix_command())?;
    assert_eq!(code, 1);
    assert!(stdout.contains("./src/app.ts:1:4  Vue -> `Vue`"));
    assert!(stdout.contains("./src/app.ts:2:27  Nuxt -> `Nuxt`"));
    assert!(stdout.contains("./src/app.ts:3:4  Vue -> `Vue`"));
    assert!(stdout.contains("Would fix 3 issue(s) in 1 file(s)."));
    assert_eq!(test.read_file("src/app.ts")?, SOURCE);

    Ok(())
}

#[test]
fn test_fix_apply_rewrites_files() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", SOURCE)?;
    test.write_config(WORDS_CONFIG)?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Fixed 3 issue(s) in 1 file(s)."));
    assert_eq!(
        test.read_file("src/app.ts")?,
        "// `Vue` and `Nuxt`\nconst app = 1 // built on `Nuxt`\n/* `Vue`, again */\n"
    );

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_fix_nothing_to_do() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "// `Vue` only\nexport {}\n")?;
    test.write_config(WORDS_CONFIG)?;

    let (code, stdout, _) = run(test.fix_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 1 source file(s) - nothing to fix"));

    Ok(())
}

#[test]
fn test_fix_apply_keeps_byte_order_mark() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "\u{feff}// built on Vue\nexport {}\n")?;
    test.write_config(WORDS_CONFIG)?;

    let (code, stdout, _) = run(test.fix_command())?;
    assert_eq!(code, 1);
    assert!(stdout.contains("./src/app.ts:1:13  Vue -> `Vue`"));

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let (code, _, _) = run(cmd)?;
    assert_eq!(code, 0);
    assert_eq!(
        test.read_file("src/app.ts")?,
        "\u{feff}// built on `Vue`\nexport {}\n"
    );

    Ok(())
}
