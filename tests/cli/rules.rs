use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_rules_lists_all_rules() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("rules");
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);
    for name in [
        "enforce-header-comment",
        "no-tag-comments",
        "prefer-scope-on-tag-comment",
        "prefer-inline-code-words-comments",
    ] {
        assert!(stdout.contains(name), "missing rule {name}");
    }
    assert!(stdout.contains("enforce the use of inline code for specific words on comments"));

    Ok(())
}
