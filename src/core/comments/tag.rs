//! Detection of keyword tags (`TODO`, `FIXME(scope)`, ...) at the start of text.

/// A tag found at the start of a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    pub tag: String,
    /// True when the tag is followed by `(scope)` with non-blank scope.
    pub has_scope: bool,
    /// Where the keyword starts in the scanned text.
    pub offset: usize,
}

/// Check whether `text` starts with one of `tags`.
///
/// Tags are tried in the given order and only a tag at offset 0 counts. The
/// keyword must be followed by end-of-text, `:`, a space or `(`, so `TODOX`
/// never matches `TODO`. A `(` makes the match scoped when a `)` follows with
/// at least one non-whitespace character in between; an unclosed or empty
/// scope is reported as unscoped.
pub fn detect_tag<S: AsRef<str>>(text: &str, tags: &[S]) -> Option<TagMatch> {
    for tag in tags {
        let tag = tag.as_ref();
        if tag.is_empty() {
            continue;
        }
        let Some(after) = text.strip_prefix(tag) else {
            continue;
        };

        if let Some(rest) = after.strip_prefix('(') {
            let has_scope = rest
                .find(')')
                .is_some_and(|close| !rest[..close].trim().is_empty());
            return Some(TagMatch {
                tag: tag.to_string(),
                has_scope,
                offset: 0,
            });
        }

        if after.is_empty() || after.starts_with(':') || after.starts_with(' ') {
            return Some(TagMatch {
                tag: tag.to_string(),
                has_scope: false,
                offset: 0,
            });
        }
    }
    None
}

/// Trim a block comment line and drop its JSDoc `*` prefix, if any.
pub fn strip_jsdoc_prefix(line: &str) -> &str {
    let trimmed = line.trim();
    match trimmed.strip_prefix('*') {
        Some(rest) => rest.trim(),
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_TAGS: &[&str] = &["TODO", "FIXME", "HACK", "BUG", "NOTE"];

    #[test]
    fn test_tag_with_colon() {
        let m = detect_tag("TODO: fix this", DEFAULT_TAGS).unwrap();
        assert_eq!(m.tag, "TODO");
        assert!(!m.has_scope);
        assert_eq!(m.offset, 0);
    }

    #[test]
    fn test_tag_terminators() {
        assert!(detect_tag("FIXME", DEFAULT_TAGS).is_some());
        assert!(detect_tag("FIXME later", DEFAULT_TAGS).is_some());
        assert!(detect_tag("FIXME:", DEFAULT_TAGS).is_some());
        assert!(detect_tag("FIXME-later", DEFAULT_TAGS).is_none());
        assert!(detect_tag("FIXME.", DEFAULT_TAGS).is_none());
    }

    #[test]
    fn test_tag_must_not_be_prefix_of_longer_token() {
        for tag in DEFAULT_TAGS {
            let text = format!("{}x", tag);
            assert_eq!(detect_tag(&text, DEFAULT_TAGS), None, "{}", text);
        }
        assert_eq!(detect_tag("TODOS are fine", DEFAULT_TAGS), None);
    }

    #[test]
    fn test_tag_only_at_start() {
        assert_eq!(detect_tag("This is not a TODO", DEFAULT_TAGS), None);
        assert_eq!(detect_tag(" TODO: leading space", DEFAULT_TAGS), None);
    }

    #[test]
    fn test_scope_round_trip() {
        for tag in DEFAULT_TAGS {
            for scope in ["kazupon", "ISSUE-123", "user-123_456", "v1.2.3", "a b"] {
                let text = format!("{}({}): description", tag, scope);
                let m = detect_tag(&text, DEFAULT_TAGS).unwrap();
                assert_eq!(m.tag, *tag);
                assert!(m.has_scope, "{}", text);
            }
        }
    }

    #[test]
    fn test_empty_scope() {
        for text in ["TODO()", "TODO(   ): whitespace", "TODO(: unclosed", "TODO("] {
            let m = detect_tag(text, DEFAULT_TAGS).unwrap();
            assert_eq!(m.tag, "TODO");
            assert!(!m.has_scope, "{}", text);
        }
    }

    #[test]
    fn test_first_configured_tag_wins() {
        let m = detect_tag("NOTE: x", &["BUG", "NOTE", "NOT"]).unwrap();
        assert_eq!(m.tag, "NOTE");
    }

    #[test]
    fn test_custom_tags() {
        assert!(detect_tag("TODO: x", &["CUSTOM"]).is_none());
        assert!(detect_tag("CUSTOM(dev): x", &["CUSTOM"]).unwrap().has_scope);
    }

    #[test]
    fn test_strip_jsdoc_prefix() {
        assert_eq!(strip_jsdoc_prefix(" * TODO: x "), "TODO: x");
        assert_eq!(strip_jsdoc_prefix("*"), "");
        assert_eq!(strip_jsdoc_prefix("   plain"), "plain");
        assert_eq!(strip_jsdoc_prefix(" ** twice"), "* twice");
    }
}
