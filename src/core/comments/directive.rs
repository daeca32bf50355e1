//! Recognition of host directives (`eslint-disable`, `@ts-ignore`, ...) and
//! extraction of their free-text description.
//!
//! Two description conventions are supported:
//!
//! - `eslint-disable-line no-alert -- NOTE(kazupon): reason` (after `--`)
//! - `@ts-ignore NOTE(kazupon): reason` (after the first whitespace run)

/// A directive found at the start of a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveMatch {
    pub directive: String,
    pub description: String,
    /// Byte offset of the description's first character in the untrimmed text.
    pub description_offset: usize,
}

const SEPARATOR: &str = "--";

/// Parse `text` against `directives`, first match wins.
///
/// Returns `None` when the text does not start with a configured directive, or
/// when the matched directive has no extractable description. A directive that
/// matches but yields no description does not fall through to later entries.
pub fn parse_directive<S: AsRef<str>>(text: &str, directives: &[S]) -> Option<DirectiveMatch> {
    let trimmed = text.trim_start();
    let lead = text.len() - trimmed.len();

    let directive = directives
        .iter()
        .map(AsRef::as_ref)
        .find(|directive| !directive.is_empty() && trimmed.starts_with(directive))?;

    let after_start = lead + directive.len();
    let after = &text[after_start..];

    if let Some(sep) = after.find(SEPARATOR) {
        let tail_start = after_start + sep + SEPARATOR.len();
        return description_at(directive, text, tail_start);
    }

    let rest = after.trim_start();
    let ws_len = after.len() - rest.len();
    if ws_len == 0 {
        return None;
    }
    description_at(directive, text, after_start + ws_len)
}

fn description_at(directive: &str, text: &str, from: usize) -> Option<DirectiveMatch> {
    let tail = &text[from..];
    let description = tail.trim();
    if description.is_empty() {
        return None;
    }
    let leading_ws = tail.len() - tail.trim_start().len();
    Some(DirectiveMatch {
        directive: directive.to_string(),
        description: description.to_string(),
        description_offset: from + leading_ws,
    })
}
