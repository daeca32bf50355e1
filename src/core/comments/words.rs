//! Whole-word matching of configured words inside comment text.

use regex::Regex;

/// Build a regex matching `word` on word boundaries.
pub fn word_boundary_regex(word: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\b{}\b", regex::escape(word)))
}

/// Check whether the `len` bytes at `index` are wrapped by `open` and `close`.
pub fn is_wrapped(text: &str, index: usize, len: usize, open: char, close: char) -> bool {
    let end = index + len;
    if index == 0 || end >= text.len() {
        return false;
    }
    text[..index].ends_with(open) && text[end..].starts_with(close)
}

/// Offsets of every occurrence of `regex` in `text` that is not already
/// wrapped in backticks.
pub fn unwrapped_occurrences<'t>(
    regex: &'t Regex,
    text: &'t str,
) -> impl Iterator<Item = (usize, &'t str)> + 't {
    regex
        .find_iter(text)
        .filter(move |m| !is_wrapped(text, m.start(), m.len(), '`', '`'))
        .map(|m| (m.start(), m.as_str()))
}
