//! Tag scanning shared by `no-tag-comments` and `prefer-scope-on-tag-comment`.

use crate::core::comments::{Comment, TagMatch, detect_tag, locate, strip_jsdoc_prefix};
use crate::core::violation::{MessageId, Reporter};

/// A tag found in a comment, with its byte offset inside `comment.text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagHit {
    pub tag: TagMatch,
    pub offset: usize,
}

/// The tag starting a line comment's (trimmed) text.
pub fn line_comment_tag<S: AsRef<str>>(comment: &Comment, tags: &[S]) -> Option<TagHit> {
    let trimmed = comment.text.trim_start();
    let lead = comment.text.len() - trimmed.len();
    detect_tag(trimmed.trim_end(), tags).map(|tag| TagHit {
        offset: lead + tag.offset,
        tag,
    })
}

/// The first tag in a block comment that starts a line and satisfies `accept`.
///
/// Each line is checked after dropping its JSDoc `*` prefix; blank lines are
/// skipped.
pub fn block_comment_tag<S, F>(comment: &Comment, tags: &[S], accept: F) -> Option<TagHit>
where
    S: AsRef<str>,
    F: Fn(&TagMatch) -> bool,
{
    let mut line_start = 0;
    for line in comment.text.split('\n') {
        let offset = line_start;
        line_start += line.len() + 1;

        if line.trim().is_empty() {
            continue;
        }
        let Some(tag) = detect_tag(strip_jsdoc_prefix(line), tags) else {
            continue;
        };
        if !accept(&tag) {
            continue;
        }
        if let Some(idx) = line.find(&tag.tag) {
            return Some(TagHit {
                offset: offset + idx,
                tag,
            });
        }
    }
    None
}

/// Report `hit` with the tag keyword underlined.
pub fn report_tag(reporter: &mut Reporter, comment: &Comment, message_id: MessageId, hit: &TagHit) {
    let location = locate(comment, hit.offset);
    reporter.report_comment(
        comment,
        message_id,
        &[("tag", &hit.tag.tag)],
        Some((location, hit.tag.tag.chars().count())),
    );
}
