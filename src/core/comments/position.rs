//! Mapping of offsets inside a comment's text to source locations.

use super::types::{COMMENT_OPENER_LEN, Comment, CommentKind, Location};

/// Convert a byte offset within `comment.text` into an absolute location.
///
/// Line comments always stay on the comment's first line. For block comments
/// the offset is split on `\n`: the first line is shifted by the comment's
/// start column plus the `/*` opener, continuation lines use the raw in-line
/// index as column.
///
/// Offsets past the end of the text are clamped.
pub fn locate(comment: &Comment, offset: usize) -> Location {
    let offset = floor_char_boundary(&comment.text, offset);
    let before = &comment.text[..offset];

    match comment.kind {
        CommentKind::Line => Location::new(
            comment.start.line,
            comment.start.column + COMMENT_OPENER_LEN + before.chars().count(),
        ),
        CommentKind::Block => {
            let line_index = before.matches('\n').count();
            let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
            let offset_in_line = before[line_start..].chars().count();

            if line_index == 0 {
                Location::new(
                    comment.start.line,
                    comment.start.column + COMMENT_OPENER_LEN + offset_in_line,
                )
            } else {
                Location::new(comment.start.line + line_index, offset_in_line)
            }
        }
    }
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    if offset >= text.len() {
        return text.len();
    }
    let mut offset = offset;
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
