//! Classification of the leading JSDoc comments that form a file's header.

use super::types::{Comment, Program};

/// Collect the header block of a file.
///
/// Only JSDoc-style block comments that end before the first statement (or
/// anywhere, for a comment-only file) qualify. When the last of them touches
/// the first statement (at most one character apart) it documents that
/// statement and is left out.
///
/// An empty result means the file has no header comment at all.
pub fn classify_header<'a>(comments: &'a [Comment], program: &Program) -> Vec<&'a Comment> {
    let comment_only = program.body.is_empty();
    let boundary = if comment_only {
        program.end
    } else {
        program.start
    };

    let mut header: Vec<&Comment> = comments
        .iter()
        .filter(|comment| comment.range.end <= boundary)
        .filter(|comment| comment.is_jsdoc())
        .collect();

    if comment_only {
        return header;
    }

    if let (Some(last), Some(first_statement)) = (header.last(), program.body.first()) {
        let distance = last.range.end.abs_diff(first_statement.range.start);
        if distance <= 1 {
            header.pop();
        }
    }

    header
}
