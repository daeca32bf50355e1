//! Per-file input records handed to the rules by the host adapter.
//!
//! All of these are produced once per file and never mutated afterwards.
//! Offsets are byte offsets from the start of the file; lines are 1-based and
//! columns are 0-based character counts.

use std::ops::Range;

use serde::Serialize;

/// Length of both comment openers (`//` and `/*`).
pub const COMMENT_OPENER_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    Line,
    Block,
}

/// A `{line, column}` position in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Anchor used for diagnostics that belong to the whole file.
    pub const FILE_ROOT: Location = Location { line: 1, column: 0 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A source comment as produced by the host tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    /// Content without the `//`, `/*` and `*/` delimiters.
    pub text: String,
    pub start: Location,
    pub end: Location,
    /// `[start, end)` of the whole comment, delimiters included.
    pub range: Range<usize>,
}

impl Comment {
    pub fn is_block(&self) -> bool {
        self.kind == CommentKind::Block
    }

    /// `/** ... */` style comment.
    pub fn is_jsdoc(&self) -> bool {
        self.is_block() && self.text.starts_with('*')
    }

    /// Absolute byte offset of `offset` within [`Comment::text`].
    pub fn text_offset(&self, offset: usize) -> usize {
        self.range.start + COMMENT_OPENER_LEN + offset
    }
}

/// A top-level statement of the program, reduced to its source range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub range: Range<usize>,
}

/// The program's top-level node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Offset of the first statement, or the source length for an empty body.
    pub start: usize,
    pub end: usize,
    pub body: Vec<Statement>,
}

/// Everything a rule sees for one file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: String,
    /// File text without its leading byte order mark.
    pub source: String,
    /// The file on disk starts with a UTF-8 byte order mark.
    pub bom: bool,
    /// All comments in source order.
    pub comments: Vec<Comment>,
    pub program: Program,
}

impl SourceFile {
    /// The 1-based source line, without its line terminator.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let idx = line.checked_sub(1)?;
        self.source.lines().nth(idx)
    }

    /// On-disk contents for `text`, a rewrite of [`SourceFile::source`].
    pub fn to_file_contents(&self, text: &str) -> String {
        if self.bom {
            format!("\u{feff}{text}")
        } else {
            text.to_string()
        }
    }
}
