//! Comment analysis engine.
//!
//! Locates, classifies and parses structured content out of source comments.
//! Every function here is pure: the rules feed in the comment stream of one
//! file and get back matches and locations.
//!
//! ## Module Structure
//!
//! - `types`: Comment, Program and SourceFile records supplied by the host
//! - `position`: Offset-in-comment to line/column mapping
//! - `tag`: Keyword tag detection with `(scope)` suffix
//! - `directive`: Host directive recognition and description extraction
//! - `header`: Header block classification
//! - `jsdoc`: `@tag` reader for JSDoc comments
//! - `words`: Whole-word matching for inline-code enforcement

pub mod directive;
pub mod header;
pub mod jsdoc;
pub mod position;
pub mod tag;
pub mod types;
pub mod words;

pub use directive::{DirectiveMatch, parse_directive};
pub use header::classify_header;
pub use jsdoc::{JsDocTag, parse_jsdoc_tags};
pub use position::locate;
pub use tag::{TagMatch, detect_tag, strip_jsdoc_prefix};
pub use types::{
    COMMENT_OPENER_LEN, Comment, CommentKind, Location, Program, SourceFile, Statement,
};
