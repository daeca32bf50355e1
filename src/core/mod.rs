//! Core lint engine.
//!
//! ## Module Structure
//!
//! - `comments`: Comment analysis (positions, tags, directives, headers, words)
//! - `parsers`: swc host adapter producing per-file comment streams
//! - `violation`: Violations, message templates and fix descriptors
//! - `fixer`: Applying fix descriptors to source text
//! - `file_scanner`: Source file discovery
//! - `context`: One lint run over a project

pub mod comments;
pub mod context;
pub mod file_scanner;
pub mod fixer;
pub mod parsers;
pub mod violation;

pub use context::{LintContext, lint_file};
