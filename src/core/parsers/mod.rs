//! Host adapters turning source text into [`SourceFile`](crate::core::comments::SourceFile)s.

pub mod script;

pub use script::{SOURCE_EXTENSIONS, parse_source};
