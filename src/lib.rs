//! cmtlint - a linter for comments in JavaScript/TypeScript sources
//!
//! cmtlint checks source comments for header tags (`@author`, `@license`),
//! prohibited tag comments (`FIXME`, `BUG`), tag comments without a scope
//! (`TODO(scope)`) and configured words that belong in inline code.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reports)
//! - `config`: Configuration file loading and rule resolution
//! - `core`: Comment analysis engine, swc adapter, fixer and lint context
//! - `issues`: Issue type definitions for reporting
//! - `rules`: The comment rules

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
