//! Comment rules.
//!
//! Each rule is a pure, single-pass analysis from one file's [`SourceFile`] to
//! a list of [`Violation`]s. Rules are constructed once from their validated
//! options and then shared (read-only) across files.
//!
//! ## Module Structure
//!
//! - `helpers`: Tag scanning shared by the two tag rules
//! - `enforce_header_comment`: `@author` / `@license` header enforcement
//! - `no_tag_comments`: Prohibited tag comments (`FIXME`, `BUG`)
//! - `prefer_scope_on_tag_comment`: `TODO(scope)` enforcement, directive aware
//! - `prefer_inline_code_words_comments`: Backtick wrapping of configured words

pub mod enforce_header_comment;
pub mod helpers;
pub mod no_tag_comments;
pub mod prefer_inline_code_words_comments;
pub mod prefer_scope_on_tag_comment;


use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::config::ConfigError;
use crate::core::{comments::SourceFile, violation::Violation};

pub use enforce_header_comment::EnforceHeaderComment;
pub use no_tag_comments::NoTagComments;
pub use prefer_inline_code_words_comments::PreferInlineCodeWordsComments;
pub use prefer_scope_on_tag_comment::PreferScopeOnTagComment;

const DOCS_BASE_URL: &str = "https://github.com/kazupon/eslint-plugin/tree/main/src/rules";

/// Configured severity of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    Off,
    Warn,
    Error,
}

impl std::fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleSeverity::Off => write!(f, "off"),
            RuleSeverity::Warn => write!(f, "warn"),
            RuleSeverity::Error => write!(f, "error"),
        }
    }
}

/// Whether a rule can produce fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixable {
    No,
    Code,
}

/// Static attributes of a rule.
#[derive(Debug)]
pub struct RuleMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub default_severity: RuleSeverity,
    pub recommended: bool,
    pub fixable: Fixable,
}

impl RuleMeta {
    pub fn docs_url(&self) -> String {
        format!("{}/{}.ts", DOCS_BASE_URL, self.name)
    }
}

/// Every rule, in the order they are listed and run.
pub const ALL_RULES: &[&RuleMeta] = &[
    &enforce_header_comment::META,
    &no_tag_comments::META,
    &prefer_scope_on_tag_comment::META,
    &prefer_inline_code_words_comments::META,
];

/// Look up a rule's metadata by name.
pub fn find_rule(name: &str) -> Option<&'static RuleMeta> {
    ALL_RULES.iter().copied().find(|meta| meta.name == name)
}

/// A comment analysis over one file.
///
/// Implementations hold only their validated options, so one instance can be
/// used for any number of files, from any number of threads.
#[enum_dispatch]
pub trait CommentRule {
    fn meta(&self) -> &'static RuleMeta;

    fn check(&self, file: &SourceFile) -> Vec<Violation>;
}

#[enum_dispatch(CommentRule)]
#[derive(Debug, Clone)]
pub enum Rule {
    EnforceHeaderComment(EnforceHeaderComment),
    NoTagComments(NoTagComments),
    PreferScopeOnTagComment(PreferScopeOnTagComment),
    PreferInlineCodeWordsComments(PreferInlineCodeWordsComments),
}

impl Rule {
    /// Build the rule called `name` from its raw JSON options.
    pub fn from_options(
        name: &str,
        options: Option<&serde_json::Value>,
    ) -> Result<Rule, ConfigError> {
        let rule = match name {
            enforce_header_comment::NAME => {
                let _: enforce_header_comment::EnforceHeaderCommentOptions =
                    parse_options(name, options)?;
                EnforceHeaderComment.into()
            }
            no_tag_comments::NAME => NoTagComments::new(parse_options(name, options)?)?.into(),
            prefer_scope_on_tag_comment::NAME => {
                PreferScopeOnTagComment::new(parse_options(name, options)?)?.into()
            }
            prefer_inline_code_words_comments::NAME => {
                PreferInlineCodeWordsComments::new(parse_options(name, options)?)?.into()
            }
            _ => return Err(ConfigError::UnknownRule(name.to_string())),
        };
        Ok(rule)
    }

    pub fn name(&self) -> &'static str {
        self.meta().name
    }
}

fn parse_options<T>(rule: &str, options: Option<&serde_json::Value>) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    match options {
        None | Some(serde_json::Value::Null) => Ok(T::default()),
        Some(value) => {
            T::deserialize(value).map_err(|source| ConfigError::InvalidOptions {
                rule: rule.to_string(),
                source,
            })
        }
    }
}

/// Validate an explicitly configured option list.
///
/// The list must be non-empty, with no empty strings and no duplicates.
pub(crate) fn validate_list(
    rule: &str,
    field: &str,
    items: Vec<String>,
) -> Result<Vec<String>, ConfigError> {
    if items.is_empty() {
        return Err(ConfigError::EmptyList {
            rule: rule.to_string(),
            field: field.to_string(),
        });
    }
    for (idx, item) in items.iter().enumerate() {
        if item.is_empty() {
            return Err(ConfigError::EmptyItem {
                rule: rule.to_string(),
                field: field.to_string(),
            });
        }
        if items[..idx].contains(item) {
            return Err(ConfigError::DuplicateItem {
                rule: rule.to_string(),
                field: field.to_string(),
                value: item.clone(),
            });
        }
    }
    Ok(items)
}

/// Owned copies of a default list.
pub(crate) fn default_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
