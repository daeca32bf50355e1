//! `prefer-inline-code-words-comments`: wrap configured words in backticks.

use regex::Regex;
use serde::Deserialize;

use crate::config::ConfigError;
use crate::core::comments::{
    Comment, SourceFile, locate,
    words::{unwrapped_occurrences, word_boundary_regex},
};
use crate::core::violation::{MessageId, Reporter, Violation, build_fix};
use crate::rules::{CommentRule, Fixable, RuleMeta, RuleSeverity, validate_list};

pub const NAME: &str = "prefer-inline-code-words-comments";

pub const META: RuleMeta = RuleMeta {
    name: NAME,
    description: "enforce the use of inline code for specific words on comments",
    default_severity: RuleSeverity::Error,
    recommended: true,
    fixable: Fixable::Code,
};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreferInlineCodeWordsCommentsOptions {
    pub words: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
struct Word {
    text: String,
    pattern: Regex,
}

/// Without configured words the rule reports nothing.
#[derive(Debug, Clone, Default)]
pub struct PreferInlineCodeWordsComments {
    words: Vec<Word>,
}

impl PreferInlineCodeWordsComments {
    pub fn new(options: PreferInlineCodeWordsCommentsOptions) -> Result<Self, ConfigError> {
        let Some(words) = options.words else {
            return Ok(Self::default());
        };

        let words = validate_list(NAME, "words", words)?
            .into_iter()
            .map(|text| {
                let pattern =
                    word_boundary_regex(&text).map_err(|source| ConfigError::InvalidWord {
                        rule: NAME.to_string(),
                        word: text.clone(),
                        source,
                    })?;
                Ok(Word { text, pattern })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(Self { words })
    }

    fn check_comment(&self, reporter: &mut Reporter, comment: &Comment) {
        for word in &self.words {
            for (offset, matched) in unwrapped_occurrences(&word.pattern, &comment.text) {
                let start = comment.text_offset(offset);
                let fix = build_fix(start..start + matched.len(), format!("`{}`", matched));
                reporter.report(
                    Violation::new(NAME, MessageId::MissingInlineCode, locate(comment, offset))
                        .with_data("word", &word.text)
                        .with_length(matched.chars().count())
                        .with_fix(fix),
                );
            }
        }
    }
}

impl CommentRule for PreferInlineCodeWordsComments {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        let mut reporter = Reporter::new(NAME);
        if self.words.is_empty() {
            return reporter.finish();
        }
        for comment in &file.comments {
            self.check_comment(&mut reporter, comment);
        }
        reporter.finish()
    }
}
