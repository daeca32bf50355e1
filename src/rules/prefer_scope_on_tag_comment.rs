//! `prefer-scope-on-tag-comment`: require a `(scope)` on tag comments.
//!
//! A comment starting with a directive (`eslint-disable-line`, `@ts-ignore`,
//! ...) is only checked in the directive's description, so
//! `// eslint-disable-line no-alert -- TODO: reason` reports `TODO` while the
//! directive keyword itself is never mistaken for text.

use serde::Deserialize;

use crate::config::ConfigError;
use crate::core::comments::{Comment, CommentKind, SourceFile, detect_tag, locate, parse_directive};
use crate::core::violation::{MessageId, Reporter, Violation};
use crate::rules::{
    CommentRule, Fixable, RuleMeta, RuleSeverity, default_list,
    helpers::{block_comment_tag, line_comment_tag, report_tag},
    validate_list,
};

pub const NAME: &str = "prefer-scope-on-tag-comment";

pub const DEFAULT_TAGS: &[&str] = &["TODO", "FIXME", "HACK", "BUG", "NOTE"];

pub const DEFAULT_DIRECTIVES: &[&str] = &[
    "eslint-disable",
    "eslint-disable-next-line",
    "eslint-disable-line",
    "@ts-expect-error",
    "@ts-ignore",
    "@ts-nocheck",
];

pub const META: RuleMeta = RuleMeta {
    name: NAME,
    description: "enforce adding a scope to tag comments",
    default_severity: RuleSeverity::Warn,
    recommended: true,
    fixable: Fixable::No,
};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreferScopeOnTagCommentOptions {
    pub tags: Option<Vec<String>>,
    pub directives: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct PreferScopeOnTagComment {
    tags: Vec<String>,
    directives: Vec<String>,
}

impl Default for PreferScopeOnTagComment {
    fn default() -> Self {
        Self {
            tags: default_list(DEFAULT_TAGS),
            directives: default_list(DEFAULT_DIRECTIVES),
        }
    }
}

impl PreferScopeOnTagComment {
    pub fn new(options: PreferScopeOnTagCommentOptions) -> Result<Self, ConfigError> {
        let tags = match options.tags {
            Some(tags) => validate_list(NAME, "tags", tags)?,
            None => default_list(DEFAULT_TAGS),
        };
        let directives = match options.directives {
            Some(directives) => validate_list(NAME, "directives", directives)?,
            None => default_list(DEFAULT_DIRECTIVES),
        };
        Ok(Self { tags, directives })
    }

    fn check_comment(&self, reporter: &mut Reporter, comment: &Comment) {
        if let Some(directive) = parse_directive(&comment.text, &self.directives) {
            if let Some(tag) = detect_tag(&directive.description, &self.tags)
                && !tag.has_scope
            {
                let location = locate(comment, directive.description_offset + tag.offset);
                reporter.report_comment(
                    comment,
                    MessageId::MissingScope,
                    &[("tag", &tag.tag)],
                    Some((location, tag.tag.chars().count())),
                );
            }
            return;
        }

        let hit = match comment.kind {
            CommentKind::Line => {
                line_comment_tag(comment, &self.tags).filter(|hit| !hit.tag.has_scope)
            }
            CommentKind::Block => block_comment_tag(comment, &self.tags, |tag| !tag.has_scope),
        };
        if let Some(hit) = hit {
            report_tag(reporter, comment, MessageId::MissingScope, &hit);
        }
    }
}

impl CommentRule for PreferScopeOnTagComment {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        let mut reporter = Reporter::new(NAME);
        for comment in &file.comments {
            self.check_comment(&mut reporter, comment);
        }
        reporter.finish()
    }
}
