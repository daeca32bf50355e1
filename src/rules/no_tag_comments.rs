//! `no-tag-comments`: disallow tag comments such as `FIXME` and `BUG`.

use serde::Deserialize;

use crate::config::ConfigError;
use crate::core::comments::{Comment, CommentKind, SourceFile};
use crate::core::violation::{MessageId, Reporter, Violation};
use crate::rules::{
    CommentRule, Fixable, RuleMeta, RuleSeverity, default_list,
    helpers::{block_comment_tag, line_comment_tag, report_tag},
    validate_list,
};

pub const NAME: &str = "no-tag-comments";

pub const DEFAULT_TAGS: &[&str] = &["FIXME", "BUG"];

pub const META: RuleMeta = RuleMeta {
    name: NAME,
    description: "disallow tag comments",
    default_severity: RuleSeverity::Warn,
    recommended: true,
    fixable: Fixable::No,
};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoTagCommentsOptions {
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct NoTagComments {
    tags: Vec<String>,
}

impl Default for NoTagComments {
    fn default() -> Self {
        Self {
            tags: default_list(DEFAULT_TAGS),
        }
    }
}

impl NoTagComments {
    pub fn new(options: NoTagCommentsOptions) -> Result<Self, ConfigError> {
        let tags = match options.tags {
            Some(tags) => validate_list(NAME, "tags", tags)?,
            None => default_list(DEFAULT_TAGS),
        };
        Ok(Self { tags })
    }

    fn check_comment(&self, reporter: &mut Reporter, comment: &Comment) {
        let hit = match comment.kind {
            CommentKind::Line => line_comment_tag(comment, &self.tags),
            CommentKind::Block => block_comment_tag(comment, &self.tags, |_| true),
        };
        if let Some(hit) = hit {
            report_tag(reporter, comment, MessageId::TagComment, &hit);
        }
    }
}

impl CommentRule for NoTagComments {
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
