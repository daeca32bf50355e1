//! `enforce-header-comment`: require a file header with `@author` and `@license`.
//!
//! The analysis runs in two steps over a file-scoped [`HeaderScan`]:
//! `collect` classifies the header block when entering the program, and
//! `validate` diagnoses it when leaving.

use serde::Deserialize;

use crate::core::comments::{
    Comment, JsDocTag, Location, SourceFile, classify_header, parse_jsdoc_tags,
};
use crate::core::violation::{MessageId, Reporter, Violation};
use crate::rules::{CommentRule, Fixable, RuleMeta, RuleSeverity};

pub const NAME: &str = "enforce-header-comment";

/// Documentation tags every header must carry, in diagnosis order.
pub const REQUIRED_TAGS: &[&str] = &["author", "license"];

pub const META: RuleMeta = RuleMeta {
    name: NAME,
    description: "Enforce heading the comment in source code file",
    default_severity: RuleSeverity::Error,
    recommended: true,
    fixable: Fixable::No,
};

/// The rule takes no options.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnforceHeaderCommentOptions {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Diagnosis {
    /// Tag absent.
    Require,
    /// Tag present without a value.
    Enforce,
    Ok,
}

/// Header block of one file, with the JSDoc tags of each comment.
#[derive(Debug)]
struct HeaderScan<'a> {
    comments: Vec<(&'a Comment, Vec<JsDocTag>)>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnforceHeaderComment;

impl EnforceHeaderComment {
    fn collect<'a>(&self, file: &'a SourceFile) -> HeaderScan<'a> {
        let comments = classify_header(&file.comments, &file.program)
            .into_iter()
            .map(|comment| (comment, parse_jsdoc_tags(&comment.text)))
            .collect();
        HeaderScan { comments }
    }

    fn validate(&self, scan: HeaderScan<'_>, reporter: &mut Reporter) {
        let Some((first, _)) = scan.comments.first() else {
            reporter.report(Violation::new(
                NAME,
                MessageId::HeaderCommentEnforce,
                Location::FILE_ROOT,
            ));
            for tag in REQUIRED_TAGS {
                reporter.report(
                    Violation::new(NAME, MessageId::HeaderCommentNeedTag, Location::FILE_ROOT)
                        .with_data("tag", tag),
                );
            }
            return;
        };

        let header = scan
            .comments
            .iter()
            .find(|(_, tags)| tags.iter().any(|tag| REQUIRED_TAGS.contains(&tag.name.as_str())));

        let Some((comment, tags)) = header else {
            for tag in REQUIRED_TAGS {
                reporter.report_comment(
                    first,
                    MessageId::HeaderCommentNeedTag,
                    &[("tag", *tag)],
                    None,
                );
            }
            return;
        };

        for (required, diagnosis) in diagnose(tags) {
            let message_id = match diagnosis {
                Diagnosis::Require => MessageId::HeaderCommentNeedTag,
                Diagnosis::Enforce => MessageId::HeaderCommentNeedTagValue,
                Diagnosis::Ok => continue,
            };
            reporter.report_comment(comment, message_id, &[("tag", required)], None);
        }
    }
}

/// Diagnose every required tag; a later occurrence of a tag overrides an
/// earlier one.
fn diagnose(tags: &[JsDocTag]) -> Vec<(&'static str, Diagnosis)> {
    REQUIRED_TAGS
        .iter()
        .map(|required| {
            let diagnosis = tags
                .iter()
                .rev()
                .find(|tag| tag.name == *required)
                .map_or(Diagnosis::Require, |tag| {
                    if tag.has_value() {
                        Diagnosis::Ok
                    } else {
                        Diagnosis::Enforce
                    }
                });
            (*required, diagnosis)
        })
        .collect()
}

impl CommentRule for EnforceHeaderComment {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        let mut reporter = Reporter::new(NAME);
        let scan = self.collect(file);
        self.validate(scan, &mut reporter);
        reporter.finish()
    }
}
