//! Violations reported by rules, and the fix descriptors attached to them.

use std::{collections::BTreeMap, fmt, ops::Range};

use serde::Serialize;

use crate::core::comments::{Comment, Location};

/// Message identifiers with their templates. `{{name}}` placeholders are
/// filled from [`Violation::data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageId {
    HeaderCommentEnforce,
    HeaderCommentNeedTag,
    HeaderCommentNeedTagValue,
    TagComment,
    MissingScope,
    MissingInlineCode,
}

impl MessageId {
    pub fn template(self) -> &'static str {
        match self {
            MessageId::HeaderCommentEnforce => "Header comment is enforced",
            MessageId::HeaderCommentNeedTag => "Header comment need `@{{tag}}` tag",
            MessageId::HeaderCommentNeedTagValue => "Header `@{{tag}}` tag need a value",
            MessageId::TagComment => "Exist '{{tag}}' tag comment",
            MessageId::MissingScope => {
                "Tag comment '{{tag}}' is missing a scope. Use format: {{tag}}(scope)"
            }
            MessageId::MissingInlineCode => {
                "The word \"{{word}}\" should be wrapped in inline code"
            }
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            MessageId::HeaderCommentEnforce => "headerCommentEnforce",
            MessageId::HeaderCommentNeedTag => "headerCommentNeedTag",
            MessageId::HeaderCommentNeedTagValue => "headerCommentNeedTagValue",
            MessageId::TagComment => "tagComment",
            MessageId::MissingScope => "missingScope",
            MessageId::MissingInlineCode => "missingInlineCode",
        };
        f.write_str(id)
    }
}

/// Replace the source text in `range` with `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub range: Range<usize>,
    pub text: String,
}

/// Build a fix descriptor replacing `range` with `replacement`.
pub fn build_fix(range: Range<usize>, replacement: impl Into<String>) -> Fix {
    Fix {
        range,
        text: replacement.into(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: &'static str,
    pub message_id: MessageId,
    pub data: BTreeMap<String, String>,
    pub location: Location,
    /// Width of a single-line span starting at `location`.
    pub length: Option<usize>,
    pub fix: Option<Fix>,
}

impl Violation {
    pub fn new(rule: &'static str, message_id: MessageId, location: Location) -> Self {
        Self {
            rule,
            message_id,
            data: BTreeMap::new(),
            location,
            length: None,
            fix: None,
        }
    }

    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// The message template with its placeholders filled in.
    pub fn message(&self) -> String {
        let mut message = self.message_id.template().to_string();
        for (key, value) in &self.data {
            message = message.replace(&format!("{{{{{}}}}}", key), value);
        }
        message
    }
}

/// Collects the violations of one rule over one file.
#[derive(Debug)]
pub struct Reporter {
    rule: &'static str,
    violations: Vec<Violation>,
}

impl Reporter {
    pub fn new(rule: &'static str) -> Self {
        Self {
            rule,
            violations: Vec::new(),
        }
    }

    pub fn report(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Report a problem inside `comment`.
    ///
    /// `span` is the precise start and length of the offending text. Without
    /// it the diagnostic is anchored at the comment itself.
    pub fn report_comment(
        &mut self,
        comment: &Comment,
        message_id: MessageId,
        data: &[(&str, &str)],
        span: Option<(Location, usize)>,
    ) {
        let mut violation = match span {
            Some((location, length)) => {
                Violation::new(self.rule, message_id, location).with_length(length)
            }
            None => Violation::new(self.rule, message_id, comment.start),
        };
        for (key, value) in data {
            violation = violation.with_data(key, value);
        }
        self.report(violation);
    }

    pub fn finish(self) -> Vec<Violation> {
        self.violations
    }
}
