//! Issue types for lint results.
//!
//! An issue is a rule violation bound to a file and a severity, or a file that
//! could not be linted at all. Each issue carries everything the reporters
//! need, so reporting never goes back to the source files.

use enum_dispatch::enum_dispatch;

use crate::core::{
    comments::Location,
    violation::{Fix, Violation},
};
use crate::rules::RuleSeverity;

/// Rule id reported for files that cannot be parsed.
pub const PARSE_ERROR_RULE: &str = "parse-error";

// ============================================================
// Severity
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Reported severity of a configured rule; `None` when the rule is off.
    pub fn from_rule_severity(severity: RuleSeverity) -> Option<Self> {
        match severity {
            RuleSeverity::Off => None,
            RuleSeverity::Warn => Some(Severity::Warning),
            RuleSeverity::Error => Some(Severity::Error),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A rule violation in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentIssue {
    pub file_path: String,
    pub severity: Severity,
    /// The source line at the violation, for context display.
    pub source_line: Option<String>,
    pub violation: Violation,
}

/// A source file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Comment(CommentIssue),
    ParseError(ParseErrorIssue),
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn file_path(&self) -> &str;

    /// Position of the issue; `None` for file-level issues.
    fn location(&self) -> Option<Location>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> &str;

    /// Source line at [`Report::location`].
    fn source_line(&self) -> Option<&str> {
        None
    }

    /// Width of the underlined span, in characters.
    fn span_length(&self) -> Option<usize> {
        None
    }

    fn fix(&self) -> Option<&Fix> {
        None
    }
}

impl Report for CommentIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn location(&self) -> Option<Location> {
        Some(self.violation.location)
    }

    fn message(&self) -> String {
        self.violation.message()
    }

    fn report_severity(&self) -> Severity {
        self.severity
    }

    fn report_rule(&self) -> &str {
        self.violation.rule
    }

    fn source_line(&self) -> Option<&str> {
        self.source_line.as_deref()
    }

    fn span_length(&self) -> Option<usize> {
        self.violation.length
    }

    fn fix(&self) -> Option<&Fix> {
        self.violation.fix.as_ref()
    }
}

impl Report for ParseErrorIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn location(&self) -> Option<Location> {
        None
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> &str {
        PARSE_ERROR_RULE
    }
}

// ============================================================
// Report ordering
// ============================================================

impl Issue {
    /// Order in which issues are reported: by file, then position, then rule.
    ///
    /// File-level issues sort before positioned ones in the same file. Use
    /// with a stable sort so issues of one rule at one position keep the
    /// order the rule reported them in.
    pub fn report_order(&self, other: &Self) -> std::cmp::Ordering {
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.location().cmp(&other.location()))
            .then_with(|| self.report_rule().cmp(other.report_rule()))
    }
}
