use crate::issues::Issue;

use super::super::exit_status::ExitStatus;

/// Result of one lint run.
pub struct CommandResult {
    /// All issues found, sorted by file and position.
    pub issues: Vec<Issue>,
    pub error_count: usize,
    pub warning_count: usize,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of source files that were linted.
    pub files_checked: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::from_error_count(self.error_count)
    }
}
