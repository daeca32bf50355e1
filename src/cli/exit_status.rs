use std::process::ExitCode;

/// Exit status of a CLI command.
///
/// - `Success` (0): No errors found (warnings alone do not fail a run)
/// - `Failure` (1): Errors were found, or a dry-run has pending fixes
/// - `Error` (2): The command itself failed (bad config, I/O error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a lint run that found `error_count` errors.
    pub fn from_error_count(error_count: usize) -> Self {
        if error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
