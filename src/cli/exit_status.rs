use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): Command completed successfully, no findings
/// - `Failure` (1): Command completed but found problems (missing keys, write conflict)
/// - `Error` (2): Command failed due to internal error (config error, I/O error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully, no findings.
    Success,
    /// Command completed but found problems.
    Failure,
    /// Command failed due to internal error.
    Error,
}

impl ExitStatus {
    /// Status of a command that completed with `problems` blocking findings.
    pub fn from_problems(problems: usize) -> Self {
        if problems > 0 {
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
