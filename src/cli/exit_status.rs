use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and its output was delivered
/// - `Failure` (1): Command completed but the output file could not be written
/// - `Error` (2): Command failed (unreadable source file, bad config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
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
