use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): command completed and found nothing blocking
/// - `Failure` (1): command completed but found errors, unformatted documents
///   or, with `lookup --strict`, a missing translation
/// - `Error` (2): command could not run (bad config, unreadable input, ...)
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
