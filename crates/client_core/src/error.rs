use thiserror::Error;

/// Shown to the user for every failed submission, whatever the cause.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "server error: check that the portfolio generator is running";

#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Network failure, non-2xx status, unreadable attachment or failed save.
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    Failed { source: anyhow::Error },
}

impl SubmissionError {
    pub fn cause(&self) -> &anyhow::Error {
        match self {
            SubmissionError::Failed { source } => source,
        }
    }
}
