use crate::core::validation::ValidationError;

/// Notice shown for any failure that carries no message of its own
pub const GENERIC_FAILURE_NOTICE: &str =
    "Oops! Something went wrong. Please try again or contact us directly.";

/// Failures detected after the request was attempted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// Endpoint answered with a non-2xx status
    #[error("Submission rejected with status {status}")]
    Rejected {
        status: u16,
        /// Messages reported by the endpoint, joined
        message: Option<String>,
    },

    /// Request could not be sent or the response could not be read
    #[error("Network error: {0}")]
    Transport(String),

    /// Request body could not be built
    #[error("Failed to encode submission: {0}")]
    Encode(String),
}

/// Error returned by one waitlist submission attempt
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WaitlistError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl WaitlistError {
    /// Text shown to the user for this error
    pub fn notice(&self) -> String {
        match self {
            WaitlistError::Validation(err) => err.to_string(),
            WaitlistError::Submission(SubmissionError::Rejected {
                message: Some(message),
                ..
            }) => message.clone(),
            WaitlistError::Submission(_) => GENERIC_FAILURE_NOTICE.to_string(),
        }
    }

    /// Check whether the error was raised before any network activity
    pub fn is_validation(&self) -> bool {
        matches!(self, WaitlistError::Validation(_))
    }
}
