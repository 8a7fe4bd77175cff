use thiserror::Error;

/// Every way a lesson request can fail.
///
/// The `Display` output of each variant is the exact message returned to the
/// caller in the `error` field of the response body.
#[derive(Debug, Error)]
pub enum TutorError {
    #[error("API key is not configured on the server.")]
    MissingApiKey,

    /// The detail is kept for the logs only; callers always see the fixed message.
    #[error("Invalid request body.")]
    InvalidBody(String),

    #[error("No skills provided.")]
    NoSkills,

    #[error("API Error: {status} {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("Invalid response from AI. No content found.")]
    NoContent,

    #[error("{0}")]
    HttpError(String),

    #[error("{0}")]
    Internal(String),
}

impl TutorError {
    /// HTTP status code reported for this fault.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            TutorError::InvalidBody(_) | TutorError::NoSkills => 400,
            TutorError::MissingApiKey
            | TutorError::UpstreamStatus { .. }
            | TutorError::NoContent
            | TutorError::HttpError(_)
            | TutorError::Internal(_) => 500,
        }
    }

    /// Whether the caller can fix this by changing the request.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

// Request URLs carry the API key in the query string, so they never reach the message.
impl From<reqwest::Error> for TutorError {
    fn from(error: reqwest::Error) -> Self {
        TutorError::HttpError(error.without_url().to_string())
    }
}

impl From<serde_json::Error> for TutorError {
    fn from(error: serde_json::Error) -> Self {
        TutorError::InvalidBody(error.to_string())
    }
}
