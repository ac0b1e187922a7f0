//! Generation error types.

use thiserror::Error;

/// Errors from the text generation service.
///
/// None of these stop the pipeline: the assistant shows a message in place
/// of the answer and the conversation continues.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API key configured for a provider that needs one.
    #[error("API key for {provider} is not configured")]
    MissingApiKey { provider: &'static str },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service did not answer within the configured timeout.
    #[error("generation timed out")]
    Timeout,

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The response contained no text (empty candidates, safety block).
    #[error("empty response: {0}")]
    EmptyResponse(String),
}

impl GenerationError {
    /// Classify a transport error, keeping timeouts distinct.
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(error)
        }
    }
}
