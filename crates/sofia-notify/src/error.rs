use thiserror::Error;

/// Failures delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Channel credentials are absent; nothing was sent.
    #[error("notification channel credentials are not configured")]
    MissingCredentials,

    #[error("notification request timed out")]
    Timeout,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl NotifyError {
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(error)
        }
    }
}

/// Failures of a follow-up request.
#[derive(Debug, Error)]
pub enum EscalationError {
    /// The address does not look like `local@domain.tld`. No notification
    /// was attempted.
    #[error("invalid contact address: {address}")]
    InvalidContactAddress { address: String },

    #[error(transparent)]
    Notification(#[from] NotifyError),
}
