use serde::{Deserialize, Serialize};

/// A user's request to be contacted about a question the assistant could not answer.
///
/// Ephemeral: validated, forwarded to the notification channel, then dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRequest {
    pub email: String,
    /// The question that produced the unsatisfactory answer.
    pub originating_question: String,
}

impl ContactRequest {
    pub fn new(email: impl Into<String>, originating_question: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            originating_question: originating_question.into(),
        }
    }
}
