use serde::{Deserialize, Serialize};
use sofia_core::{ResourceLink, RetrievalMatch, Verdict};

/// Everything produced for one question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reply {
    /// Generated answer, or the visible error string when generation failed.
    pub answer: String,
    pub matches: Vec<RetrievalMatch>,
    /// `None` when no answer could be generated.
    pub verdict: Option<Verdict>,
    /// Whether the user may now leave a contact address.
    pub contact_offered: bool,
    pub suggestions: Vec<ResourceLink>,
    /// Underlying generation failure, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_error: Option<String>,
}

impl Reply {
    #[must_use]
    pub const fn is_answered(&self) -> bool {
        self.verdict.is_some()
    }
}

/// Result of a follow-up submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum FollowupOutcome {
    /// The channel accepted the notification.
    Sent,
    /// The channel answered but refused it.
    NotAccepted,
    /// The contact address was malformed; nothing was sent.
    Rejected(String),
    /// The channel was unreachable or not configured.
    Failed(String),
    /// The latest answer did not offer contact.
    NotOffered,
}

impl FollowupOutcome {
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}
