//! Roles, verdicts and escalation status for Sofia.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Classification of a generated answer.
///
/// Computed exactly once per answer. Both the contact offer and any
/// downstream display decision are driven from the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Satisfactory,
    Unsatisfactory,
}

impl Verdict {
    #[must_use]
    pub const fn is_unsatisfactory(self) -> bool {
        matches!(self, Self::Unsatisfactory)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Satisfactory => "satisfactory",
            Self::Unsatisfactory => "unsatisfactory",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EscalationStatus
// ---------------------------------------------------------------------------

/// Escalation state of a conversation, driven by the latest answer.
///
/// ```text
/// idle → contact_offered → sent
///                        → rejected   (invalid address, user may retry)
///                        → failed     (channel unavailable, user may retry)
///                        → idle       (next answer was satisfactory)
/// ```
///
/// `sent`, `rejected` and `failed` keep the originating question, so a
/// resubmission produces another independent notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EscalationStatus {
    #[default]
    Idle,
    ContactOffered,
    Sent,
    Rejected,
    Failed,
}

impl EscalationStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Idle, Self::ContactOffered],
            Self::ContactOffered | Self::Sent | Self::Rejected | Self::Failed => &[
                Self::Idle,
                Self::ContactOffered,
                Self::Sent,
                Self::Rejected,
                Self::Failed,
            ],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether a follow-up submission is currently accepted.
    #[must_use]
    pub const fn accepts_submission(self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ContactOffered => "contact_offered",
            Self::Sent => "sent",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for EscalationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
