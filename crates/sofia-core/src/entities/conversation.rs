use serde::{Deserialize, Serialize};

use crate::entities::ContactRequest;
use crate::enums::{EscalationStatus, Role, Verdict};
use crate::errors::CoreError;

/// One message of a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationTurn {
    pub role: Role,
    pub text: String,
}

/// Caller-owned, append-only conversation log for a single session.
///
/// Turns are only ever appended in user/assistant pairs through
/// [`Conversation::record_exchange`], so a user turn is always immediately
/// followed by its answer. The log also carries the escalation state derived
/// from the latest answer; nothing else in the system holds session state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    turns: Vec<ConversationTurn>,
    escalation: EscalationStatus,
    pending_question: Option<String>,
}

impl Conversation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    #[must_use]
    pub const fn escalation(&self) -> EscalationStatus {
        self.escalation
    }

    /// The question awaiting a follow-up, if the latest answer was unsatisfactory.
    #[must_use]
    pub fn pending_followup(&self) -> Option<&str> {
        self.pending_question.as_deref()
    }

    #[must_use]
    pub fn last_question(&self) -> Option<&str> {
        self.last_of(Role::User)
    }

    #[must_use]
    pub fn last_answer(&self) -> Option<&str> {
        self.last_of(Role::Assistant)
    }

    fn last_of(&self, role: Role) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.role == role)
            .map(|t| t.text.as_str())
    }

    /// Append a question and its answer, and move the escalation state.
    ///
    /// `verdict` is `None` when no answer could be generated; like a
    /// satisfactory answer, that never offers contact.
    pub fn record_exchange(
        &mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
        verdict: Option<Verdict>,
    ) {
        let question = question.into();
        self.turns.push(ConversationTurn {
            role: Role::User,
            text: question.clone(),
        });
        self.turns.push(ConversationTurn {
            role: Role::Assistant,
            text: answer.into(),
        });

        if verdict.is_some_and(Verdict::is_unsatisfactory) {
            self.escalation = EscalationStatus::ContactOffered;
            self.pending_question = Some(question);
        } else {
            self.escalation = EscalationStatus::Idle;
            self.pending_question = None;
        }
    }

    /// Build a contact request for the pending question.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NoPendingOffer`] if the latest answer did not offer contact.
    pub fn contact_request(&self, email: &str) -> Result<ContactRequest, CoreError> {
        if !self.escalation.accepts_submission() {
            return Err(CoreError::NoPendingOffer);
        }
        self.pending_question
            .as_deref()
            .map(|q| ContactRequest::new(email, q))
            .ok_or(CoreError::NoPendingOffer)
    }

    /// Record the outcome of a follow-up submission.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] if the state machine does not
    /// allow moving from the current state to `status`.
    pub fn mark_followup(&mut self, status: EscalationStatus) -> Result<(), CoreError> {
        let outcome = matches!(
            status,
            EscalationStatus::Sent | EscalationStatus::Rejected | EscalationStatus::Failed
        );
        if !outcome || !self.escalation.can_transition_to(status) {
            return Err(CoreError::InvalidTransition {
                from: self.escalation,
                to: status,
            });
        }
        self.escalation = status;
        Ok(())
    }

    /// Clear every turn and any pending contact offer.
    pub fn reset(&mut self) {
        self.turns.clear();
        self.escalation = EscalationStatus::Idle;
        self.pending_question = None;
    }
}
