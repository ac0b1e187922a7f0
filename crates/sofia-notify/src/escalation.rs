//! Follow-up requests for unanswered questions.

use sofia_core::ContactRequest;

use crate::error::EscalationError;
use crate::{Notifier, validate_email};

/// A push message for a human operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    /// The operator alert for a contact request from `assistant`.
    #[must_use]
    pub fn contact_request(assistant: &str, request: &ContactRequest) -> Self {
        Self {
            title: format!("{assistant} - Nova solicitação de contato"),
            message: format!(
                "Nova solicitação de contato - {assistant} Chatbot\n\nE-mail: {}\nPergunta: {}",
                request.email, request.originating_question
            ),
        }
    }
}

/// Validates contact requests and forwards them to the notification channel.
///
/// Nothing is retried or deduplicated: every call that passes validation
/// sends one independent notification.
pub struct EscalationManager<N> {
    notifier: N,
    assistant_name: String,
}

impl<N: Notifier> EscalationManager<N> {
    pub fn new(notifier: N, assistant_name: impl Into<String>) -> Self {
        Self {
            notifier,
            assistant_name: assistant_name.into(),
        }
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Send a follow-up request. Returns whether the channel accepted it.
    ///
    /// # Errors
    ///
    /// Returns [`EscalationError::InvalidContactAddress`] without contacting
    /// the channel if the address is malformed, and
    /// [`EscalationError::Notification`] if delivery fails.
    pub async fn request_followup(&self, request: &ContactRequest) -> Result<bool, EscalationError> {
        if !validate_email(&request.email) {
            return Err(EscalationError::InvalidContactAddress {
                address: request.email.clone(),
            });
        }

        let notification = Notification::contact_request(&self.assistant_name, request);
        let accepted = self.notifier.send(&notification).await?;
        if accepted {
            tracing::info!("follow-up request delivered");
        } else {
            tracing::warn!("follow-up request not accepted by channel");
        }
        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NotifyError;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Records every notification; answers with a fixed result.
    struct RecordingNotifier {
        sent: Mutex<Vec<Notification>>,
        result: fn() -> Result<bool, NotifyError>,
    }

    impl RecordingNotifier {
        fn new(result: fn() -> Result<bool, NotifyError>) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                result,
            }
        }

        fn sent(&self) -> Vec<Notification> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        async fn send(&self, notification: &Notification) -> Result<bool, NotifyError> {
            self.sent.lock().unwrap().push(notification.clone());
            (self.result)()
        }
    }

    fn request(email: &str) -> ContactRequest {
        ContactRequest::new(email, "Qual o horário do templo?")
    }

    #[test]
    fn notification_names_address_and_question() {
        let n = Notification::contact_request("Sofia", &request("a@b.co"));
        assert_eq!(n.title, "Sofia - Nova solicitação de contato");
        assert_eq!(
            n.message,
            "Nova solicitação de contato - Sofia Chatbot\n\nE-mail: a@b.co\nPergunta: Qual o horário do templo?"
        );
    }

    #[tokio::test]
    async fn valid_address_is_forwarded() {
        let manager = EscalationManager::new(RecordingNotifier::new(|| Ok(true)), "Sofia");
        assert!(manager.request_followup(&request("a@b.co")).await.unwrap());
        assert_eq!(manager.notifier().sent().len(), 1);
    }

    #[tokio::test]
    async fn invalid_address_sends_nothing() {
        let manager = EscalationManager::new(RecordingNotifier::new(|| Ok(true)), "Sofia");
        let err = manager
            .request_followup(&request("a@@b.co"))
            .await
            .unwrap_err();
        assert!(matches!(err, EscalationError::InvalidContactAddress { .. }));
        assert!(manager.notifier().sent().is_empty());
    }

    #[tokio::test]
    async fn resubmission_sends_again() {
        let manager = EscalationManager::new(RecordingNotifier::new(|| Ok(true)), "Sofia");
        manager.request_followup(&request("a@b.co")).await.unwrap();
        manager.request_followup(&request("a@b.co")).await.unwrap();
        let sent = manager.notifier().sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], sent[1]);
    }

    #[tokio::test]
    async fn refusal_and_failure_are_distinct() {
        let refused = EscalationManager::new(RecordingNotifier::new(|| Ok(false)), "Sofia");
        assert!(!refused.request_followup(&request("a@b.co")).await.unwrap());

        let broken = EscalationManager::new(
            RecordingNotifier::new(|| Err(NotifyError::MissingCredentials)),
            "Sofia",
        );
        let err = broken.request_followup(&request("a@b.co")).await.unwrap_err();
        assert!(matches!(
            err,
            EscalationError::Notification(NotifyError::MissingCredentials)
        ));
    }
}
