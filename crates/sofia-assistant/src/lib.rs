//! # sofia-assistant
//!
//! The question answering pipeline.
//!
//! One question runs retrieve, generate, classify, then suggest, in that
//! order. The answer is classified exactly once and that single
//! [`Verdict`] drives the contact offer recorded on the caller's
//! [`Conversation`]. Only a missing corpus stops the assistant, and that
//! happens before an [`Assistant`] exists: encoder, generator and notifier
//! failures all come back as values inside [`Reply`] or [`FollowupOutcome`].
//!
//! An [`Assistant`] is shared read-only across sessions. Each session owns
//! its [`Conversation`] and passes it in by `&mut`.

mod error;
mod reply;
mod settings;

pub use error::AskError;
pub use reply::{FollowupOutcome, Reply};
pub use settings::AssistantSettings;

use std::sync::Arc;

use sofia_core::{Conversation, CoreError, Corpus, EscalationStatus, RetrievalMatch, Verdict};
use sofia_embeddings::{EmbeddingIndex, Encoder};
use sofia_generation::{Generator, PromptTemplate, SatisfactionClassifier};
use sofia_notify::{EscalationError, EscalationManager, Notifier};
use sofia_resources::ResourceSuggester;
use sofia_search::Retriever;

pub struct Assistant<E, G, N> {
    corpus: Corpus,
    retriever: Retriever<E>,
    generator: G,
    escalation: EscalationManager<N>,
    prompt: PromptTemplate,
    classifier: Box<dyn SatisfactionClassifier>,
    suggester: ResourceSuggester,
    generation_error_prefix: String,
}

impl<E, G, N> Assistant<E, G, N>
where
    E: Encoder + 'static,
    G: Generator,
    N: Notifier,
{
    pub fn new(
        corpus: Corpus,
        index: Arc<EmbeddingIndex<E>>,
        generator: G,
        notifier: N,
        settings: AssistantSettings,
    ) -> Self {
        Self {
            corpus,
            retriever: Retriever::new(index, settings.retrieval),
            generator,
            escalation: EscalationManager::new(notifier, settings.assistant_name),
            prompt: settings.prompt,
            classifier: settings.classifier,
            suggester: settings.suggester,
            generation_error_prefix: settings.generation_error_prefix,
        }
    }

    #[must_use]
    pub const fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[must_use]
    pub const fn suggester(&self) -> &ResourceSuggester {
        &self.suggester
    }

    #[must_use]
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        self.escalation.notifier()
    }

    /// Encode the corpus ahead of the first question.
    ///
    /// Returns whether the corpus vectors are ready. A failure only means
    /// answers will be generated without context.
    pub async fn warm_up(&self) -> bool {
        let retriever = self.retriever.clone();
        let corpus = self.corpus.clone();
        let ready = tokio::task::spawn_blocking(move || {
            retriever.index().vectors_for_corpus(&corpus).map(|v| v.len())
        })
        .await;
        match ready {
            Ok(Ok(count)) => {
                tracing::info!(vectors = count, "corpus embeddings ready");
                true
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "corpus embeddings unavailable");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "embedding task failed");
                false
            }
        }
    }

    /// Answer `question` and record the exchange on `conversation`.
    ///
    /// # Errors
    ///
    /// Returns [`AskError::EmptyQuestion`] for a blank question; the
    /// conversation is left untouched.
    pub async fn ask(
        &self,
        conversation: &mut Conversation,
        question: &str,
    ) -> Result<Reply, AskError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AskError::EmptyQuestion);
        }

        let matches = self.retrieve(question).await;
        let prompt = self.prompt.render(question, &matches);

        let (answer, verdict, generation_error) = match self.generator.generate(&prompt).await {
            Ok(answer) => {
                let verdict = self.classifier.classify(&answer);
                (answer, Some(verdict), None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "generation failed");
                let message = e.to_string();
                (
                    format!("{}: {message}", self.generation_error_prefix),
                    None,
                    Some(message),
                )
            }
        };

        conversation.record_exchange(question, answer.as_str(), verdict);
        let contact_offered = verdict.is_some_and(Verdict::is_unsatisfactory);
        let suggestions = self.suggester.suggest(question);

        tracing::info!(
            matches = matches.len(),
            verdict = verdict.map(Verdict::as_str),
            contact_offered,
            suggestions = suggestions.len(),
            "question answered"
        );

        Ok(Reply {
            answer,
            matches,
            verdict,
            contact_offered,
            suggestions,
            generation_error,
        })
    }

    /// Retrieval runs on the blocking pool; the encoder is synchronous.
    async fn retrieve(&self, question: &str) -> Vec<RetrievalMatch> {
        let retriever = self.retriever.clone();
        let corpus = self.corpus.clone();
        let question = question.to_string();
        tokio::task::spawn_blocking(move || retriever.retrieve(&question, &corpus))
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "retrieval task failed; answering without context");
                Vec::new()
            })
    }

    /// Ask for a human follow-up on the question that produced the latest
    /// unsatisfactory answer.
    ///
    /// Only allowed while the conversation offers contact. Resubmitting after
    /// an earlier attempt is allowed and sends a new notification for the
    /// same originating question.
    pub async fn request_followup(
        &self,
        conversation: &mut Conversation,
        email: &str,
    ) -> FollowupOutcome {
        let request = match conversation.contact_request(email) {
            Ok(request) => request,
            Err(CoreError::NoPendingOffer | CoreError::InvalidTransition { .. }) => {
                return FollowupOutcome::NotOffered;
            }
        };

        let (status, outcome) = match self.escalation.request_followup(&request).await {
            Ok(true) => (EscalationStatus::Sent, FollowupOutcome::Sent),
            Ok(false) => (EscalationStatus::Failed, FollowupOutcome::NotAccepted),
            Err(e @ EscalationError::InvalidContactAddress { .. }) => {
                (EscalationStatus::Rejected, FollowupOutcome::Rejected(e.to_string()))
            }
            Err(EscalationError::Notification(e)) => {
                tracing::warn!(error = %e, "follow-up notification failed");
                (EscalationStatus::Failed, FollowupOutcome::Failed(e.to_string()))
            }
        };

        if let Err(e) = conversation.mark_followup(status) {
            tracing::warn!(error = %e, "could not record follow-up outcome");
        }
        outcome
    }
}
