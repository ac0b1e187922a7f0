//! Cross-cutting error types for Sofia.
//!
//! Component errors (`CorpusError`, `EmbeddingError`, `GenerationError`, ...)
//! live in their own crates. This module only holds errors raised by the
//! shared types themselves.

use thiserror::Error;

use crate::enums::EscalationStatus;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// An escalation transition was attempted that the state machine does not allow.
    #[error("Invalid escalation transition from {from} to {to}")]
    InvalidTransition {
        from: EscalationStatus,
        to: EscalationStatus,
    },

    /// A follow-up was recorded while no contact offer was pending.
    #[error("No contact offer is pending for this conversation")]
    NoPendingOffer,
}
