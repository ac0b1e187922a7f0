//! # sofia-core
//!
//! Core types and error types for Sofia.
//!
//! This crate provides the foundational types shared across all Sofia crates:
//! - Corpus entries and the immutable [`Corpus`](entities::Corpus) snapshot
//! - Retrieval matches produced per query
//! - The caller-owned [`Conversation`](entities::Conversation) log with its
//!   escalation state machine
//! - Contact requests, resource links and keyword rules
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;

pub use entities::{
    ContactRequest, Conversation, ConversationTurn, Corpus, CorpusEntry, KeywordRule,
    ResourceLink, RetrievalMatch,
};
pub use enums::{EscalationStatus, Role, Verdict};
pub use errors::CoreError;
