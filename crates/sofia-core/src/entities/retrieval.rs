use serde::{Deserialize, Serialize};

use super::CorpusEntry;

/// A corpus entry ranked against a user question.
///
/// Produced per query and never persisted. `index` is the entry's position
/// in the corpus it was retrieved from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrievalMatch {
    pub index: usize,
    pub entry: CorpusEntry,
    /// Cosine similarity in `[-1, 1]`.
    pub score: f32,
}
