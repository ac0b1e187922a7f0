use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One question/answer pair of the knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CorpusEntry {
    pub question: String,
    pub answer: String,
}

impl CorpusEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Immutable, ordered snapshot of the knowledge base.
///
/// Entries are identified by their position. Cloning is cheap (the entries
/// are shared), so one snapshot can be handed to every session.
///
/// The fingerprint is derived from every question and answer in order and
/// identifies the snapshot for embedding caches. Two corpora with the same
/// content in the same order share a fingerprint.
#[derive(Debug, Clone)]
pub struct Corpus {
    entries: Arc<[CorpusEntry]>,
    fingerprint: u64,
}

impl Corpus {
    #[must_use]
    pub fn new(entries: Vec<CorpusEntry>) -> Self {
        let mut hasher = DefaultHasher::new();
        entries.len().hash(&mut hasher);
        for entry in &entries {
            entry.hash(&mut hasher);
        }
        Self {
            fingerprint: hasher.finish(),
            entries: entries.into(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[must_use]
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CorpusEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Question texts in corpus order, ready to hand to an encoder.
    #[must_use]
    pub fn questions(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.question.clone()).collect()
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<CorpusEntry> for Corpus {
    fn from_iter<T: IntoIterator<Item = CorpusEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
