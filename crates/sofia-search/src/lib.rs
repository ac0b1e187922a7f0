//! # sofia-search
//!
//! Similarity retrieval over the FAQ corpus.
//!
//! A user question is encoded, compared by cosine similarity against the
//! cached vectors of every corpus question, ranked, cut to `top_k` and
//! filtered by threshold. "Nothing similar enough" is a normal outcome and
//! yields an empty list, never an error: the generator is then asked to say
//! it lacks information.

pub mod error;
mod similarity;

pub use error::SearchError;
pub use similarity::{RetrievalParams, cosine_similarity, rank};

use std::sync::Arc;

use sofia_core::{Corpus, RetrievalMatch};
use sofia_embeddings::{EmbeddingIndex, Encoder};

/// Ranks corpus entries against user questions.
pub struct Retriever<E> {
    index: Arc<EmbeddingIndex<E>>,
    params: RetrievalParams,
}

impl<E> Clone for Retriever<E> {
    fn clone(&self) -> Self {
        Self {
            index: Arc::clone(&self.index),
            params: self.params,
        }
    }
}

impl<E: Encoder> Retriever<E> {
    pub const fn new(index: Arc<EmbeddingIndex<E>>, params: RetrievalParams) -> Self {
        Self { index, params }
    }

    #[must_use]
    pub const fn params(&self) -> RetrievalParams {
        self.params
    }

    #[must_use]
    pub fn index(&self) -> &EmbeddingIndex<E> {
        &self.index
    }

    /// Retrieve matches, surfacing encoder failures.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Embedding`] if the encoder is unavailable or
    /// fails, and [`SearchError::DimensionMismatch`] if query and corpus
    /// vectors disagree in length.
    pub fn try_retrieve(
        &self,
        question: &str,
        corpus: &Corpus,
    ) -> Result<Vec<RetrievalMatch>, SearchError> {
        if corpus.is_empty() {
            return Ok(Vec::new());
        }

        let corpus_vectors = self.index.vectors_for_corpus(corpus)?;
        let query = self.index.encode_query(question)?;

        if let Some(mismatch) = corpus_vectors.iter().find(|v| v.len() != query.len()) {
            return Err(SearchError::DimensionMismatch {
                query: query.len(),
                corpus: mismatch.len(),
            });
        }

        let matches: Vec<RetrievalMatch> = rank(&query, &corpus_vectors, self.params)
            .into_iter()
            .filter_map(|(index, score)| {
                corpus.get(index).map(|entry| RetrievalMatch {
                    index,
                    entry: entry.clone(),
                    score,
                })
            })
            .collect();

        tracing::debug!(
            candidates = corpus.len(),
            matches = matches.len(),
            best = matches.first().map(|m| m.score),
            "retrieval ranked corpus"
        );
        Ok(matches)
    }

    /// Retrieve matches, degrading every failure to "no context".
    #[must_use]
    pub fn retrieve(&self, question: &str, corpus: &Corpus) -> Vec<RetrievalMatch> {
        self.try_retrieve(question, corpus).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "retrieval unavailable; answering without context");
            Vec::new()
        })
    }
}
