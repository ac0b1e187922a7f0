//! Search error types for sofia-search.

/// Errors from similarity retrieval.
///
/// [`crate::Retriever::retrieve`] logs these and returns no matches;
/// [`crate::Retriever::try_retrieve`] surfaces them.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Error from the embedding engine.
    #[error("embedding error: {0}")]
    Embedding(#[from] sofia_embeddings::EmbeddingError),

    /// Query and corpus vectors have different lengths (encoder swapped mid-run).
    #[error("query vector has {query} dimensions but corpus vectors have {corpus}")]
    DimensionMismatch { query: usize, corpus: usize },
}
