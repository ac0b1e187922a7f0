//! Embedding error types.

/// Errors that can occur during embedding generation.
///
/// Retrieval treats every variant the same way: no context for this query.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    /// No encoder is available (initialization failed earlier at startup).
    #[error("Encoder unavailable: {0}")]
    Unavailable(String),

    /// Model initialization failed (download, ONNX runtime, cache issues).
    #[error("Model initialization failed: {0}")]
    InitFailed(String),

    /// Embedding generation failed (inference error, invalid input).
    #[error("Embedding generation failed: {0}")]
    EmbedFailed(String),

    /// Model returned zero embeddings for a non-empty input.
    #[error("Empty result from embedding model")]
    EmptyResult,

    /// Model returned a different number of vectors than texts it was given.
    #[error("Encoder returned {actual} vectors for {expected} texts")]
    CountMismatch { expected: usize, actual: usize },
}
