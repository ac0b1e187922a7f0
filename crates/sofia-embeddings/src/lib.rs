//! # sofia-embeddings
//!
//! Dense question embeddings for Sofia.
//!
//! - [`Encoder`] is the seam to the vector-encoder service. It must be
//!   deterministic for a fixed model version.
//! - [`FastEmbedEncoder`] runs `all-MiniLM-L6-v2` locally through fastembed
//!   (ONNX runtime), no API key required.
//! - [`EmbeddingIndex`] owns an encoder and caches the vectors of the current
//!   corpus snapshot so they are computed once, not once per question.
//!
//! ## Async usage
//!
//! Encoding is synchronous and CPU-bound. From async code, run it on the
//! blocking pool with an `Arc<EmbeddingIndex<_>>`:
//!
//! ```ignore
//! let index = Arc::clone(&index);
//! let vectors = tokio::task::spawn_blocking(move || index.vectors_for_corpus(&corpus)).await??;
//! ```

pub mod error;
mod fastembed_encoder;
mod index;

pub use error::EmbeddingError;
pub use fastembed_encoder::FastEmbedEncoder;
pub use index::EmbeddingIndex;

/// Maps texts to fixed-length vectors.
///
/// Implementations return exactly one vector per input text, in input order,
/// all of the same dimensionality.
pub trait Encoder: Send {
    /// Encode a batch of texts.
    ///
    /// # Errors
    ///
    /// Returns an [`EmbeddingError`] if the underlying model cannot run.
    fn encode(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Length of every vector this encoder produces.
    fn dimension(&self) -> usize;
}
