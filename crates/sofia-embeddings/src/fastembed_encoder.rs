//! fastembed-backed [`Encoder`].

use std::path::PathBuf;

use fastembed::{EmbeddingModel, TextEmbedding, TextInitOptions};

use crate::{EmbeddingError, Encoder};

/// Local embedding engine backed by fastembed (ONNX runtime).
///
/// Wraps the `AllMiniLML6V2` model (sentence-transformers/all-MiniLM-L6-v2)
/// to produce 384-dimensional float vectors. Model files are downloaded on
/// first use and cached in the configured directory.
pub struct FastEmbedEncoder {
    model: TextEmbedding,
}

impl FastEmbedEncoder {
    /// Create a new encoder with the `AllMiniLML6V2` model.
    ///
    /// Downloads the model on first run (~80MB) into `cache_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`EmbeddingError::InitFailed`] if model download or ONNX initialization fails.
    pub fn new(cache_dir: PathBuf, show_download_progress: bool) -> Result<Self, EmbeddingError> {
        let model = TextEmbedding::try_new(
            TextInitOptions::new(EmbeddingModel::AllMiniLML6V2)
                .with_cache_dir(cache_dir)
                .with_show_download_progress(show_download_progress),
        )
        .map_err(|e| EmbeddingError::InitFailed(e.to_string()))?;

        tracing::info!(model = "all-MiniLM-L6-v2", "embedding model ready");
        Ok(Self { model })
    }

    /// Embedding vector dimensionality (always 384 for `AllMiniLML6V2`).
    #[must_use]
    pub const fn model_dimension() -> usize {
        384
    }
}

impl Encoder for FastEmbedEncoder {
    fn encode(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.model
            .embed(texts, None)
            .map_err(|e| EmbeddingError::EmbedFailed(e.to_string()))
    }

    fn dimension(&self) -> usize {
        Self::model_dimension()
    }
}
