//! Encoder ownership and the per-corpus vector cache.

use std::sync::{Arc, Mutex, MutexGuard};

use sofia_core::Corpus;

use crate::{EmbeddingError, Encoder};

struct CachedVectors {
    fingerprint: u64,
    vectors: Arc<Vec<Vec<f32>>>,
}

/// Wraps an [`Encoder`] and caches the corpus question vectors.
///
/// The cache holds one snapshot, keyed by [`Corpus::fingerprint`]. Handing
/// in a different corpus (a reload) replaces it. Corpus vectors are computed
/// while the cache lock is held, so concurrent first queries encode the
/// corpus exactly once and everyone else waits for that result.
///
/// User questions are encoded on demand and never cached.
pub struct EmbeddingIndex<E> {
    encoder: Result<Mutex<E>, String>,
    cache: Mutex<Option<CachedVectors>>,
}

impl<E: Encoder> EmbeddingIndex<E> {
    pub fn new(encoder: E) -> Self {
        Self {
            encoder: Ok(Mutex::new(encoder)),
            cache: Mutex::new(None),
        }
    }

    /// An index whose encoder could not be initialized.
    ///
    /// Every call returns [`EmbeddingError::Unavailable`] with `reason`.
    pub fn disabled(reason: impl Into<String>) -> Self {
        Self {
            encoder: Err(reason.into()),
            cache: Mutex::new(None),
        }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.encoder.is_ok()
    }

    fn lock_encoder(&self) -> Result<MutexGuard<'_, E>, EmbeddingError> {
        match &self.encoder {
            Ok(encoder) => encoder
                .lock()
                .map_err(|_| EmbeddingError::EmbedFailed("encoder lock poisoned".into())),
            Err(reason) => Err(EmbeddingError::Unavailable(reason.clone())),
        }
    }

    /// Encode arbitrary texts, checking the encoder returned one vector per text.
    ///
    /// # Errors
    ///
    /// Propagates encoder failures, and returns [`EmbeddingError::CountMismatch`]
    /// if the encoder broke its contract.
    pub fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let vectors = self.lock_encoder()?.encode(texts)?;
        if vectors.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: texts.len(),
                actual: vectors.len(),
            });
        }
        Ok(vectors)
    }

    /// Encode a single user question.
    ///
    /// # Errors
    ///
    /// Same as [`Self::encode`], plus [`EmbeddingError::EmptyResult`].
    pub fn encode_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.encode(&[text.to_string()])?
            .pop()
            .ok_or(EmbeddingError::EmptyResult)
    }

    /// Vectors for every corpus question, in corpus order.
    ///
    /// Computed on the first call for a given corpus snapshot and shared
    /// afterwards. An empty corpus never reaches the encoder.
    ///
    /// # Errors
    ///
    /// Same as [`Self::encode`]. A failed computation is not cached, so the
    /// next query tries again.
    pub fn vectors_for_corpus(&self, corpus: &Corpus) -> Result<Arc<Vec<Vec<f32>>>, EmbeddingError> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|_| EmbeddingError::EmbedFailed("corpus cache lock poisoned".into()))?;

        if let Some(cached) = cache.as_ref() {
            if cached.fingerprint == corpus.fingerprint() {
                return Ok(Arc::clone(&cached.vectors));
            }
        }

        let vectors = Arc::new(self.encode(&corpus.questions())?);
        tracing::info!(
            entries = corpus.len(),
            fingerprint = corpus.fingerprint(),
            "corpus embeddings computed"
        );
        *cache = Some(CachedVectors {
            fingerprint: corpus.fingerprint(),
            vectors: Arc::clone(&vectors),
        });
        Ok(vectors)
    }

    /// Fingerprint of the corpus snapshot currently cached, if any.
    #[must_use]
    pub fn cached_fingerprint(&self) -> Option<u64> {
        self.cache
            .lock()
            .ok()
            .and_then(|c| c.as_ref().map(|c| c.fingerprint))
    }

    /// Dimensionality of the underlying encoder, if it is available.
    #[must_use]
    pub fn dimension(&self) -> Option<usize> {
        self.lock_encoder().ok().map(|e| e.dimension())
    }
}
