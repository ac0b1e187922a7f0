//! Similarity retrieval parameters.

use serde::{Deserialize, Serialize};

const fn default_top_k() -> usize {
    3
}

const fn default_threshold() -> f32 {
    0.3
}

/// Trades recall (lower threshold, more context) against precision
/// (higher threshold, more "no information" answers).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct RetrievalConfig {
    /// Maximum number of matches handed to the generator.
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Matches scoring at or below this cosine similarity are dropped.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            threshold: default_threshold(),
        }
    }
}
