//! Cosine similarity and top-k ranking.

use serde::{Deserialize, Serialize};

/// Retrieval tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetrievalParams {
    /// Maximum number of matches returned.
    pub top_k: usize,
    /// Candidates scoring `<= threshold` are dropped.
    pub threshold: f32,
}

impl Default for RetrievalParams {
    fn default() -> Self {
        Self {
            top_k: 3,
            threshold: 0.3,
        }
    }
}

/// Cosine similarity between two vectors, clamped to `[-1, 1]`.
///
/// Returns `0.0` when either vector has zero norm.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vectors must have same dimensionality");
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let score = dot / (norm_a * norm_b);
    if score.is_nan() {
        0.0
    } else {
        score.clamp(-1.0, 1.0)
    }
}

/// Rank `candidates` against `query`.
///
/// Returns `(candidate index, score)` pairs sorted by descending score, ties
/// broken by lower index, truncated to `top_k`, keeping only scores strictly
/// above the threshold.
#[must_use]
pub fn rank(query: &[f32], candidates: &[Vec<f32>], params: RetrievalParams) -> Vec<(usize, f32)> {
    let mut scored: Vec<(usize, f32)> = candidates
        .iter()
        .enumerate()
        .map(|(i, v)| (i, cosine_similarity(query, v)))
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.truncate(params.top_k);
    scored.retain(|(_, score)| *score > params.threshold);
    scored
}
