//! Local embedding model settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EmbeddingsConfig {
    /// Model cache directory. Defaults to `~/.sofia/cache/fastembed`.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// Show a progress bar while the model downloads on first use.
    #[serde(default)]
    pub show_download_progress: bool,
}

impl EmbeddingsConfig {
    /// Resolved model cache directory.
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(|| {
            dirs::home_dir().map_or_else(
                || PathBuf::from(".fastembed_cache"),
                |h| h.join(".sofia").join("cache").join("fastembed"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_cache_dir_wins() {
        let config = EmbeddingsConfig {
            cache_dir: Some(PathBuf::from("/tmp/models")),
            ..Default::default()
        };
        assert_eq!(config.cache_dir(), PathBuf::from("/tmp/models"));
    }

    #[test]
    fn default_cache_dir_is_fastembed() {
        let dir = EmbeddingsConfig::default().cache_dir();
        assert!(dir.ends_with("fastembed") || dir.ends_with(".fastembed_cache"));
    }
}
