//! # sofia-config
//!
//! Layered configuration loading for Sofia using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SOFIA_*` prefix, `__` as separator)
//! 2. Legacy secret variables (`GEMINI_API_KEY`, `PUSHOVER_USER_KEY`, `PUSHOVER_API_TOKEN`)
//! 3. An explicit config file (`sofia --config path.toml`)
//! 4. Project-level `.sofia/config.toml`
//! 5. User-level `~/.config/sofia/config.toml`
//! 6. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SOFIA_RETRIEVAL__TOP_K` -> `retrieval.top_k`,
//! `SOFIA_GENERATION__API_KEY` -> `generation.api_key`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use sofia_config::SofiaConfig;
//!
//! let config = SofiaConfig::load_with_dotenv(None).expect("config");
//! config.validate().expect("valid config");
//!
//! if !config.generation.is_configured() {
//!     eprintln!("no API key for {:?}", config.generation.provider);
//! }
//! ```

mod assistant;
mod corpus;
mod embeddings;
mod error;
mod escalation;
mod generation;
mod notify;
mod resources;
mod retrieval;

pub use assistant::AssistantConfig;
pub use corpus::CorpusConfig;
pub use embeddings::EmbeddingsConfig;
pub use error::ConfigError;
pub use escalation::EscalationConfig;
pub use generation::{GenerationConfig, GenerationProvider};
pub use notify::NotifyConfig;
pub use resources::ResourcesConfig;
pub use retrieval::RetrievalConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Placeholder written over secrets by [`SofiaConfig::redacted`].
pub const REDACTED: &str = "********";

/// Unprefixed variables honoured for existing deployments, and the keys they fill.
const LEGACY_ENV: [(&str, &str); 3] = [
    ("GEMINI_API_KEY", "generation.api_key"),
    ("PUSHOVER_USER_KEY", "notify.user_key"),
    ("PUSHOVER_API_TOKEN", "notify.api_token"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SofiaConfig {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub embeddings: EmbeddingsConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    #[serde(default)]
    pub escalation: EscalationConfig,
    #[serde(default)]
    pub resources: ResourcesConfig,
}

impl SofiaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `explicit` points at a missing
    /// file, or [`ConfigError::Figment`] if extraction fails.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(explicit)?.extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (if any) before building the
    /// figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `explicit` does not exist.
    pub fn figment(explicit: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".sofia/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: --config
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::MissingFile {
                    path: path.to_path_buf(),
                });
            }
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: legacy secret variables
        figment = figment.merge(Env::raw().filter_map(|key| {
            LEGACY_ENV
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map(|(_, target)| (*target).into())
        }));

        // Layer 5: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("SOFIA_").split("__"));

        Ok(figment)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sofia").join("config.toml"))
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, reason: &str| {
            Err(ConfigError::InvalidValue {
                field: field.to_string(),
                reason: reason.to_string(),
            })
        };

        if self.retrieval.top_k == 0 {
            return invalid("retrieval.top_k", "must be at least 1");
        }
        if !(-1.0..=1.0).contains(&self.retrieval.threshold) {
            return invalid("retrieval.threshold", "must be within [-1, 1]");
        }
        if self.resources.per_keyword == 0 {
            return invalid("resources.per_keyword", "must be at least 1");
        }
        if self.generation.timeout_secs == 0 {
            return invalid("generation.timeout_secs", "must be at least 1");
        }
        if self.notify.timeout_secs == 0 {
            return invalid("notify.timeout_secs", "must be at least 1");
        }
        if self.corpus.question_column.trim().is_empty() {
            return invalid("corpus.question_column", "must not be empty");
        }
        if self.corpus.answer_column.trim().is_empty() {
            return invalid("corpus.answer_column", "must not be empty");
        }
        Ok(())
    }

    /// A copy safe to print: API keys and channel credentials are masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mask = |secret: &str| {
            if secret.is_empty() {
                String::new()
            } else {
                REDACTED.to_string()
            }
        };

        let mut copy = self.clone();
        copy.generation.api_key = mask(&self.generation.api_key);
        copy.notify.user_key = mask(&self.notify.user_key);
        copy.notify.api_token = mask(&self.notify.api_token);
        copy
    }
}
