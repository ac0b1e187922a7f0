//! Text generation service settings.

use serde::{Deserialize, Serialize};

/// Which completion API the generator talks to.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenerationProvider {
    /// Google Gemini `generateContent`.
    #[default]
    Gemini,
    /// Any OpenAI-compatible `chat/completions` endpoint.
    Openai,
}

impl GenerationProvider {
    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            Self::Openai => "https://api.openai.com/v1",
        }
    }

    #[must_use]
    pub const fn default_model(self) -> &'static str {
        match self {
            Self::Gemini => "gemini-2.0-flash",
            Self::Openai => "gpt-4o-mini",
        }
    }
}

const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub provider: GenerationProvider,

    /// API key. Also read from `GEMINI_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Model name. Empty means the provider default.
    #[serde(default)]
    pub model: String,

    /// API base URL override (local gateways, proxies).
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub temperature: Option<f32>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: GenerationProvider::default(),
            api_key: String::new(),
            model: String::new(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
            temperature: None,
        }
    }
}

impl GenerationConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        if self.model.trim().is_empty() {
            self.provider.default_model()
        } else {
            &self.model
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
            .trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_gemini_without_key() {
        let config = GenerationConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model(), "gemini-2.0-flash");
        assert_eq!(
            config.base_url(),
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }

    #[test]
    fn openai_defaults_and_overrides() {
        let config = GenerationConfig {
            provider: GenerationProvider::Openai,
            api_key: "sk-test".into(),
            base_url: Some("http://localhost:11434/v1/".into()),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert_eq!(config.model(), "gpt-4o-mini");
        assert_eq!(config.base_url(), "http://localhost:11434/v1");
    }

    #[test]
    fn blank_key_is_not_configured() {
        let config = GenerationConfig {
            api_key: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
