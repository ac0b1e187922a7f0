//! # sofia-generation
//!
//! Turns retrieved FAQ matches into an answer.
//!
//! - [`PromptTemplate`] renders the grounded prompt.
//! - [`Generator`] is the seam to the text generation service, with
//!   [`GeminiGenerator`] and [`OpenAiGenerator`] implementations selected by
//!   [`ConfiguredGenerator::from_config`].
//! - [`SatisfactionClassifier`] judges the answer; [`MarkerClassifier`] looks
//!   for configured insufficiency phrases.
//!
//! Generation failures are returned as [`GenerationError`] values and never
//! panic. The caller decides how to show them.

mod classify;
pub mod error;
mod gemini;
mod http;
mod openai;
mod prompt;

pub use classify::{MarkerClassifier, SatisfactionClassifier};
pub use error::GenerationError;
pub use gemini::GeminiGenerator;
pub use openai::OpenAiGenerator;
pub use prompt::PromptTemplate;

use std::future::Future;

use sofia_config::{GenerationConfig, GenerationProvider};

/// A text generation service: prompt in, answer text out.
pub trait Generator: Send + Sync {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

/// The generator chosen by `generation.provider`.
pub enum ConfiguredGenerator {
    Gemini(GeminiGenerator),
    OpenAi(OpenAiGenerator),
}

impl ConfiguredGenerator {
    /// # Errors
    ///
    /// Returns [`GenerationError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &GenerationConfig) -> Result<Self, GenerationError> {
        Ok(match config.provider {
            GenerationProvider::Gemini => Self::Gemini(GeminiGenerator::new(config)?),
            GenerationProvider::Openai => Self::OpenAi(OpenAiGenerator::new(config)?),
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        match self {
            Self::Gemini(g) => g.model(),
            Self::OpenAi(g) => g.model(),
        }
    }
}

impl Generator for ConfiguredGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        match self {
            Self::Gemini(g) => g.generate(prompt).await,
            Self::OpenAi(g) => g.generate(prompt).await,
        }
    }
}
