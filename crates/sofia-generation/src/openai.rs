//! OpenAI-compatible `chat/completions` client.
//!
//! Also covers local gateways (Ollama, LM Studio) that speak the same API;
//! those usually need no key, so the key is only required when talking to the
//! default endpoint.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use sofia_config::{GenerationConfig, GenerationProvider};

use crate::Generator;
use crate::error::GenerationError;
use crate::http::check_response;

pub struct OpenAiGenerator {
    api_key: String,
    model: String,
    base_url: String,
    temperature: Option<f32>,
    client: reqwest::Client,
}

impl OpenAiGenerator {
    /// # Errors
    ///
    /// Returns [`GenerationError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            api_key: config.api_key.trim().to_string(),
            model: config.model().to_string(),
            base_url: config.base_url().to_string(),
            temperature: config.temperature,
            client,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn requires_key(&self) -> bool {
        self.base_url == GenerationProvider::Openai.default_base_url()
    }
}

impl Generator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if self.api_key.is_empty() && self.requires_key() {
            return Err(GenerationError::MissingApiKey { provider: "openai" });
        }

        let body = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "calling chat completions");
        let mut request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&body);
        if !self.api_key.is_empty() {
            request = request.header(AUTHORIZATION, format!("Bearer {}", self.api_key));
        }
        let resp = request
            .send()
            .await
            .map_err(GenerationError::from_transport)?;

        read_answer(resp).await
    }
}

async fn read_answer(resp: reqwest::Response) -> Result<String, GenerationError> {
    let resp = check_response(resp).await?;
    let parsed: ChatResponse = resp.json().await.map_err(GenerationError::from_transport)?;
    parsed
        .choices
        .into_iter()
        .find_map(|choice| choice.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| GenerationError::EmptyResponse(String::from("no message content")))
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn config(base_url: Option<&str>) -> GenerationConfig {
        GenerationConfig {
            provider: GenerationProvider::Openai,
            base_url: base_url.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn request_omits_unset_temperature() {
        let body = ChatRequest {
            model: "gpt-4o-mini",
            temperature: None,
            messages: vec![ChatMessage {
                role: "user",
                content: "Oi",
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "user", "content": "Oi"}]
            })
        );
    }

    #[test]
    fn key_required_only_for_default_endpoint() {
        assert!(OpenAiGenerator::new(&config(None)).unwrap().requires_key());
        assert!(
            !OpenAiGenerator::new(&config(Some("http://localhost:11434/v1")))
                .unwrap()
                .requires_key()
        );
    }

    #[tokio::test]
    async fn reads_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":" Bem-vindo. "}}]}"#;
        assert_eq!(
            read_answer(mock_response(200, body)).await.unwrap(),
            "Bem-vindo."
        );
    }

    #[tokio::test]
    async fn empty_choices_is_empty_response() {
        let err = read_answer(mock_response(200, r#"{"choices":[]}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse(_)));
    }

    #[tokio::test]
    async fn missing_key_fails_before_network() {
        let generator = OpenAiGenerator::new(&config(None)).unwrap();
        let err = generator.generate("q").await.unwrap_err();
        assert!(matches!(err, GenerationError::MissingApiKey { provider: "openai" }));
    }
}
