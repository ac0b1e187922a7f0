//! Google Gemini `generateContent` client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use sofia_config::GenerationConfig;

use crate::Generator;
use crate::error::GenerationError;
use crate::http::check_response;

pub struct GeminiGenerator {
    api_key: String,
    model: String,
    base_url: String,
    temperature: Option<f32>,
    client: reqwest::Client,
}

impl GeminiGenerator {
    /// Build a client from configuration. A missing key is not an error here;
    /// every [`Generator::generate`] call reports it instead.
    ///
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

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url,
            urlencoding::encode(&self.model)
        )
    }
}

impl Generator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if self.api_key.is_empty() {
            return Err(GenerationError::MissingApiKey { provider: "gemini" });
        }

        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: self.temperature.map(|temperature| GenerationSettings {
                temperature,
            }),
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "calling gemini");
        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(GenerationError::from_transport)?;

        read_answer(resp).await
    }
}

/// Extract the answer text from a `generateContent` response.
async fn read_answer(resp: reqwest::Response) -> Result<String, GenerationError> {
    let resp = check_response(resp).await?;
    let parsed: GenerateResponse = resp.json().await.map_err(GenerationError::from_transport)?;
    parsed.into_text()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationSettings>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationSettings {
    temperature: f32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Result<String, GenerationError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(GenerationError::EmptyResponse(format!(
                "prompt blocked: {reason}"
            )));
        }
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(GenerationError::EmptyResponse(String::from(
                "no candidates returned",
            )));
        };
        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();
        if text.trim().is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".into());
            return Err(GenerationError::EmptyResponse(format!(
                "no text in candidate (finish reason: {reason})"
            )));
        }
        Ok(text.trim().to_string())
    }
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

    #[test]
    fn request_body_shape() {
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: "Olá" }],
            }],
            generation_config: Some(GenerationSettings { temperature: 0.5 }),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{"role": "user", "parts": [{"text": "Olá"}]}],
                "generationConfig": {"temperature": 0.5}
            })
        );
    }

    #[test]
    fn endpoint_uses_model_path() {
        let generator = GeminiGenerator::new(&GenerationConfig::default()).unwrap();
        assert_eq!(
            generator.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn joins_candidate_parts() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"A escola "},{"text":"é antiga. "}]},"finishReason":"STOP"}]}"#;
        let text = read_answer(mock_response(200, body)).await.unwrap();
        assert_eq!(text, "A escola é antiga.");
    }

    #[tokio::test]
    async fn blocked_prompt_is_empty_response() {
        let body = r#"{"candidates":[],"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let err = read_answer(mock_response(200, body)).await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse(ref m) if m.contains("SAFETY")));
    }

    #[tokio::test]
    async fn candidate_without_text_is_empty_response() {
        let body = r#"{"candidates":[{"finishReason":"MAX_TOKENS"}]}"#;
        let err = read_answer(mock_response(200, body)).await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse(ref m) if m.contains("MAX_TOKENS")));
    }

    #[tokio::test]
    async fn api_error_surfaces_status() {
        let err = read_answer(mock_response(400, "API key not valid"))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Api { status: 400, .. }));
    }

    #[tokio::test]
    async fn missing_key_fails_before_network() {
        let generator = GeminiGenerator::new(&GenerationConfig {
            base_url: Some("http://127.0.0.1:9".into()),
            ..Default::default()
        })
        .unwrap();
        let err = generator.generate("q").await.unwrap_err();
        assert!(matches!(err, GenerationError::MissingApiKey { provider: "gemini" }));
    }
}
