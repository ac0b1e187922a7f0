//! Status handling shared by the generation clients.

use reqwest::StatusCode;

use crate::error::GenerationError;

/// Longest error body kept in [`GenerationError::Api`].
const MAX_ERROR_BODY: usize = 500;

/// Fallback wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Pass successful responses through; turn everything else into an error.
///
/// A 429 becomes [`GenerationError::RateLimited`]. Any other non-2xx becomes
/// [`GenerationError::Api`] carrying the status and the start of the body,
/// which is where both Gemini and OpenAI put their error description.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, GenerationError> {
    match resp.status() {
        status if status.is_success() => Ok(resp),
        StatusCode::TOO_MANY_REQUESTS => Err(GenerationError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        }),
        status => {
            let body = resp.text().await.unwrap_or_default();
            Err(GenerationError::Api {
                status: status.as_u16(),
                message: truncate_body(body),
            })
        }
    }
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let cut = (0..=MAX_ERROR_BODY)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        body.truncate(cut);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body(String::new())
                .unwrap(),
        )
    }

    #[test]
    fn retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(retry_after_secs(&resp), 120);
    }

    #[test]
    fn retry_after_falls_back() {
        let resp = mock_response_with_retry_after(429, "soon");
        assert_eq!(retry_after_secs(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited() {
        let resp = mock_response_with_retry_after(429, "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let resp = mock_response(403, "API key not valid");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Api { status: 403, ref message } if message == "API key not valid"
        ));
    }

    #[tokio::test]
    async fn check_response_truncates_long_bodies() {
        let body = "é".repeat(400);
        let err = check_response(mock_response(500, &body)).await.unwrap_err();
        let GenerationError::Api { message, .. } = err else {
            panic!("expected API error");
        };
        assert!(message.len() <= MAX_ERROR_BODY);
        assert!(message.chars().all(|c| c == 'é'));
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200, "{}")).await.is_ok());
    }
}
