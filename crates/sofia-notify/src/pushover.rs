//! Pushover push-message channel.

use std::time::Duration;

use sofia_config::NotifyConfig;

use crate::error::NotifyError;
use crate::{Notification, Notifier};

pub struct PushoverNotifier {
    user_key: String,
    api_token: String,
    endpoint: String,
    client: reqwest::Client,
}

impl PushoverNotifier {
    /// # Errors
    ///
    /// Returns [`NotifyError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &NotifyConfig) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            user_key: config.user_key.trim().to_string(),
            api_token: config.api_token.trim().to_string(),
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.user_key.is_empty() && !self.api_token.is_empty()
    }

    fn request(&self, notification: &Notification) -> reqwest::RequestBuilder {
        let params = [
            ("token", self.api_token.as_str()),
            ("user", self.user_key.as_str()),
            ("title", notification.title.as_str()),
            ("message", notification.message.as_str()),
        ];
        self.client.post(&self.endpoint).form(&params)
    }
}

impl Notifier for PushoverNotifier {
    async fn send(&self, notification: &Notification) -> Result<bool, NotifyError> {
        if !self.is_configured() {
            return Err(NotifyError::MissingCredentials);
        }
        let resp = self
            .request(notification)
            .send()
            .await
            .map_err(NotifyError::from_transport)?;
        Ok(accepted(resp).await)
    }
}

/// Only a 200 counts as accepted. The body of a refusal is logged.
async fn accepted(resp: reqwest::Response) -> bool {
    let status = resp.status();
    if status == reqwest::StatusCode::OK {
        return true;
    }
    let body = resp.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), %body, "notification refused by channel");
    false
}
