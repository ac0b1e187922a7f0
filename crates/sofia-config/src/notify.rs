//! Pushover notification channel credentials.

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    String::from("https://api.pushover.net/1/messages.json")
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifyConfig {
    /// Recipient user key. Also read from `PUSHOVER_USER_KEY`.
    #[serde(default)]
    pub user_key: String,

    /// Application token. Also read from `PUSHOVER_API_TOKEN`.
    #[serde(default)]
    pub api_token: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            user_key: String::new(),
            api_token: String::new(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl NotifyConfig {
    /// Both credentials are required to send anything.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.user_key.trim().is_empty() && !self.api_token.trim().is_empty()
    }
}
