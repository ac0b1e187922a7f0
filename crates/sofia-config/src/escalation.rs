//! Insufficiency markers that trigger the contact offer.

use serde::{Deserialize, Serialize};

fn default_markers() -> Vec<String> {
    [
        "não possuo informações suficientes",
        "não tenho informações",
        "não encontrei",
        "não está disponível",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EscalationConfig {
    /// An answer containing any of these phrases (case-insensitive) is unsatisfactory.
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            markers: default_markers(),
        }
    }
}
