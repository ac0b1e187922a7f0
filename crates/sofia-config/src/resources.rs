//! Supplementary resource registry and keyword rules.

use serde::{Deserialize, Serialize};
use sofia_core::{KeywordRule, ResourceLink};

fn default_links() -> Vec<ResourceLink> {
    [
        ("Facebook", "https://www.facebook.com/RosacruzAurea/"),
        ("Instagram", "https://www.instagram.com/rosacruzaureabrasil/"),
        ("YouTube", "https://www.youtube.com/rosacruzaurea"),
        ("TikTok", "https://www.tiktok.com/@escoladarosacruzaureabr"),
        ("Pentagrama", "https://pentagrama.org.br/"),
        ("Logon Media", "https://logon.media/pt-br/"),
        ("Civitas Solis", "http://www.civitassolis.org.br/"),
        (
            "Spotify",
            "https://open.spotify.com/show/2iQxfknpnulpl6srIWwn05?si=d4a925bc23b2411e&nd=1&dlsi=5dd18f7129a2429c",
        ),
        ("Deezer", "https://www.deezer.com/br/show/949072"),
    ]
    .into_iter()
    .map(|(name, url)| ResourceLink::new(name, url))
    .collect()
}

fn default_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new("meditação", ["YouTube", "Spotify", "Pentagrama"]),
        KeywordRule::new("ensinamento", ["Pentagrama", "Logon Media", "YouTube"]),
        KeywordRule::new("espiritualidade", ["Pentagrama", "Civitas Solis", "YouTube"]),
        KeywordRule::new("filosofia", ["Logon Media", "Pentagrama", "Civitas Solis"]),
        KeywordRule::new("rosacruz", ["Facebook", "Instagram", "Pentagrama"]),
        KeywordRule::new("escola", ["Facebook", "Instagram", "YouTube"]),
        KeywordRule::new("música", ["Spotify", "Deezer", "YouTube"]),
        KeywordRule::new("vídeo", ["YouTube", "TikTok", "Instagram"]),
        KeywordRule::new("podcast", ["Spotify", "Deezer", "Logon Media"]),
    ]
}

fn default_fallback() -> Vec<String> {
    ["YouTube", "Pentagrama", "Facebook"]
        .into_iter()
        .map(String::from)
        .collect()
}

const fn default_per_keyword() -> usize {
    2
}

const fn default_max_results() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourcesConfig {
    /// Registry of resource names to URLs, in display order.
    #[serde(default = "default_links")]
    pub links: Vec<ResourceLink>,

    /// Keyword rules, checked in order.
    #[serde(default = "default_rules")]
    pub rules: Vec<KeywordRule>,

    /// Suggested when no keyword matches.
    #[serde(default = "default_fallback")]
    pub defaults: Vec<String>,

    /// Resources taken from the front of each matching rule.
    #[serde(default = "default_per_keyword")]
    pub per_keyword: usize,

    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            links: default_links(),
            rules: default_rules(),
            defaults: default_fallback(),
            per_keyword: default_per_keyword(),
            max_results: default_max_results(),
        }
    }
}

impl ResourcesConfig {
    /// Names referenced by rules or defaults that are missing from `links`.
    #[must_use]
    pub fn dangling_names(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .rules
            .iter()
            .flat_map(|r| r.resources.iter())
            .chain(self.defaults.iter())
            .map(String::as_str)
            .filter(|name| !self.links.iter().any(|l| l.name == *name))
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}
