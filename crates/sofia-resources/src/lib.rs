//! # sofia-resources
//!
//! Keyword-driven suggestions of supplementary resources (social channels,
//! publications, podcasts) shown alongside an answer.
//!
//! Each keyword rule contributes up to `per_keyword` names from the front of
//! its list when the keyword occurs in the lowercased question. Names collapse
//! across rules and keep first-seen order, so the result is deterministic.
//! Without any keyword hit the configured defaults are used. The list is cut
//! to `max_results` and resolved against the [`ResourceRegistry`]; names the
//! registry lacks are dropped.

mod registry;

pub use registry::ResourceRegistry;

use sofia_config::ResourcesConfig;
use sofia_core::{KeywordRule, ResourceLink};

/// Picks resources for a question.
#[derive(Debug, Clone)]
pub struct ResourceSuggester {
    registry: ResourceRegistry,
    rules: Vec<KeywordRule>,
    defaults: Vec<String>,
    per_keyword: usize,
    max_results: usize,
}

impl ResourceSuggester {
    /// Build from configuration. Keywords are matched case-insensitively;
    /// names missing from the registry are reported once here.
    #[must_use]
    pub fn from_config(config: &ResourcesConfig) -> Self {
        for name in config.dangling_names() {
            tracing::warn!(name, "resource referenced by a rule is not in the registry");
        }
        Self {
            registry: ResourceRegistry::new(config.links.iter().cloned()),
            rules: config
                .rules
                .iter()
                .filter(|r| !r.keyword.trim().is_empty())
                .map(|r| KeywordRule {
                    keyword: r.keyword.trim().to_lowercase(),
                    resources: r.resources.clone(),
                })
                .collect(),
            defaults: config.defaults.clone(),
            per_keyword: config.per_keyword,
            max_results: config.max_results,
        }
    }

    #[must_use]
    pub const fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// Names chosen for `question`, before registry resolution.
    #[must_use]
    pub fn candidate_names(&self, question: &str) -> Vec<&str> {
        let lower = question.to_lowercase();
        let mut names: Vec<&str> = Vec::new();

        for rule in self.rules.iter().filter(|r| lower.contains(&r.keyword)) {
            for name in rule.resources.iter().take(self.per_keyword) {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }

        if names.is_empty() {
            for name in &self.defaults {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }

        names.truncate(self.max_results);
        names
    }

    /// Resources to show for `question`, at most `max_results`.
    #[must_use]
    pub fn suggest(&self, question: &str) -> Vec<ResourceLink> {
        self.candidate_names(question)
            .into_iter()
            .filter_map(|name| {
                let link = self.registry.get(name);
                if link.is_none() {
                    tracing::debug!(name, "dropping unknown resource");
                }
                link.cloned()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn suggester() -> ResourceSuggester {
        ResourceSuggester::from_config(&ResourcesConfig::default())
    }

    fn names(links: &[ResourceLink]) -> Vec<&str> {
        links.iter().map(|l| l.name.as_str()).collect()
    }

    #[rstest]
    #[case("Onde encontro vídeos?", &["YouTube", "TikTok"])]
    #[case("Tem MÚSICA para relaxar?", &["Spotify", "Deezer"])]
    #[case("Qual o horário de funcionamento?", &["YouTube", "Pentagrama", "Facebook"])]
    #[case("", &["YouTube", "Pentagrama", "Facebook"])]
    fn suggestions(#[case] question: &str, #[case] expected: &[&str]) {
        assert_eq!(names(&suggester().suggest(question)), expected);
    }

    #[test]
    fn overlapping_keywords_collapse_and_cap() {
        let s = suggester();
        let question = "Há meditação em vídeo?";
        let result = s.suggest(question);

        let config = ResourcesConfig::default();
        let allowed: Vec<&str> = config
            .rules
            .iter()
            .filter(|r| r.keyword == "meditação" || r.keyword == "vídeo")
            .flat_map(|r| r.resources.iter().take(2))
            .map(String::as_str)
            .collect();

        let got = names(&result);
        assert!(got.len() <= 3);
        assert!(got.iter().all(|n| allowed.contains(n)));
        let mut dedup = got.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), got.len());
        assert_eq!(got, ["YouTube", "Spotify", "TikTok"]);
    }

    #[test]
    fn many_hits_truncate_in_rule_order() {
        let suggested = suggester().suggest("escola rosacruz de filosofia");
        let got = names(&suggested);
        assert_eq!(got, ["Logon Media", "Pentagrama", "Facebook"]);
    }

    #[test]
    fn unknown_names_are_dropped() {
        let config = ResourcesConfig {
            rules: vec![KeywordRule::new("templo", ["Myspace", "YouTube"])],
            ..Default::default()
        };
        let s = ResourceSuggester::from_config(&config);
        assert_eq!(s.candidate_names("o templo"), ["Myspace", "YouTube"]);
        assert_eq!(names(&s.suggest("o templo")), ["YouTube"]);
    }

    #[test]
    fn same_question_same_order() {
        let s = suggester();
        let q = "podcast de música e meditação";
        assert_eq!(s.suggest(q), s.suggest(q));
    }
}
