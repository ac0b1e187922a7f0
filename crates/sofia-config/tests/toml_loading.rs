//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use std::path::Path;

use figment::Jail;
use pretty_assertions::assert_eq;
use sofia_config::{GenerationProvider, SofiaConfig};

#[test]
fn loads_project_local_config() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sofia")?;
        jail.create_file(
            ".sofia/config.toml",
            r#"
[retrieval]
top_k = 5
threshold = 0.45

[corpus]
path = "data/faq.csv"
question_column = "pergunta"
answer_column = "resposta"
"#,
        )?;

        let config = SofiaConfig::load(None).expect("config loads");
        assert_eq!(config.retrieval.top_k, 5);
        assert!((config.retrieval.threshold - 0.45).abs() < 1e-6);
        assert_eq!(config.corpus.path, Path::new("data/faq.csv"));
        assert_eq!(config.corpus.question_column, "pergunta");
        assert_eq!(config.corpus.answer_column, "resposta");
        // untouched sections keep their defaults
        assert_eq!(config.escalation.markers.len(), 4);
        Ok(())
    });
}

#[test]
fn explicit_file_overrides_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sofia")?;
        jail.create_file(".sofia/config.toml", "[retrieval]\ntop_k = 5\n")?;
        jail.create_file("override.toml", "[retrieval]\ntop_k = 8\n")?;

        let config = SofiaConfig::load(Some(Path::new("override.toml"))).expect("config loads");
        assert_eq!(config.retrieval.top_k, 8);
        Ok(())
    });
}

#[test]
fn loads_generation_and_resources_tables() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "sofia.toml",
            r#"
[generation]
provider = "openai"
api_key = "sk-local"
base_url = "http://localhost:8080/v1"
model = "llama3"

[resources]
defaults = ["Blog"]
max_results = 2

[[resources.links]]
name = "Blog"
url = "https://example.org/blog"

[[resources.rules]]
keyword = "artigo"
resources = ["Blog"]
"#,
        )?;

        let config = SofiaConfig::load(Some(Path::new("sofia.toml"))).expect("config loads");
        assert_eq!(config.generation.provider, GenerationProvider::Openai);
        assert_eq!(config.generation.model(), "llama3");
        assert_eq!(config.generation.base_url(), "http://localhost:8080/v1");
        assert_eq!(config.resources.links.len(), 1);
        assert_eq!(config.resources.rules[0].keyword, "artigo");
        assert_eq!(config.resources.max_results, 2);
        assert!(config.resources.dangling_names().is_empty());
        Ok(())
    });
}

#[test]
fn unknown_provider_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file("bad.toml", "[generation]\nprovider = \"carrier-pigeon\"\n")?;
        assert!(SofiaConfig::load(Some(Path::new("bad.toml"))).is_err());
        Ok(())
    });
}
