use sofia_config::{GenerationProvider, SofiaConfig};

pub fn warn_unconfigured(config: &SofiaConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &SofiaConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.generation.is_configured()
        && config.generation.provider == GenerationProvider::Gemini
    {
        warnings.push(
            "Gemini API key is not configured; answers will show an error. Set GEMINI_API_KEY or SOFIA_GENERATION__API_KEY."
                .to_string(),
        );
    }

    if !config.generation.is_configured()
        && has_env_prefix(&env_keys, "SOFIA_GENERATION_")
        && !has_env_prefix(&env_keys, "SOFIA_GENERATION__")
    {
        warnings.push(
            "Generation config appears default while SOFIA_GENERATION* env vars exist. Use double underscores (example: SOFIA_GENERATION__API_KEY)."
                .to_string(),
        );
    }

    if !config.notify.is_configured() && has_env_prefix(&env_keys, "SOFIA_NOTIFY") {
        warnings.push(
            "Notify config appears default while SOFIA_NOTIFY* env vars exist. Use double underscores (example: SOFIA_NOTIFY__USER_KEY)."
                .to_string(),
        );
    }

    for name in config.resources.dangling_names() {
        warnings.push(format!(
            "Resource '{name}' is referenced by a keyword rule but missing from resources.links."
        ));
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
