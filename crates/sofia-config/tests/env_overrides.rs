use figment::Jail;
use sofia_config::SofiaConfig;

#[test]
fn prefixed_env_fills_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("SOFIA_RETRIEVAL__TOP_K", "7");
        jail.set_env("SOFIA_NOTIFY__USER_KEY", "u-env");
        jail.set_env("SOFIA_NOTIFY__API_TOKEN", "t-env");

        let config = SofiaConfig::load(None).expect("config loads");
        assert_eq!(config.retrieval.top_k, 7);
        assert!(config.notify.is_configured());
        Ok(())
    });
}

#[test]
fn legacy_secret_variables_are_honoured() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMINI_API_KEY", "gm-legacy");
        jail.set_env("PUSHOVER_USER_KEY", "u-legacy");
        jail.set_env("PUSHOVER_API_TOKEN", "t-legacy");

        let config = SofiaConfig::load(None).expect("config loads");
        assert_eq!(config.generation.api_key, "gm-legacy");
        assert_eq!(config.notify.user_key, "u-legacy");
        assert_eq!(config.notify.api_token, "t-legacy");
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_legacy_variable() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMINI_API_KEY", "gm-legacy");
        jail.set_env("SOFIA_GENERATION__API_KEY", "gm-prefixed");

        let config = SofiaConfig::load(None).expect("config loads");
        assert_eq!(config.generation.api_key, "gm-prefixed");
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sofia")?;
        jail.create_file(".sofia/config.toml", "[retrieval]\nthreshold = 0.5\n")?;
        jail.set_env("SOFIA_RETRIEVAL__THRESHOLD", "0.2");

        let config = SofiaConfig::load(None).expect("config loads");
        assert!((config.retrieval.threshold - 0.2).abs() < 1e-6);
        Ok(())
    });
}
