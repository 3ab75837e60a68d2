#[cfg(test)]
mod tests {
    use super::super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.llm.model, "openai/gpt-3.5-turbo");
        assert_eq!(config.interview.default_question_count, 5);
        assert!(config.auth.uses_default_secret());
        assert!(config.llm.api_key().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [server]
            port = 8080

            [llm]
            model = "anthropic/claude-3-haiku"
            "#,
        ).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.llm.model, "anthropic/claude-3-haiku");
        assert_eq!(config.llm.base_url, "https://openrouter.ai/api");
        assert_eq!(config.auth.token_ttl_hours, 168);
    }

    #[test]
    fn test_env_overrides_win() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[
            ("PORT", "7000"),
            ("JWT_SECRET", "s3cret"),
            ("OPENROUTER_API_KEY", "sk-or-test"),
            ("DATABASE_URL", "sqlite::memory:"),
        ])).unwrap();

        assert_eq!(config.server.port, 7000);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert!(!config.auth.uses_default_secret());
        assert_eq!(config.auth.secret().expose_secret(), "s3cret");
        assert_eq!(config.llm.api_key().unwrap().expose_secret(), "sk-or-test");
    }

    #[test]
    fn test_bad_port_override_is_rejected() {
        let mut config = Config::default();
        let err = config.apply_overrides(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let mut config = Config::default();
        config.llm.api_key = Some("   ".to_string());
        assert!(config.llm.api_key().is_none());
    }

    #[test]
    fn test_validate_question_count_bounds() {
        let mut config = Config::default();
        config.interview.default_question_count = 30;
        assert!(config.validate().is_err());

        config.interview.default_question_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load_file("/definitely/not/here/intervue.toml").unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        let err = Config::load_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_provider_defaults_to_openrouter() {
        assert_eq!(Config::default().llm.provider, LlmProvider::OpenRouter);
    }

    #[test]
    fn test_provider_from_file_and_env() {
        let mut config = Config::from_toml_str(
            r#"
            [llm]
            provider = "ollama"
            base_url = "http://localhost:11434"
            model = "llama3"
            "#,
        ).unwrap();
        assert_eq!(config.llm.provider, LlmProvider::Ollama);

        config.apply_overrides(lookup(&[("LLM_PROVIDER", "OpenRouter")])).unwrap();
        assert_eq!(config.llm.provider, LlmProvider::OpenRouter);
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        assert!(Config::from_toml_str("[llm]\nprovider = \"bard\"\n").is_err());

        let mut config = Config::default();
        let err = config.apply_overrides(lookup(&[("LLM_PROVIDER", "bard")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_dotenv_is_quiet() {
        assert!(!report_dotenv(dotenvy::from_path("/definitely/not/here/.env")));
    }

    #[test]
    fn test_malformed_dotenv_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "NOT A VALID LINE").unwrap();
        assert!(report_dotenv(dotenvy::from_path(file.path())));
    }
}
