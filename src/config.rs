use std::env;
use secrecy::SecretString;

const DEFAULT_OPENAI_API_KEY: &str = "openai_api_key";

#[derive(Clone, Debug)]
pub struct Config {
    pub app_env: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub openai_api_key: SecretString,
    pub openai_api_base: String,
    pub generation_model: String,
    pub generation_max_retries: u32,
    pub generation_retry_base_delay_ms: u64,
    pub generation_deadline_secs: u64,
    pub deduplicate_in_flight: bool,
    pub surface_validation_issues: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|origins| parse_list(&origins))
                .unwrap_or_default(),
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_KEY.to_string())),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            generation_model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            generation_max_retries: env::var("GENERATION_MAX_RETRIES")
                .ok()
                .and_then(|r| r.parse().ok())
                .unwrap_or(2),
            generation_retry_base_delay_ms: env::var("GENERATION_RETRY_BASE_DELAY_MS")
                .ok()
                .and_then(|d| d.parse().ok())
                .unwrap_or(500),
            generation_deadline_secs: env::var("GENERATION_DEADLINE_SECS")
                .ok()
                .and_then(|d| d.parse().ok())
                .unwrap_or(90),
            deduplicate_in_flight: env::var("DEDUPLICATE_IN_FLIGHT")
                .ok()
                .and_then(|flag| parse_flag(&flag))
                .unwrap_or(true),
            surface_validation_issues: env::var("SURFACE_VALIDATION_ISSUES")
                .ok()
                .and_then(|flag| parse_flag(&flag))
                .unwrap_or(false),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Validate that production-critical configuration is set
    /// Panics if the generation API key is still the placeholder
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let api_key = self.openai_api_key.expose_secret();

        if api_key == DEFAULT_OPENAI_API_KEY || api_key.trim().is_empty() {
            panic!(
                "FATAL: OPENAI_API_KEY is using default value! Set OPENAI_API_KEY environment variable."
            );
        }

        if self.generation_deadline_secs == 0 {
            panic!("FATAL: GENERATION_DEADLINE_SECS must be greater than zero.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            app_env: "test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origins: Vec::new(),
            openai_api_key: SecretString::from("test_api_key".to_string()),
            openai_api_base: "http://localhost:9999/v1".to_string(),
            generation_model: "test-model".to_string(),
            generation_max_retries: 0,
            generation_retry_base_delay_ms: 0,
            generation_deadline_secs: 5,
            deduplicate_in_flight: true,
            surface_validation_issues: false,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.web_server_host.is_empty());
        assert!(!config.generation_model.is_empty());
        assert!(!config.openai_api_base.is_empty());
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.generation_model, "test-model");
        assert_eq!(config.generation_max_retries, 0);
        assert!(config.deduplicate_in_flight);
        assert!(!config.surface_validation_issues);
        assert!(!config.is_production());
    }

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_parse_list_skips_blank_entries() {
        assert_eq!(
            parse_list("https://a.example, ,https://b.example"),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    #[should_panic(expected = "OPENAI_API_KEY")]
    fn test_validate_for_production_rejects_placeholder_key() {
        let mut config = Config::test_config();
        config.openai_api_key = SecretString::from(DEFAULT_OPENAI_API_KEY.to_string());
        config.validate_for_production();
    }
}
