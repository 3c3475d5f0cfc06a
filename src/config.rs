use serde::{Deserialize, Serialize};

/// Runtime configuration, fixed at compile time from the environment
/// (see `build.rs` for `.env` loading).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub api_prefix: String,
    pub token_cookie_name: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            api_prefix: "/api/v1".to_string(),
            token_cookie_name: "accessToken".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("API_PREFIX"),
            option_env!("TOKEN_COOKIE_NAME"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_values(
        backend_url: Option<&str>,
        api_prefix: Option<&str>,
        token_cookie_name: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.backend_url),
            api_prefix: api_prefix
                .map(normalize_prefix)
                .unwrap_or(defaults.api_prefix),
            token_cookie_name: token_cookie_name
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.token_cookie_name),
            enable_logging: enable_logging
                .and_then(|flag| flag.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// Base URL of the REST API, e.g. `http://localhost:8000/api/v1`
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.backend_url, self.api_prefix)
    }

    /// Maximum log level for the browser console logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url(), "http://localhost:8000/api/v1");
        assert_eq!(config.token_cookie_name, "accessToken");
    }

    #[test]
    fn overrides_are_normalized() {
        let config = AppConfig::from_values(
            Some("https://blog.example.com/"),
            Some("api/v2/"),
            Some("tok"),
            Some("false"),
        );
        assert_eq!(config.api_base_url(), "https://blog.example.com/api/v2");
        assert_eq!(config.token_cookie_name, "tok");
        assert!(!config.enable_logging);
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn garbage_logging_flag_falls_back_to_default() {
        let config = AppConfig::from_values(None, None, Some(""), Some("maybe"));
        assert!(config.enable_logging);
        assert_eq!(config.token_cookie_name, "accessToken");
    }
}
