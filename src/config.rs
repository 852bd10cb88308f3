//! Configuration for genrelay.
//!
//! Configuration is read from the environment once at process start and
//! injected into the server, so tests can construct a `Config` directly or
//! supply a fake lookup via [`Config::from_env_with`].

use secrecy::{ExposeSecret, SecretString};

/// Default upstream base URL for the generative-text API.
pub const DEFAULT_UPSTREAM_BASE: &str = "https://generativelanguage.googleapis.com";

/// Default listen port when `PORT` is unset.
const DEFAULT_PORT: u16 = 3000;

/// Process-lifetime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to listen on (e.g., "0.0.0.0:3000")
    pub listen: String,
    /// Server-held upstream credential. Absence is a per-request error,
    /// not a startup error: the server starts and fails each relay call.
    pub api_key: Option<ApiKey>,
    /// Base URL of the upstream generative-text API.
    pub upstream_base: String,
}

/// API key wrapper that redacts in Debug/Display and zeroizes on drop.
///
/// The inner `SecretString` ensures the key value is only accessible via
/// `.expose_secret()`, keeping every call site auditable.
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Access the raw key value. Every call site is auditable via `grep expose_secret`.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        ApiKey(SecretString::from(s))
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        ApiKey(SecretString::from(s))
    }
}

impl Config {
    /// Load configuration from real environment variables.
    ///
    /// - `PORT`: listen port (default 3000)
    /// - `GEMINI_API_KEY`: server-held credential (empty counts as unset)
    /// - `GEMINI_API_BASE`: upstream base URL override
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Load configuration using a custom lookup function.
    ///
    /// The closure-based design makes this testable without touching global
    /// env state.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) if !raw.is_empty() => {
                raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?
            }
            _ => DEFAULT_PORT,
        };

        // An empty credential is as useless as a missing one.
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.is_empty())
            .map(ApiKey::from);

        let upstream_base =
            lookup("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_UPSTREAM_BASE.to_string());

        Ok(Config {
            listen: format!("0.0.0.0:{}", port),
            api_key,
            upstream_base,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}': expected a number between 0 and 65535")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_empty() {
        let config = Config::from_env_with(|_| None).unwrap();
        assert_eq!(config.listen, "0.0.0.0:3000");
        assert!(config.api_key.is_none());
        assert_eq!(config.upstream_base, DEFAULT_UPSTREAM_BASE);
    }

    #[test]
    fn test_port_from_env() {
        let lookup = |name: &str| match name {
            "PORT" => Some("8080".to_string()),
            _ => None,
        };
        let config = Config::from_env_with(lookup).unwrap();
        assert_eq!(config.listen, "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_port_fails() {
        let lookup = |name: &str| match name {
            "PORT" => Some("not-a-port".to_string()),
            _ => None,
        };
        let result = Config::from_env_with(lookup);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("not-a-port"), "Error should echo the value: {}", err);
    }

    #[test]
    fn test_empty_port_uses_default() {
        let lookup = |name: &str| match name {
            "PORT" => Some(String::new()),
            _ => None,
        };
        let config = Config::from_env_with(lookup).unwrap();
        assert_eq!(config.listen, "0.0.0.0:3000");
    }

    #[test]
    fn test_api_key_from_env() {
        let lookup = |name: &str| match name {
            "GEMINI_API_KEY" => Some("secret-key-value".to_string()),
            _ => None,
        };
        let config = Config::from_env_with(lookup).unwrap();
        assert_eq!(
            config.api_key.as_ref().unwrap().expose_secret(),
            "secret-key-value"
        );
    }

    #[test]
    fn test_empty_api_key_counts_as_unset() {
        let lookup = |name: &str| match name {
            "GEMINI_API_KEY" => Some(String::new()),
            _ => None,
        };
        let config = Config::from_env_with(lookup).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_upstream_base_override() {
        let lookup = |name: &str| match name {
            "GEMINI_API_BASE" => Some("http://127.0.0.1:9999".to_string()),
            _ => None,
        };
        let config = Config::from_env_with(lookup).unwrap();
        assert_eq!(config.upstream_base, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_api_key_debug_redaction() {
        let key = ApiKey::from("super-secret-value");
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "[REDACTED]");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_api_key_display_redaction() {
        let key = ApiKey::from("super-secret-value");
        let display_output = format!("{}", key);
        assert_eq!(display_output, "[REDACTED]");
    }

    #[test]
    fn test_config_debug_redaction() {
        let config = Config {
            listen: "0.0.0.0:3000".to_string(),
            api_key: Some(ApiKey::from("leaky-secret")),
            upstream_base: DEFAULT_UPSTREAM_BASE.to_string(),
        };
        let debug_output = format!("{:?}", config);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("leaky-secret"));
    }

    #[test]
    fn test_api_key_expose_secret() {
        let key = ApiKey::from("the-actual-value");
        assert_eq!(key.expose_secret(), "the-actual-value");
    }
}
