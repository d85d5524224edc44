//! # Client Configuration
//!
//! [`ClientConfig`] is an explicit value handed to the client constructor;
//! nothing in the crate reads the environment behind the caller's back.
//! [`ClientConfig::from_env`] is an opt-in convenience for binaries.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::retrieve::RetryPolicy;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://discosweb.esoc.esa.int/api/";
/// Environment variable holding the bearer token.
pub const ENV_API_KEY: &str = "DISCOS_API_KEY";
/// Environment variable overriding the API root.
pub const ENV_API_URL: &str = "DISCOS_API_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while building a [`ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Errors specifically for when a required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("API key is empty")]
    EmptyApiKey,

    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Base URL '{0}' must be an absolute http(s) URL")]
    UnsupportedBaseUrl(String),
}

/// Everything the client needs to talk to the catalogue.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawClientConfig")]
pub struct ClientConfig {
    /// API root; always ends in `/` so endpoint paths join beneath it.
    pub base_url: Url,
    /// Bearer token.
    pub api_key: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
    pub retry: RetryPolicy,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClientConfig {
    api_key: String,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    user_agent: Option<String>,
    #[serde(default)]
    retry: RetryPolicy,
}

impl TryFrom<RawClientConfig> for ClientConfig {
    type Error = ConfigError;

    fn try_from(raw: RawClientConfig) -> Result<Self, Self::Error> {
        let mut config = ClientConfig::new(raw.api_key)?;
        if let Some(url) = raw.base_url {
            config = config.with_base_url(&url)?;
        }
        if let Some(secs) = raw.timeout_secs {
            config.timeout_secs = secs;
        }
        if let Some(agent) = raw.user_agent {
            config.user_agent = agent;
        }
        config.retry = raw.retry;
        Ok(config)
    }
}

impl ClientConfig {
    /// Production defaults with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }

        Ok(Self {
            base_url: normalise_base_url(DEFAULT_BASE_URL)?,
            api_key,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            retry: RetryPolicy::default(),
        })
    }

    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.base_url = normalise_base_url(url)?;
        Ok(self)
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs().max(1);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reads `DISCOS_API_KEY` (required) and `DISCOS_API_URL` (optional),
    /// after loading a `.env` file from the working directory if present.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key =
            lookup(ENV_API_KEY).ok_or_else(|| ConfigError::MissingEnvVar(ENV_API_KEY.to_string()))?;
        let config = Self::new(api_key)?;
        match lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            Some(url) => config.with_base_url(url.trim()),
            None => Ok(config),
        }
    }
}

fn normalise_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedBaseUrl(raw.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("retry", &self.retry)
            .finish()
    }
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClientConfig
    Base URL: {},
    Timeout: {}s,
    Max retries: {},
    Gateway delay: {}s
",
            self.base_url, self.timeout_secs, self.retry.max_retries, self.retry.gateway_delay_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_point_at_production() {
        let config = ClientConfig::new("secret").unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.retry, RetryPolicy::default());
        assert_eq!(config.retry.max_retries, 5);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let config = ClientConfig::new("k")
            .unwrap()
            .with_base_url("http://127.0.0.1:8080/api")
            .unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/api/");
        assert_eq!(
            config.base_url.join("objects/1").unwrap().as_str(),
            "http://127.0.0.1:8080/api/objects/1"
        );
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(matches!(ClientConfig::new("  "), Err(ConfigError::EmptyApiKey)));
        let base = ClientConfig::new("k").unwrap();
        assert!(matches!(
            base.clone().with_base_url("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            base.with_base_url("mailto:ops@example.com"),
            Err(ConfigError::UnsupportedBaseUrl(_))
        ));
    }

    #[test]
    fn lookup_requires_api_key() {
        let vars: HashMap<&str, &str> = HashMap::new();
        let err = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref name) if name == ENV_API_KEY));
    }

    #[test]
    fn lookup_honours_url_override() {
        let vars = HashMap::from([(ENV_API_KEY, "abc"), (ENV_API_URL, "https://example.test/api")]);
        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.base_url.as_str(), "https://example.test/api/");
    }

    #[test]
    fn deserialises_with_defaults() {
        let config: ClientConfig = serde_json::from_str(
            r#"{ "apiKey": "abc", "baseUrl": "http://localhost:9000", "retry": { "maxRetries": 2 } }"#,
        )
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:9000/");
        assert_eq!(config.retry.max_retries, 2);
        assert_eq!(config.retry.gateway_delay_secs, 5);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = ClientConfig::new("super-secret-token").unwrap();
        let text = format!("{config:?}");
        assert!(!text.contains("super-secret-token"));
        assert!(text.contains("<redacted>"));
    }
}
