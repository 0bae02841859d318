//! Client configuration.

use std::time::Duration;

use url::Url;

/// Default API host.
pub const DEFAULT_API_HOST: &str = "https://api.missive.im";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Missive client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) api_host: String,
    pub(crate) access_token: Option<String>,
    pub(crate) timeout: Duration,
}

impl Config {
    /// Get the API host.
    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    /// Get the access token, if one was configured.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Errors raised while constructing a client.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The API host is not a valid URL.
    #[error("invalid API host: {0}")]
    InvalidHost(#[from] url::ParseError),

    /// The API host uses a scheme other than HTTP(S).
    #[error("unsupported API host scheme `{0}`")]
    UnsupportedScheme(String),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to construct HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Builder for a Missive client.
#[derive(Debug)]
pub struct ClientBuilder {
    api_host: Option<String>,
    access_token: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            api_host: None,
            access_token: None,
            timeout: None,
        }
    }

    /// Set the API host.
    pub fn api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = Some(host.into());
        self
    }

    /// Set the access token used to authenticate requests.
    ///
    /// Without a token the client can only call public endpoints;
    /// authenticated calls fail before any request is sent.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    pub(crate) fn build_config(self) -> Result<Config, ConfigError> {
        let api_host = self.api_host.unwrap_or_else(|| DEFAULT_API_HOST.into());

        let parsed = Url::parse(&api_host)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        Ok(Config {
            api_host: api_host.trim_end_matches('/').to_string(),
            access_token: self.access_token,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ClientBuilder::new().build_config().unwrap();

        assert_eq!(config.api_host(), DEFAULT_API_HOST);
        assert_eq!(config.access_token(), None);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_builder_custom_values() {
        let config = ClientBuilder::new()
            .api_host("https://custom.example.com")
            .access_token("token_123")
            .timeout(Duration::from_secs(30))
            .build_config()
            .unwrap();

        assert_eq!(config.api_host(), "https://custom.example.com");
        assert_eq!(config.access_token(), Some("token_123"));
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_builder_rejects_invalid_host() {
        let result = ClientBuilder::new().api_host("not a url").build_config();

        assert!(matches!(result, Err(ConfigError::InvalidHost(_))));
    }

    #[test]
    fn test_builder_rejects_non_http_scheme() {
        let result = ClientBuilder::new()
            .api_host("ftp://example.com")
            .build_config();

        assert!(matches!(result, Err(ConfigError::UnsupportedScheme(_))));
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = ClientBuilder::new()
            .api_host("https://example.com/")
            .build_config()
            .unwrap();

        assert_eq!(config.api_host(), "https://example.com");
    }

    #[test]
    fn test_builder_accepts_string_and_str() {
        // &str
        let _ = ClientBuilder::new().api_host("https://example.com");
        // String
        let _ = ClientBuilder::new().api_host(String::from("https://example.com"));
        // Same for the token
        let _ = ClientBuilder::new().access_token("token_123");
        let _ = ClientBuilder::new().access_token(String::from("token_123"));
    }
}
