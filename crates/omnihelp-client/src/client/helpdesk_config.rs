//! Configuration for the Omni-Help HTTP client.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{CONFIG_TARGET, Error, Result};

/// Default backend base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

// Configuration constants
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

/// Configuration for the Omni-Help HTTP client.
///
/// Holds the backend base URL and transport settings, resolved once at
/// process start. The base URL is kept as a string so the struct doubles as
/// a CLI/environment argument group under the `config` feature; it is parsed
/// and validated when the client is built.
///
/// # Examples
///
/// ```rust
/// use omnihelp_client::HelpdeskConfig;
///
/// let config = HelpdeskConfig::new("http://localhost:8000");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "client configurations must be used to create a client"]
pub struct HelpdeskConfig {
    /// Base URL of the Omni-Help backend
    #[cfg_attr(
        feature = "config",
        arg(
            long = "base-url",
            env = "OMNIHELP_BASE_URL",
            default_value = DEFAULT_BASE_URL
        )
    )]
    pub base_url: String,

    /// Request timeout in seconds (1-300)
    #[cfg_attr(
        feature = "config",
        arg(
            long = "request-timeout-secs",
            env = "OMNIHELP_REQUEST_TIMEOUT_SECS",
            default_value = "30"
        )
    )]
    pub request_timeout_secs: u64,

    /// User agent override for HTTP requests (optional)
    #[cfg_attr(
        feature = "config",
        arg(long = "user-agent", env = "OMNIHELP_USER_AGENT")
    )]
    pub user_agent: Option<String>,
}

impl HelpdeskConfig {
    /// Creates a new configuration with the given base URL and default settings.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the Omni-Help backend (e.g., "http://localhost:8000")
    pub fn new(base_url: impl Into<String>) -> Self {
        let this = Self {
            base_url: base_url.into(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        };

        tracing::debug!(
            target: CONFIG_TARGET,
            base_url = %this.base_url,
            timeout_secs = this.request_timeout_secs,
            "Created client configuration"
        );

        this
    }

    /// Returns the request timeout as a Duration.
    #[inline]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the user agent string, falling back to the crate default.
    #[inline]
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("omnihelp-client/{}", env!("CARGO_PKG_VERSION")))
    }

    /// Parses the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is not a valid URL.
    pub fn parsed_base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("Invalid base URL '{}': {}", self.base_url, e)))
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Sets a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::config("base_url cannot be empty"));
        }

        self.parsed_base_url()?;

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(Error::config(format!(
                "request_timeout_secs must be between {} and {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS
            )));
        }

        Ok(())
    }
}

impl Default for HelpdeskConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl fmt::Debug for HelpdeskConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelpdeskConfig")
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl fmt::Display for HelpdeskConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HelpdeskConfig(base_url: {}, timeout: {}s)",
            self.base_url, self.request_timeout_secs
        )
    }
}
