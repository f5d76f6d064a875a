use crate::error::{Error, Result};

/// Default MalShare origin
pub const DEFAULT_BASE_URL: &str = "http://www.malshare.com/";

/// Configuration for the MalShare client
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// API key sent with every request
    pub api_key: String,

    /// Base URL for the API; `None` or an empty string selects [`DEFAULT_BASE_URL`]
    pub base_url: Option<String>,

    /// Timeout in seconds for HTTP requests; `None` keeps the transport default
    pub timeout_seconds: Option<u64>,

    /// Fail on non-2xx responses instead of decoding whatever body came back
    pub check_status: bool,
}

impl Config {
    /// Create a configuration with the given API key and defaults for everything else
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::InvalidConfig("API key is required".to_string()));
        }

        Ok(())
    }

    /// Get the base URL, falling back to the default if unset or empty.
    ///
    /// The returned value always ends with `/` so endpoint paths can be appended.
    pub fn get_base_url(&self) -> String {
        let mut url = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();

        if !url.ends_with('/') {
            url.push('/');
        }
        url
    }

    /// Get the configured timeout, if any
    pub fn get_timeout(&self) -> Option<std::time::Duration> {
        self.timeout_seconds.map(std::time::Duration::from_secs)
    }
}
