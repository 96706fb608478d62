//! Frontend configuration module
//!
//! Compile-time settings for the web client. Every value can be overridden
//! through an environment variable at build time.

use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "https://fitquest-backend-2.onrender.com";
const DEFAULT_REDIRECT_DELAY_MS: u64 = 1500;

/// Frontend configuration for the API endpoint and navigation timing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL every API request is resolved against
    pub api_base_url: String,
    /// Pause between a successful submit and the follow-up navigation
    pub redirect_delay: Duration,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("FITQUEST_API_BASE_URL"),
            option_env!("FITQUEST_REDIRECT_DELAY_MS"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from raw override values, ignoring blank or
    /// unparseable ones.
    pub fn from_values(api_base_url: Option<&str>, redirect_delay_ms: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let redirect_delay = redirect_delay_ms
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map_or(
                Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
                Duration::from_millis,
            );
        Self {
            api_base_url,
            redirect_delay,
        }
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the success redirect delay
    pub fn redirect_delay(&self) -> Duration {
        self.redirect_delay
    }
}
