//! Provider configuration.
//!
//! Credentials and base URLs are plain process environment reads. Base URLs
//! are overridable so tests can point a provider at a local stub server.

use std::env;

pub const SERPAPI_BASE_URL: &str = "https://serpapi.com";
pub const WEATHERSTACK_BASE_URL: &str = "https://api.weatherstack.com";
pub const ALPHAVANTAGE_BASE_URL: &str = "https://www.alphavantage.co";
pub const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Credentials and endpoint overrides for all upstream services.
///
/// A missing credential is not an error here; it surfaces as
/// [`crate::ProviderError::MissingCredential`] when the corresponding
/// provider is actually called.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub serpapi_key: Option<String>,
    pub weatherstack_key: Option<String>,
    pub alphavantage_key: Option<String>,
    pub serpapi_base_url: String,
    pub weatherstack_base_url: String,
    pub alphavantage_base_url: String,
    pub nominatim_base_url: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            serpapi_key: None,
            weatherstack_key: None,
            alphavantage_key: None,
            serpapi_base_url: SERPAPI_BASE_URL.to_string(),
            weatherstack_base_url: WEATHERSTACK_BASE_URL.to_string(),
            alphavantage_base_url: ALPHAVANTAGE_BASE_URL.to_string(),
            nominatim_base_url: NOMINATIM_BASE_URL.to_string(),
        }
    }
}

impl ProviderSettings {
    /// Read settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            serpapi_key: non_empty_env("SERPAPI_API_KEY"),
            weatherstack_key: non_empty_env("WEATHERSTACK_API_KEY"),
            alphavantage_key: non_empty_env("ALPHAVANTAGE_API_KEY"),
            serpapi_base_url: non_empty_env("SERPAPI_BASE_URL")
                .unwrap_or(defaults.serpapi_base_url),
            weatherstack_base_url: non_empty_env("WEATHERSTACK_BASE_URL")
                .unwrap_or(defaults.weatherstack_base_url),
            alphavantage_base_url: non_empty_env("ALPHAVANTAGE_BASE_URL")
                .unwrap_or(defaults.alphavantage_base_url),
            nominatim_base_url: non_empty_env("NOMINATIM_BASE_URL")
                .unwrap_or(defaults.nominatim_base_url),
        }
    }

    /// Names of credential variables that are not set.
    ///
    /// Used for startup warnings only; a missing key never prevents startup.
    #[must_use]
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.serpapi_key.is_none() {
            missing.push("SERPAPI_API_KEY");
        }
        if self.weatherstack_key.is_none() {
            missing.push("WEATHERSTACK_API_KEY");
        }
        if self.alphavantage_key.is_none() {
            missing.push("ALPHAVANTAGE_API_KEY");
        }
        missing
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}
