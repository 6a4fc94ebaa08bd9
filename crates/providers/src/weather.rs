//! Current conditions and forecasts via Weatherstack.
//!
//! Weatherstack reports its own failures as HTTP 200 with a
//! `{"success": false, "error": {...}}` body, so the response is inspected
//! before being passed through.

use crate::error::{ProviderError, Result};
use crate::fetch::get_json;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub location: String,
    #[serde(default = "default_units")]
    pub units: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastQuery {
    pub location: String,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
    #[serde(default)]
    pub hourly: bool,
    #[serde(default = "default_units")]
    pub units: String,
}

fn default_units() -> String {
    "m".to_string()
}
fn default_forecast_days() -> u8 {
    3
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherProvider {
    pub fn new(client: Client, base_url: String, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential("WEATHERSTACK_API_KEY"))
    }

    /// Get current weather for a location.
    ///
    /// # Errors
    ///
    /// Returns an error if the Weatherstack key is not configured, the call
    /// fails, or the upstream reports an in-band error.
    pub async fn current(&self, query: &WeatherQuery) -> Result<Value> {
        let key = self.api_key()?;
        let url = format!("{}/current", self.base_url);
        let q = vec![
            ("access_key".to_string(), key.to_string()),
            ("query".to_string(), query.location.clone()),
            ("units".to_string(), query.units.clone()),
        ];
        tracing::debug!(location = %query.location, "current weather");
        check_in_band_error(get_json(&self.client, &url, &q).await?)
    }

    /// Get a daily (optionally hourly) forecast for a location.
    ///
    /// # Errors
    ///
    /// Returns an error if the Weatherstack key is not configured, the call
    /// fails, or the upstream reports an in-band error.
    pub async fn forecast(&self, query: &ForecastQuery) -> Result<Value> {
        let key = self.api_key()?;
        let url = format!("{}/forecast", self.base_url);
        let q = vec![
            ("access_key".to_string(), key.to_string()),
            ("query".to_string(), query.location.clone()),
            (
                "forecast_days".to_string(),
                query.forecast_days.to_string(),
            ),
            (
                "hourly".to_string(),
                if query.hourly { "1" } else { "0" }.to_string(),
            ),
            ("units".to_string(), query.units.clone()),
        ];
        tracing::debug!(location = %query.location, days = query.forecast_days, "weather forecast");
        check_in_band_error(get_json(&self.client, &url, &q).await?)
    }
}

fn check_in_band_error(body: Value) -> Result<Value> {
    if body.get("success") == Some(&Value::Bool(false)) {
        let info = body
            .get("error")
            .map(std::string::ToString::to_string)
            .unwrap_or_else(|| "unspecified weatherstack error".to_string());
        return Err(ProviderError::Upstream {
            status: 200,
            body: info,
        });
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_metric_three_days() {
        let q: WeatherQuery = serde_json::from_value(json!({"location": "Tokyo"})).unwrap();
        assert_eq!(q.units, "m");

        let f: ForecastQuery = serde_json::from_value(json!({"location": "Tokyo"})).unwrap();
        assert_eq!(f.forecast_days, 3);
        assert!(!f.hourly);
    }

    #[test]
    fn in_band_error_is_rejected() {
        let body = json!({"success": false, "error": {"code": 615, "type": "request_failed"}});
        let err = check_in_band_error(body).unwrap_err();
        assert!(err.to_string().contains("615"));
    }

    #[test]
    fn normal_payload_passes_through() {
        let body = json!({"current": {"temperature": 21}});
        assert_eq!(check_in_band_error(body.clone()).unwrap(), body);
    }
}
