//! Flight search via the SerpApi Google Flights engine.

use crate::error::{ProviderError, Result};
use crate::fetch::{get_json, truncate_array_field};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for a flight search.
///
/// Defaults mirror the advertised tool schema: one adult, economy, USD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSearchParams {
    pub departure_id: String,
    pub arrival_id: String,
    pub outbound_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default = "default_trip_type")]
    pub trip_type: u8,
    #[serde(default = "default_one")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub infants_in_seat: u32,
    #[serde(default)]
    pub infants_on_lap: u32,
    #[serde(default = "default_travel_class")]
    pub travel_class: u8,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_trip_type() -> u8 {
    1
}
fn default_one() -> u32 {
    1
}
fn default_travel_class() -> u8 {
    1
}
fn default_currency() -> String {
    "USD".to_string()
}
fn default_country() -> String {
    "us".to_string()
}
fn default_language() -> String {
    "en".to_string()
}
fn default_max_results() -> usize {
    10
}

#[derive(Debug, Clone)]
pub struct FlightsProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl FlightsProvider {
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
            .ok_or(ProviderError::MissingCredential("SERPAPI_API_KEY"))
    }

    fn search_query(&self, params: &FlightSearchParams, key: &str) -> Vec<(String, String)> {
        let mut q = vec![
            ("engine".to_string(), "google_flights".to_string()),
            ("api_key".to_string(), key.to_string()),
            ("departure_id".to_string(), params.departure_id.clone()),
            ("arrival_id".to_string(), params.arrival_id.clone()),
            ("outbound_date".to_string(), params.outbound_date.clone()),
            ("type".to_string(), params.trip_type.to_string()),
            ("adults".to_string(), params.adults.to_string()),
            ("children".to_string(), params.children.to_string()),
            (
                "infants_in_seat".to_string(),
                params.infants_in_seat.to_string(),
            ),
            (
                "infants_on_lap".to_string(),
                params.infants_on_lap.to_string(),
            ),
            ("travel_class".to_string(), params.travel_class.to_string()),
            ("currency".to_string(), params.currency.clone()),
            ("gl".to_string(), params.country.clone()),
            ("hl".to_string(), params.language.clone()),
        ];
        if let Some(return_date) = &params.return_date {
            q.push(("return_date".to_string(), return_date.clone()));
        }
        q
    }

    /// Search for flights between two airports.
    ///
    /// # Errors
    ///
    /// Returns an error if the SerpApi key is not configured or the upstream
    /// call fails.
    pub async fn search_flights(&self, params: &FlightSearchParams) -> Result<Value> {
        let key = self.api_key()?;
        let query = self.search_query(params, key);
        let url = format!("{}/search", self.base_url);
        tracing::debug!(
            departure = %params.departure_id,
            arrival = %params.arrival_id,
            outbound = %params.outbound_date,
            "flight search"
        );
        let mut body = get_json(&self.client, &url, &query).await?;
        truncate_array_field(&mut body, "best_flights", params.max_results);
        truncate_array_field(&mut body, "other_flights", params.max_results);
        Ok(body)
    }

    /// Fetch an archived search result by its SerpApi search id.
    ///
    /// # Errors
    ///
    /// Returns an error if the SerpApi key is not configured or the upstream
    /// call fails.
    pub async fn flight_details(&self, search_id: &str) -> Result<Value> {
        let key = self.api_key()?;
        let url = format!("{}/searches/{search_id}.json", self.base_url);
        let query = vec![("api_key".to_string(), key.to_string())];
        get_json(&self.client, &url, &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider(key: Option<&str>) -> FlightsProvider {
        FlightsProvider::new(
            Client::new(),
            "http://127.0.0.1:1".to_string(),
            key.map(str::to_string),
        )
    }

    #[test]
    fn params_fill_documented_defaults() {
        let p: FlightSearchParams = serde_json::from_value(json!({
            "departure_id": "JFK",
            "arrival_id": "LHR",
            "outbound_date": "2026-09-01"
        }))
        .unwrap();
        assert_eq!(p.adults, 1);
        assert_eq!(p.children, 0);
        assert_eq!(p.trip_type, 1);
        assert_eq!(p.currency, "USD");
        assert_eq!(p.country, "us");
        assert_eq!(p.language, "en");
        assert_eq!(p.max_results, 10);
        assert!(p.return_date.is_none());
    }

    #[test]
    fn missing_required_param_fails_deserialization() {
        let err = serde_json::from_value::<FlightSearchParams>(json!({
            "departure_id": "JFK"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("arrival_id"));
    }

    #[test]
    fn query_omits_return_date_for_one_way() {
        let p: FlightSearchParams = serde_json::from_value(json!({
            "departure_id": "JFK",
            "arrival_id": "LHR",
            "outbound_date": "2026-09-01"
        }))
        .unwrap();
        let q = provider(Some("k")).search_query(&p, "k");
        assert!(q.iter().any(|(k, v)| k == "engine" && v == "google_flights"));
        assert!(!q.iter().any(|(k, _)| k == "return_date"));
    }

    #[tokio::test]
    async fn missing_key_surfaces_at_call_time() {
        let p: FlightSearchParams = serde_json::from_value(json!({
            "departure_id": "JFK",
            "arrival_id": "LHR",
            "outbound_date": "2026-09-01"
        }))
        .unwrap();
        let err = provider(None).search_flights(&p).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredential(_)));
    }
}
