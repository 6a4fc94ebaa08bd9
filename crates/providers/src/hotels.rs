//! Hotel search via the SerpApi Google Hotels engine.

use crate::error::{ProviderError, Result};
use crate::fetch::{get_json, truncate_array_field};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelSearchParams {
    pub location: String,
    pub check_in_date: String,
    pub check_out_date: String,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default = "default_rooms")]
    pub rooms: u32,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_adults() -> u32 {
    2
}
fn default_rooms() -> u32 {
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
pub struct HotelsProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HotelsProvider {
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

    /// Search for hotels in a location.
    ///
    /// # Errors
    ///
    /// Returns an error if the SerpApi key is not configured or the upstream
    /// call fails.
    pub async fn search_hotels(&self, params: &HotelSearchParams) -> Result<Value> {
        let key = self.api_key()?;

        let query = vec![
            ("engine".to_string(), "google_hotels".to_string()),
            ("api_key".to_string(), key.to_string()),
            ("q".to_string(), params.location.clone()),
            ("check_in_date".to_string(), params.check_in_date.clone()),
            ("check_out_date".to_string(), params.check_out_date.clone()),
            ("adults".to_string(), params.adults.to_string()),
            ("children".to_string(), params.children.to_string()),
            ("rooms".to_string(), params.rooms.to_string()),
            ("currency".to_string(), params.currency.clone()),
            ("gl".to_string(), params.country.clone()),
            ("hl".to_string(), params.language.clone()),
        ];

        let url = format!("{}/search", self.base_url);
        tracing::debug!(location = %params.location, "hotel search");
        let mut body = get_json(&self.client, &url, &query).await?;
        truncate_array_field(&mut body, "properties", params.max_results);
        Ok(body)
    }

    /// Fetch an archived search result by its SerpApi search id.
    ///
    /// # Errors
    ///
    /// Returns an error if the SerpApi key is not configured or the upstream
    /// call fails.
    pub async fn hotel_details(&self, search_id: &str) -> Result<Value> {
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

    #[test]
    fn params_fill_documented_defaults() {
        let p: HotelSearchParams = serde_json::from_value(json!({
            "location": "Lisbon",
            "check_in_date": "2026-09-10",
            "check_out_date": "2026-09-12"
        }))
        .unwrap();
        assert_eq!(p.adults, 2);
        assert_eq!(p.rooms, 1);
        assert_eq!(p.max_results, 10);
    }

    #[tokio::test]
    async fn missing_key_surfaces_at_call_time() {
        let provider = HotelsProvider::new(Client::new(), "http://127.0.0.1:1".to_string(), None);
        let p: HotelSearchParams = serde_json::from_value(json!({
            "location": "Lisbon",
            "check_in_date": "2026-09-10",
            "check_out_date": "2026-09-12"
        }))
        .unwrap();
        let err = provider.search_hotels(&p).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredential(_)));
    }

    #[tokio::test]
    async fn details_need_a_key_too() {
        let provider = HotelsProvider::new(Client::new(), "http://127.0.0.1:1".to_string(), None);
        let err = provider.hotel_details("abc123").await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredential(_)));
    }
}
