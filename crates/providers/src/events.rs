//! Event search via the SerpApi Google Events engine.

use crate::error::{ProviderError, Result};
use crate::fetch::{get_json, truncate_array_field};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSearchParams {
    pub query: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date_range_start: Option<String>,
    #[serde(default)]
    pub date_range_end: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    10
}

impl EventSearchParams {
    /// Compose the free-text query the engine receives.
    ///
    /// Google Events has no structured date/category filters, so optional
    /// fields are folded into the query text.
    fn engine_query(&self) -> String {
        let mut q = self.query.clone();
        if let Some(category) = &self.category {
            q = format!("{category} {q}");
        }
        if let Some(location) = &self.location {
            q.push_str(&format!(" in {location}"));
        }
        match (&self.date_range_start, &self.date_range_end) {
            (Some(start), Some(end)) => q.push_str(&format!(" between {start} and {end}")),
            (Some(start), None) => q.push_str(&format!(" after {start}")),
            (None, Some(end)) => q.push_str(&format!(" before {end}")),
            (None, None) => {}
        }
        q
    }
}

#[derive(Debug, Clone)]
pub struct EventsProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl EventsProvider {
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

    /// Search for events matching a free-text query.
    ///
    /// # Errors
    ///
    /// Returns an error if the SerpApi key is not configured or the upstream
    /// call fails.
    pub async fn search_events(&self, params: &EventSearchParams) -> Result<Value> {
        let key = self.api_key()?;

        let query = vec![
            ("engine".to_string(), "google_events".to_string()),
            ("api_key".to_string(), key.to_string()),
            ("q".to_string(), params.engine_query()),
        ];

        let url = format!("{}/search", self.base_url);
        tracing::debug!(query = %params.query, "event search");
        let mut body = get_json(&self.client, &url, &query).await?;
        truncate_array_field(&mut body, "events_results", params.max_results);
        Ok(body)
    }

    /// Fetch an archived search result by its SerpApi search id.
    ///
    /// # Errors
    ///
    /// Returns an error if the SerpApi key is not configured or the upstream
    /// call fails.
    pub async fn event_details(&self, search_id: &str) -> Result<Value> {
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
    fn engine_query_folds_optional_fields() {
        let p: EventSearchParams = serde_json::from_value(json!({
            "query": "jazz concerts",
            "location": "New Orleans",
            "category": "music",
            "date_range_start": "2026-09-01",
            "date_range_end": "2026-09-30"
        }))
        .unwrap();
        assert_eq!(
            p.engine_query(),
            "music jazz concerts in New Orleans between 2026-09-01 and 2026-09-30"
        );
    }

    #[test]
    fn bare_query_is_passed_through() {
        let p: EventSearchParams =
            serde_json::from_value(json!({"query": "food festivals"})).unwrap();
        assert_eq!(p.engine_query(), "food festivals");
        assert_eq!(p.max_results, 10);
    }

    #[tokio::test]
    async fn details_need_a_key_too() {
        let provider = EventsProvider::new(Client::new(), "http://127.0.0.1:1".to_string(), None);
        let err = provider.event_details("abc123").await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredential(_)));
    }
}
