//! Shared outbound HTTP plumbing.

use crate::error::{ProviderError, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Default timeout for every outbound call. There is no retry layer on top.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("travelmux/", env!("CARGO_PKG_VERSION"));

/// Build the shared outbound client used by every provider.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(ProviderError::from)
}

/// Issue a GET with query parameters and decode the JSON body.
///
/// Non-2xx statuses become [`ProviderError::Upstream`] with the response body
/// embedded; the body is truncated so a misbehaving upstream can't flood the
/// error envelope.
pub async fn get_json(client: &Client, url: &str, query: &[(String, String)]) -> Result<Value> {
    let resp = client.get(url).query(query).send().await?;
    let status = resp.status();
    if !status.is_success() {
        let body = truncate(&resp.text().await.unwrap_or_default(), 512);
        return Err(ProviderError::Upstream {
            status: status.as_u16(),
            body,
        });
    }
    Ok(resp.json().await?)
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &s[..end])
}

/// Trim an array-valued field in place to at most `max` entries.
///
/// Used to honor `max_results` without otherwise reshaping upstream payloads.
pub fn truncate_array_field(value: &mut Value, field: &str, max: usize) {
    if let Some(arr) = value.get_mut(field).and_then(Value::as_array_mut) {
        arr.truncate(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truncate_respects_char_boundaries() {
        let s = "héllo wörld";
        let t = truncate(s, 2);
        assert!(t.starts_with('h'));
        assert!(t.ends_with('…'));
    }

    #[test]
    fn truncate_array_field_limits_entries() {
        let mut v = json!({"results": [1, 2, 3, 4], "other": "x"});
        truncate_array_field(&mut v, "results", 2);
        assert_eq!(v["results"], json!([1, 2]));
        assert_eq!(v["other"], "x");
    }

    #[test]
    fn truncate_array_field_ignores_missing_or_non_array() {
        let mut v = json!({"results": "not-an-array"});
        truncate_array_field(&mut v, "results", 1);
        truncate_array_field(&mut v, "absent", 1);
        assert_eq!(v["results"], "not-an-array");
    }
}
