//! Currency conversion and stock quotes via Alpha Vantage.

use crate::error::{ProviderError, Result};
use crate::fetch::get_json;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConversionParams {
    pub from_currency: String,
    pub to_currency: String,
    #[serde(default = "default_amount")]
    pub amount: f64,
}

fn default_amount() -> f64 {
    1.0
}

#[derive(Debug, Clone)]
pub struct FinanceProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl FinanceProvider {
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
            .ok_or(ProviderError::MissingCredential("ALPHAVANTAGE_API_KEY"))
    }

    /// Convert an amount between two currencies at the current quoted rate.
    ///
    /// The rate comes from the upstream quote; the multiplication happens
    /// here. The raw quote is returned alongside the derived fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the Alpha Vantage key is not configured, the call
    /// fails, or the quote payload lacks an exchange rate.
    pub async fn convert_currency(&self, params: &CurrencyConversionParams) -> Result<Value> {
        let key = self.api_key()?;
        let url = format!("{}/query", self.base_url);
        let q = vec![
            (
                "function".to_string(),
                "CURRENCY_EXCHANGE_RATE".to_string(),
            ),
            ("from_currency".to_string(), params.from_currency.clone()),
            ("to_currency".to_string(), params.to_currency.clone()),
            ("apikey".to_string(), key.to_string()),
        ];
        tracing::debug!(
            from = %params.from_currency,
            to = %params.to_currency,
            amount = params.amount,
            "currency conversion"
        );
        let body = get_json(&self.client, &url, &q).await?;
        let rate = extract_exchange_rate(&body)?;

        Ok(json!({
            "from": params.from_currency,
            "to": params.to_currency,
            "amount": params.amount,
            "rate": rate,
            "converted": params.amount * rate,
            "quote": body,
        }))
    }

    /// Look up the latest quote for a stock symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the Alpha Vantage key is not configured or the
    /// upstream call fails.
    pub async fn lookup_stock(&self, symbol: &str) -> Result<Value> {
        let key = self.api_key()?;
        let url = format!("{}/query", self.base_url);
        let q = vec![
            ("function".to_string(), "GLOBAL_QUOTE".to_string()),
            ("symbol".to_string(), symbol.to_string()),
            ("apikey".to_string(), key.to_string()),
        ];
        tracing::debug!(symbol = %symbol, "stock lookup");
        get_json(&self.client, &url, &q).await
    }
}

/// Pull the exchange rate out of a `CURRENCY_EXCHANGE_RATE` payload.
///
/// Alpha Vantage encodes numbers as strings under verbose keys; an error
/// note (rate limiting) comes back as a 200 with no quote object.
fn extract_exchange_rate(body: &Value) -> Result<f64> {
    let rate = body
        .get("Realtime Currency Exchange Rate")
        .and_then(|q| q.get("5. Exchange Rate"))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            let hint = body
                .get("Note")
                .or_else(|| body.get("Error Message"))
                .and_then(Value::as_str)
                .unwrap_or("no exchange rate in response");
            ProviderError::Payload(hint.to_string())
        })?;
    rate.parse::<f64>()
        .map_err(|_| ProviderError::Payload(format!("unparseable exchange rate '{rate}'")))
}
