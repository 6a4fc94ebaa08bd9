//! Tool dispatcher: route a tool name plus a flat argument map to the
//! matching provider wrapper.
//!
//! No retries, no timeouts beyond the HTTP client's own, no partial results.
//! A wrapper failure is reported as-is; callers wrap it into an envelope or
//! a JSON-RPC tool result rather than failing the transaction.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use travelmux_providers::events::EventSearchParams;
use travelmux_providers::finance::CurrencyConversionParams;
use travelmux_providers::flights::FlightSearchParams;
use travelmux_providers::geocoding::GeocodeParams;
use travelmux_providers::hotels::HotelSearchParams;
use travelmux_providers::weather::WeatherQuery;
use travelmux_providers::{ProviderCatalog, ProviderError};

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The tool name is outside the fixed set. No wrapper was invoked.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The wrapper was invoked and failed; the message is the upstream
    /// error's string form.
    #[error("{0}")]
    Execution(String),
}

fn execution(e: ProviderError) -> DispatchError {
    DispatchError::Execution(e.to_string())
}

fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T, DispatchError> {
    let arguments = if arguments.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| DispatchError::Execution(e.to_string()))
}

/// Invoke the named tool with the given argument map.
///
/// # Errors
///
/// [`DispatchError::UnknownTool`] for names outside the fixed set;
/// [`DispatchError::Execution`] for bad arguments or any wrapper failure.
pub async fn dispatch_tool(
    catalog: &ProviderCatalog,
    name: &str,
    arguments: Value,
) -> Result<Value, DispatchError> {
    match name {
        "search_flights" => {
            let params: FlightSearchParams = parse_args(arguments)?;
            catalog.flights.search_flights(&params).await.map_err(execution)
        }
        "search_hotels" => {
            let params: HotelSearchParams = parse_args(arguments)?;
            catalog.hotels.search_hotels(&params).await.map_err(execution)
        }
        "get_current_weather" => {
            let query: WeatherQuery = parse_args(arguments)?;
            catalog.weather.current(&query).await.map_err(execution)
        }
        "search_events" => {
            let params: EventSearchParams = parse_args(arguments)?;
            catalog.events.search_events(&params).await.map_err(execution)
        }
        "convert_currency" => {
            let params: CurrencyConversionParams = parse_args(arguments)?;
            catalog.finance.convert_currency(&params).await.map_err(execution)
        }
        "geocode_location" => {
            let params: GeocodeParams = parse_args(arguments)?;
            catalog.geocoding.geocode_location(&params).await.map_err(execution)
        }
        other => Err(DispatchError::UnknownTool(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use travelmux_providers::ProviderSettings;

    fn catalog() -> ProviderCatalog {
        // No credentials, unreachable defaults: fine, the tests below never
        // complete an upstream call.
        ProviderCatalog::new(&ProviderSettings::default()).unwrap()
    }

    #[tokio::test]
    async fn unknown_tool_is_a_lookup_miss() {
        let err = dispatch_tool(&catalog(), "book_flights", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::UnknownTool(_)));
        assert_eq!(err.to_string(), "Unknown tool: book_flights");
    }

    #[tokio::test]
    async fn missing_required_argument_is_an_execution_error() {
        let err = dispatch_tool(&catalog(), "convert_currency", json!({"from_currency": "USD"}))
            .await
            .unwrap_err();
        match err {
            DispatchError::Execution(msg) => assert!(msg.contains("to_currency"), "{msg}"),
            DispatchError::UnknownTool(_) => panic!("expected execution error"),
        }
    }

    #[tokio::test]
    async fn null_arguments_are_treated_as_empty() {
        // Empty args on a tool with required fields: still an execution
        // error, not a panic or unknown-tool miss.
        let err = dispatch_tool(&catalog(), "geocode_location", Value::Null)
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::Execution(_)));
    }

    #[tokio::test]
    async fn missing_credential_surfaces_as_execution_error() {
        let err = dispatch_tool(
            &catalog(),
            "get_current_weather",
            json!({"location": "Tokyo"}),
        )
        .await
        .unwrap_err();
        match err {
            DispatchError::Execution(msg) => {
                assert!(msg.contains("WEATHERSTACK_API_KEY"), "{msg}");
            }
            DispatchError::UnknownTool(_) => panic!("expected execution error"),
        }
    }
}
