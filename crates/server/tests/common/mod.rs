//! Shared fixtures: a stub upstream standing in for SerpApi, Weatherstack,
//! Alpha Vantage and Nominatim at once, plus gateway spawning.

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;
use travelmux_providers::{ProviderCatalog, ProviderSettings};
use travelmux_server::build_router;
use travelmux_server::state::AppState;
use travelmux_test_support::{spawn_app, wait_http_ok, SpawnedApp};

pub const TEST_HEARTBEAT: Duration = Duration::from_millis(50);

/// Build settings pointing every provider at the stub.
pub fn stub_settings(stub_base: &str, with_keys: bool) -> ProviderSettings {
    let key = || with_keys.then(|| "test-key".to_string());
    ProviderSettings {
        serpapi_key: key(),
        weatherstack_key: key(),
        alphavantage_key: key(),
        serpapi_base_url: stub_base.to_string(),
        weatherstack_base_url: stub_base.to_string(),
        alphavantage_base_url: stub_base.to_string(),
        nominatim_base_url: stub_base.to_string(),
    }
}

pub async fn spawn_gateway(settings: &ProviderSettings) -> anyhow::Result<SpawnedApp> {
    let catalog = ProviderCatalog::new(settings)?;
    let state = AppState::new(catalog).with_heartbeat(TEST_HEARTBEAT);
    let app = spawn_app(build_router(state)).await?;
    wait_http_ok(&format!("{}/health", app.base_url), Duration::from_secs(5)).await?;
    Ok(app)
}

pub async fn spawn_stub_upstream() -> anyhow::Result<SpawnedApp> {
    let router = Router::new()
        .route("/search", get(search))
        .route("/searches/{file}", get(archived_search))
        .route("/current", get(weather_current))
        .route("/forecast", get(weather_forecast))
        .route("/query", get(alphavantage))
        .route("/reverse", get(nominatim_reverse));
    spawn_app(router).await
}

/// `/search` is shared: SerpApi engines send `engine=...`, Nominatim sends
/// `q=...&format=jsonv2`.
async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    match params.get("engine").map(String::as_str) {
        Some("google_flights") => Json(json!({
            "search_metadata": {"id": "stub-flight-search"},
            "best_flights": [
                {"price": 512, "flights": [{"flight_number": "BA 112"}]},
                {"price": 575, "flights": [{"flight_number": "VS 4"}]},
                {"price": 630, "flights": [{"flight_number": "AA 100"}]}
            ],
            "other_flights": []
        })),
        Some("google_hotels") => Json(json!({
            "properties": [
                {"name": "Stub Grand Hotel", "rate_per_night": {"lowest": "$180"}},
                {"name": "Stub Budget Inn", "rate_per_night": {"lowest": "$75"}}
            ]
        })),
        Some("google_events") => Json(json!({
            "events_results": [
                {"title": "Stub Jazz Night", "date": {"when": "Sat, Sep 5"}}
            ]
        })),
        Some(other) => Json(json!({"error": format!("unknown engine {other}")})),
        None => Json(json!([
            {
                "lat": "40.7579787",
                "lon": "-73.9855426",
                "display_name": "Times Square, Manhattan, New York, USA"
            }
        ])),
    }
}

/// `/searches/{id}.json` is SerpApi's archived-search fetch; the detail
/// endpoints for flights, hotels and events all hit it.
async fn archived_search(axum::extract::Path(file): axum::extract::Path<String>) -> Json<Value> {
    let id = file.strip_suffix(".json").unwrap_or(&file);
    Json(json!({
        "search_metadata": {"id": id, "status": "Success"},
        "search_parameters": {"engine": "google_flights"}
    }))
}

async fn weather_current(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    // "Atlantis" triggers Weatherstack's in-band failure shape.
    if params.get("query").map(String::as_str) == Some("Atlantis") {
        return Json(json!({
            "success": false,
            "error": {"code": 615, "type": "request_failed", "info": "Your API request failed."}
        }));
    }
    Json(json!({
        "location": {"name": params.get("query").cloned().unwrap_or_default()},
        "current": {"temperature": 21, "weather_descriptions": ["Sunny"]}
    }))
}

async fn weather_forecast(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!({
        "location": {"name": params.get("query").cloned().unwrap_or_default()},
        "forecast": {"2026-08-31": {"maxtemp": 24, "mintemp": 17}}
    }))
}

async fn alphavantage(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    match params.get("function").map(String::as_str) {
        Some("CURRENCY_EXCHANGE_RATE") => Json(json!({
            "Realtime Currency Exchange Rate": {
                "1. From_Currency Code": params.get("from_currency").cloned().unwrap_or_default(),
                "3. To_Currency Code": params.get("to_currency").cloned().unwrap_or_default(),
                "5. Exchange Rate": "0.85000000"
            }
        })),
        Some("GLOBAL_QUOTE") => Json(json!({
            "Global Quote": {
                "01. symbol": params.get("symbol").cloned().unwrap_or_default(),
                "05. price": "123.4500"
            }
        })),
        _ => Json(json!({"Error Message": "unknown function"})),
    }
}

async fn nominatim_reverse(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!({
        "lat": params.get("lat").cloned().unwrap_or_default(),
        "lon": params.get("lon").cloned().unwrap_or_default(),
        "display_name": "Stubbed Place, Stub County"
    }))
}
