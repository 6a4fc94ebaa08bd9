//! REST façade over the provider catalog.
//!
//! Each handler forwards to one provider and wraps the outcome in the
//! `{success, data|error}` envelope with HTTP 200. Type-level parameter
//! failures (missing body field, non-numeric query value) are rejected by
//! axum's extractors before the handler runs.

use crate::envelope::Envelope;
use crate::registry::TOOL_NAMES;
use crate::state::{AppState, SERVER_NAME, SERVER_VERSION, SERVICES};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};
use travelmux_providers::events::EventSearchParams;
use travelmux_providers::finance::CurrencyConversionParams;
use travelmux_providers::flights::FlightSearchParams;
use travelmux_providers::geocoding::{DistanceParams, GeocodeParams, ReverseGeocodeParams};
use travelmux_providers::hotels::HotelSearchParams;
use travelmux_providers::weather::{ForecastQuery, WeatherQuery};

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Travel Assistant MCP Server",
        "name": SERVER_NAME,
        "version": SERVER_VERSION,
        "status": "running",
        "protocol": "MCP 2024-11-05",
        "services": SERVICES,
        "tools_count": TOOL_NAMES.len(),
        "mcp_endpoint": "/sse",
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "message": "Server is running"}))
}

pub async fn search_flights(
    State(state): State<AppState>,
    Json(params): Json<FlightSearchParams>,
) -> Json<Envelope> {
    Json(Envelope::from_result(
        state.catalog.flights.search_flights(&params).await,
    ))
}

pub async fn flight_details(
    State(state): State<AppState>,
    Path(search_id): Path<String>,
) -> Json<Envelope> {
    Json(Envelope::from_result(
        state.catalog.flights.flight_details(&search_id).await,
    ))
}

pub async fn search_hotels(
    State(state): State<AppState>,
    Json(params): Json<HotelSearchParams>,
) -> Json<Envelope> {
    Json(Envelope::from_result(
        state.catalog.hotels.search_hotels(&params).await,
    ))
}

pub async fn hotel_details(
    State(state): State<AppState>,
    Path(search_id): Path<String>,
) -> Json<Envelope> {
    Json(Envelope::from_result(
        state.catalog.hotels.hotel_details(&search_id).await,
    ))
}

pub async fn weather_current(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Json<Envelope> {
    Json(Envelope::from_result(
        state.catalog.weather.current(&query).await,
    ))
}

pub async fn weather_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Json<Envelope> {
    Json(Envelope::from_result(
        state.catalog.weather.forecast(&query).await,
    ))
}

pub async fn search_events(
    State(state): State<AppState>,
    Json(params): Json<EventSearchParams>,
) -> Json<Envelope> {
    Json(Envelope::from_result(
        state.catalog.events.search_events(&params).await,
    ))
}

pub async fn event_details(
    State(state): State<AppState>,
    Path(search_id): Path<String>,
) -> Json<Envelope> {
    Json(Envelope::from_result(
        state.catalog.events.event_details(&search_id).await,
    ))
}

pub async fn convert_currency(
    State(state): State<AppState>,
    Query(params): Query<CurrencyConversionParams>,
) -> Json<Envelope> {
    Json(Envelope::from_result(
        state.catalog.finance.convert_currency(&params).await,
    ))
}

pub async fn stock_quote(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Json<Envelope> {
    Json(Envelope::from_result(
        state.catalog.finance.lookup_stock(&symbol).await,
    ))
}

pub async fn geocode(
    State(state): State<AppState>,
    Query(params): Query<GeocodeParams>,
) -> Json<Envelope> {
    Json(Envelope::from_result(
        state.catalog.geocoding.geocode_location(&params).await,
    ))
}

pub async fn reverse_geocode(
    State(state): State<AppState>,
    Query(params): Query<ReverseGeocodeParams>,
) -> Json<Envelope> {
    Json(Envelope::from_result(
        state.catalog.geocoding.reverse_geocode(&params).await,
    ))
}

pub async fn distance(
    State(state): State<AppState>,
    Query(params): Query<DistanceParams>,
) -> Json<Envelope> {
    Json(Envelope::from_result(
        state.catalog.geocoding.calculate_distance(&params),
    ))
}
