//! Travelmux server: a REST façade plus an MCP tool-calling surface over the
//! six upstream travel providers.
//!
//! Every inbound request is independent; there is no cross-request state
//! beyond the set of live SSE session ids, which exists only so a disconnect
//! can discard its id.

pub mod config;
pub mod dispatch;
pub mod envelope;
pub mod mcp;
pub mod registry;
pub mod rest;
pub mod sessions;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use state::AppState;

/// Build the full application router.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(rest::root))
        .route("/health", get(rest::health))
        .route("/search-flights", post(rest::search_flights))
        .route("/flight-details/{search_id}", get(rest::flight_details))
        .route("/search-hotels", post(rest::search_hotels))
        .route("/hotel-details/{search_id}", get(rest::hotel_details))
        .route("/weather/current", get(rest::weather_current))
        .route("/weather/forecast", get(rest::weather_forecast))
        .route("/search-events", post(rest::search_events))
        .route("/event-details/{search_id}", get(rest::event_details))
        .route("/finance/convert-currency", get(rest::convert_currency))
        .route("/finance/stock/{symbol}", get(rest::stock_quote))
        .route("/geocoding/geocode", get(rest::geocode))
        .route("/geocoding/reverse", get(rest::reverse_geocode))
        .route("/geocoding/distance", get(rest::distance))
        .route("/sse", get(mcp::sse::event_stream).post(mcp::sse::rpc_endpoint))
        .route("/sse/messages", post(mcp::sse::session_message))
        .route("/mcp/tool", post(mcp::legacy::invoke_tool))
        .with_state(state)
}
