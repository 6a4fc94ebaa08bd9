//! Static tool registry.
//!
//! The descriptors are advisory metadata forwarded to clients; arguments are
//! not validated against these schemas before dispatch.

use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Names of the fixed tool set, in advertised order.
pub const TOOL_NAMES: [&str; 6] = [
    "search_flights",
    "search_hotels",
    "get_current_weather",
    "search_events",
    "convert_currency",
    "geocode_location",
];

/// The full advertised tool list.
#[must_use]
pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: "search_flights",
            description: "Search for flights between airports",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "departure_id": {"type": "string", "description": "Departure airport code"},
                    "arrival_id": {"type": "string", "description": "Arrival airport code"},
                    "outbound_date": {"type": "string", "description": "Departure date YYYY-MM-DD"},
                    "return_date": {"type": "string", "description": "Return date YYYY-MM-DD (optional)"},
                    "adults": {"type": "integer", "default": 1}
                },
                "required": ["departure_id", "arrival_id", "outbound_date"]
            }),
        },
        ToolDescriptor {
            name: "search_hotels",
            description: "Search for hotels in a location",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "location": {"type": "string", "description": "Location to search hotels"},
                    "check_in_date": {"type": "string", "description": "Check-in date YYYY-MM-DD"},
                    "check_out_date": {"type": "string", "description": "Check-out date YYYY-MM-DD"},
                    "adults": {"type": "integer", "default": 2}
                },
                "required": ["location", "check_in_date", "check_out_date"]
            }),
        },
        ToolDescriptor {
            name: "get_current_weather",
            description: "Get current weather for a location",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "location": {"type": "string", "description": "Location name or coordinates"},
                    "units": {"type": "string", "default": "m"}
                },
                "required": ["location"]
            }),
        },
        ToolDescriptor {
            name: "search_events",
            description: "Search for events",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "Event search query"},
                    "location": {"type": "string", "description": "Location to search (optional)"}
                },
                "required": ["query"]
            }),
        },
        ToolDescriptor {
            name: "convert_currency",
            description: "Convert currency amounts",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "from_currency": {"type": "string", "description": "Source currency code"},
                    "to_currency": {"type": "string", "description": "Target currency code"},
                    "amount": {"type": "number", "default": 1.0}
                },
                "required": ["from_currency", "to_currency"]
            }),
        },
        ToolDescriptor {
            name: "geocode_location",
            description: "Get coordinates for a location",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "location": {"type": "string", "description": "Location to geocode"},
                    "max_results": {"type": "integer", "default": 1}
                },
                "required": ["location"]
            }),
        },
    ]
}
