//! MCP JSON-RPC surface: `initialize`, `tools/list`, `tools/call`.
//!
//! This is the fixed tool-calling dialect spoken to LLM clients, not a
//! general-purpose protocol engine. Every request body maps to exactly one
//! JSON-RPC response; malformed input becomes a JSON-RPC error object on an
//! HTTP 200, never a 5xx.

pub mod legacy;
pub mod sse;

use crate::dispatch::dispatch_tool;
use crate::registry::tool_descriptors;
use crate::state::{AppState, SERVER_NAME, SERVER_VERSION};
use serde::Deserialize;
use serde_json::{json, Value};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
    #[serde(default)]
    pub id: Value,
}

#[derive(Debug, serde::Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, serde::Serialize)]
pub struct JsonRpcResponse {
    jsonrpc: &'static str,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<RpcError>,
}

impl JsonRpcResponse {
    #[must_use]
    pub fn result(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    #[must_use]
    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

/// Handle one raw JSON-RPC message body.
pub async fn handle_message(state: &AppState, raw: &[u8]) -> JsonRpcResponse {
    let request: JsonRpcRequest = match serde_json::from_slice(raw) {
        Ok(r) => r,
        Err(e) => {
            return JsonRpcResponse::error(
                Value::from(0),
                INTERNAL_ERROR,
                format!("Internal error: {e}"),
            );
        }
    };

    tracing::debug!(method = %request.method, "mcp request");

    match request.method.as_str() {
        "initialize" => JsonRpcResponse::result(request.id, initialize_result()),
        "tools/list" => {
            JsonRpcResponse::result(request.id, json!({"tools": tool_descriptors()}))
        }
        "tools/call" => handle_tools_call(state, request.id, request.params).await,
        other => JsonRpcResponse::error(
            request.id,
            METHOD_NOT_FOUND,
            format!("Method '{other}' not found"),
        ),
    }
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {"listChanged": true},
            "resources": {},
            "prompts": {},
            "logging": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION
        }
    })
}

async fn handle_tools_call(state: &AppState, id: Value, params: Value) -> JsonRpcResponse {
    let call: CallToolParams = match serde_json::from_value(params) {
        Ok(c) => c,
        Err(e) => {
            return JsonRpcResponse::error(
                id,
                INVALID_PARAMS,
                format!("invalid tools/call params: {e}"),
            );
        }
    };

    tracing::info!(tool = %call.name, "tools/call");

    // Unknown names and wrapper failures alike come back as isError tool
    // results; JSON-RPC error objects are reserved for the protocol layer.
    match dispatch_tool(&state.catalog, &call.name, call.arguments).await {
        Ok(value) => {
            let text = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
            JsonRpcResponse::result(id, tool_result(text, false))
        }
        Err(err) => {
            tracing::warn!(tool = %call.name, error = %err, "tool execution failed");
            JsonRpcResponse::result(
                id,
                tool_result(format!("Error executing {}: {err}", call.name), true),
            )
        }
    }
}

fn tool_result(text: String, is_error: bool) -> Value {
    json!({
        "content": [{"type": "text", "text": text}],
        "isError": is_error
    })
}
