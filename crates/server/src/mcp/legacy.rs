//! Legacy tool invocation endpoint: `POST /mcp/tool` with `{name, input}`.
//!
//! Predates the JSON-RPC surface and kept for callers that still use it.
//! Same dispatcher underneath, flat `{success, result|error}` shape on top.

use crate::dispatch::{dispatch_tool, DispatchError};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
struct ToolInvocation {
    name: String,
    #[serde(default)]
    input: Value,
}

pub async fn invoke_tool(State(state): State<AppState>, body: Bytes) -> Json<Value> {
    let invocation: ToolInvocation = match serde_json::from_slice(&body) {
        Ok(i) => i,
        Err(e) => {
            return Json(json!({"success": false, "error": e.to_string()}));
        }
    };

    tracing::info!(tool = %invocation.name, "legacy tool invocation");

    match dispatch_tool(&state.catalog, &invocation.name, invocation.input).await {
        Ok(result) => Json(json!({"success": true, "result": result})),
        Err(e @ DispatchError::UnknownTool(_)) => {
            Json(json!({"success": false, "error": e.to_string()}))
        }
        Err(DispatchError::Execution(message)) => {
            Json(json!({"success": false, "error": message}))
        }
    }
}
