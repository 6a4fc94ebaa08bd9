//! MCP transports: direct JSON-RPC POST, SSE event stream, and the
//! per-session message endpoint.
//!
//! The stream has three states: connected, idle-heartbeat-loop, closed. The
//! heartbeat carries no payload significance; it only keeps intermediary
//! proxies from closing the connection. Disconnect is the sole lifecycle
//! event and discards the session id, nothing else.

use super::{handle_message, JsonRpcResponse, INVALID_PARAMS};
use crate::sessions::SessionRegistry;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::response::sse::{Event, Sse};
use axum::Json;
use futures::stream::{self, BoxStream, Stream, StreamExt as _};
use serde::Deserialize;
use serde_json::Value;
use std::convert::Infallible;
use std::pin::Pin;
use std::task::{Context, Poll};
use uuid::Uuid;

/// `POST /sse`: direct JSON-RPC request/response.
pub async fn rpc_endpoint(State(state): State<AppState>, body: Bytes) -> Json<JsonRpcResponse> {
    Json(handle_message(&state, &body).await)
}

#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    #[serde(default)]
    session_id: Option<String>,
}

/// `POST /sse/messages?session_id=...`: JSON-RPC over the SSE session
/// transport. The session id is required but carries no state; an id from a
/// closed stream is still answered.
pub async fn session_message(
    State(state): State<AppState>,
    Query(query): Query<MessagesQuery>,
    body: Bytes,
) -> Json<JsonRpcResponse> {
    let Some(session_id) = query.session_id else {
        return Json(JsonRpcResponse::error(
            Value::from(0),
            INVALID_PARAMS,
            "Missing session_id",
        ));
    };
    tracing::debug!(session_id = %session_id, "sse message");
    Json(handle_message(&state, &body).await)
}

/// `GET /sse`: open the event stream.
///
/// First event is `endpoint` with the messages URL for this session, then a
/// `ping` on every heartbeat interval until the client goes away.
pub async fn event_stream(State(state): State<AppState>) -> Sse<SessionStream> {
    let session_id = state.sessions.mint();
    tracing::info!(session_id = %session_id, "sse client connected");

    let endpoint = Event::default()
        .event("endpoint")
        .data(format!("/sse/messages?session_id={session_id}"));

    let heartbeat = state.heartbeat;
    let pings = stream::unfold((), move |()| async move {
        tokio::time::sleep(heartbeat).await;
        Some((Event::default().event("ping").data("Server alive"), ()))
    });

    let inner = stream::once(std::future::ready(endpoint))
        .chain(pings)
        .map(Ok)
        .boxed();

    Sse::new(SessionStream {
        inner,
        sessions: state.sessions.clone(),
        session_id,
    })
}

/// Event stream that discards its session id when the connection drops.
pub struct SessionStream {
    inner: BoxStream<'static, Result<Event, Infallible>>,
    sessions: SessionRegistry,
    session_id: Uuid,
}

impl Stream for SessionStream {
    type Item = Result<Event, Infallible>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().inner.poll_next_unpin(cx)
    }
}

impl Drop for SessionStream {
    fn drop(&mut self) {
        self.sessions.forget(self.session_id);
        tracing::info!(session_id = %self.session_id, "sse client disconnected");
    }
}
