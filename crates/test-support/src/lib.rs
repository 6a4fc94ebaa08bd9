//! Helpers shared by the integration tests: in-process server spawning and
//! HTTP readiness polling.

use anyhow::Context as _;
use std::time::{Duration, Instant};

/// A live in-process server. Aborts the serve task on drop.
pub struct SpawnedApp {
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl Drop for SpawnedApp {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serve an axum router on an ephemeral localhost port.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound.
pub async fn spawn_app(router: axum::Router) -> anyhow::Result<SpawnedApp> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("bind ephemeral port")?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(SpawnedApp {
        base_url: format!("http://{addr}"),
        handle,
    })
}

/// Poll `url` until it answers with a 2xx, retrying every 50ms.
///
/// # Errors
///
/// Returns an error if `timeout` elapses first.
pub async fn wait_http_ok(url: &str, timeout: Duration) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let deadline = Instant::now() + timeout;
    loop {
        if let Ok(resp) = client.get(url).send().await {
            if resp.status().is_success() {
                return Ok(());
            }
        }
        anyhow::ensure!(Instant::now() < deadline, "timed out waiting for {url}");
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
