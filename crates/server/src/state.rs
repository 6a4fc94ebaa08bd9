//! Shared application state.

use crate::sessions::SessionRegistry;
use std::sync::Arc;
use std::time::Duration;
use travelmux_providers::ProviderCatalog;

pub const SERVER_NAME: &str = "travel-assistant";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sub-services advertised by the root descriptor.
pub const SERVICES: [&str; 6] = [
    "flight-search",
    "hotel-search",
    "weather",
    "events",
    "finance",
    "geocoding",
];

const DEFAULT_HEARTBEAT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProviderCatalog>,
    pub sessions: SessionRegistry,
    /// Idle ping interval for the SSE transport. Shortened in tests.
    pub heartbeat: Duration,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: ProviderCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: SessionRegistry::default(),
            heartbeat: DEFAULT_HEARTBEAT,
        }
    }

    #[must_use]
    pub fn with_heartbeat(mut self, heartbeat: Duration) -> Self {
        self.heartbeat = heartbeat;
        self
    }
}
