//! Upstream travel service wrappers.
//!
//! Each provider is a thin client over one third-party API (SerpApi engines,
//! Weatherstack, Alpha Vantage, OSM Nominatim). Providers return the upstream
//! JSON payload essentially verbatim as `serde_json::Value`; no validation is
//! performed on upstream data. Credentials are read from [`ProviderSettings`]
//! and their absence surfaces only when a call is attempted, never at
//! construction time.

pub mod catalog;
pub mod error;
pub mod events;
pub mod fetch;
pub mod finance;
pub mod flights;
pub mod geocoding;
pub mod hotels;
pub mod settings;
pub mod weather;

pub use catalog::ProviderCatalog;
pub use error::{ProviderError, Result};
pub use settings::ProviderSettings;
