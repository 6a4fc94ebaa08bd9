//! Grouping of all six providers behind a single constructor.

use crate::error::{ProviderError, Result};
use crate::events::EventsProvider;
use crate::fetch::build_client;
use crate::finance::FinanceProvider;
use crate::flights::FlightsProvider;
use crate::geocoding::GeocodingProvider;
use crate::hotels::HotelsProvider;
use crate::settings::ProviderSettings;
use crate::weather::WeatherProvider;

/// All upstream wrappers, sharing one outbound HTTP client.
///
/// The catalog is immutable after construction and cheap to clone.
#[derive(Debug, Clone)]
pub struct ProviderCatalog {
    pub flights: FlightsProvider,
    pub hotels: HotelsProvider,
    pub weather: WeatherProvider,
    pub events: EventsProvider,
    pub finance: FinanceProvider,
    pub geocoding: GeocodingProvider,
}

impl ProviderCatalog {
    /// Build all providers from settings.
    ///
    /// Missing credentials are deliberately tolerated here; they surface as
    /// call-time errors per provider.
    ///
    /// # Errors
    ///
    /// Returns an error if a base URL is malformed or the shared HTTP client
    /// cannot be built.
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        for base in [
            &settings.serpapi_base_url,
            &settings.weatherstack_base_url,
            &settings.alphavantage_base_url,
            &settings.nominatim_base_url,
        ] {
            url::Url::parse(base)
                .map_err(|e| ProviderError::InvalidParam(format!("invalid base URL '{base}': {e}")))?;
        }

        let client = build_client()?;
        Ok(Self {
            flights: FlightsProvider::new(
                client.clone(),
                settings.serpapi_base_url.clone(),
                settings.serpapi_key.clone(),
            ),
            hotels: HotelsProvider::new(
                client.clone(),
                settings.serpapi_base_url.clone(),
                settings.serpapi_key.clone(),
            ),
            weather: WeatherProvider::new(
                client.clone(),
                settings.weatherstack_base_url.clone(),
                settings.weatherstack_key.clone(),
            ),
            events: EventsProvider::new(
                client.clone(),
                settings.serpapi_base_url.clone(),
                settings.serpapi_key.clone(),
            ),
            finance: FinanceProvider::new(
                client.clone(),
                settings.alphavantage_base_url.clone(),
                settings.alphavantage_key.clone(),
            ),
            geocoding: GeocodingProvider::new(client, settings.nominatim_base_url.clone()),
        })
    }
}
