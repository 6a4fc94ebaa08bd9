//! Geocoding via OSM Nominatim, plus local great-circle distance.
//!
//! Nominatim needs no API key but requires an identifying `User-Agent`,
//! which the shared client already sets.

use crate::error::{ProviderError, Result};
use crate::fetch::get_json;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const EARTH_RADIUS_KM: f64 = 6371.0088;
const KM_PER_MILE: f64 = 1.609_344;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeParams {
    pub location: String,
    #[serde(default = "default_geocode_results")]
    pub max_results: usize,
}

fn default_geocode_results() -> usize {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverseGeocodeParams {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceParams {
    pub lat1: f64,
    pub lon1: f64,
    pub lat2: f64,
    pub lon2: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "km".to_string()
}

#[derive(Debug, Clone)]
pub struct GeocodingProvider {
    client: Client,
    base_url: String,
}

impl GeocodingProvider {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Resolve a free-text location to coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream call fails.
    pub async fn geocode_location(&self, params: &GeocodeParams) -> Result<Value> {
        let url = format!("{}/search", self.base_url);
        let q = vec![
            ("q".to_string(), params.location.clone()),
            ("format".to_string(), "jsonv2".to_string()),
            ("limit".to_string(), params.max_results.to_string()),
        ];
        tracing::debug!(location = %params.location, "geocode");
        get_json(&self.client, &url, &q).await
    }

    /// Resolve coordinates back to a place description.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream call fails.
    pub async fn reverse_geocode(&self, params: &ReverseGeocodeParams) -> Result<Value> {
        let url = format!("{}/reverse", self.base_url);
        let q = vec![
            ("lat".to_string(), params.latitude.to_string()),
            ("lon".to_string(), params.longitude.to_string()),
            ("format".to_string(), "jsonv2".to_string()),
        ];
        tracing::debug!(lat = params.latitude, lon = params.longitude, "reverse geocode");
        get_json(&self.client, &url, &q).await
    }

    /// Great-circle distance between two coordinate pairs. Purely local.
    ///
    /// # Errors
    ///
    /// Returns an error if `unit` is neither `km` nor `mi`.
    pub fn calculate_distance(&self, params: &DistanceParams) -> Result<Value> {
        let km = haversine_km(params.lat1, params.lon1, params.lat2, params.lon2);
        let distance = match params.unit.as_str() {
            "km" => km,
            "mi" => km / KM_PER_MILE,
            other => {
                return Err(ProviderError::InvalidParam(format!(
                    "unsupported unit '{other}' (expected 'km' or 'mi')"
                )));
            }
        };
        Ok(json!({
            "distance": distance,
            "unit": params.unit,
            "from": {"latitude": params.lat1, "longitude": params.lon1},
            "to": {"latitude": params.lat2, "longitude": params.lon2},
        }))
    }
}

fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GeocodingProvider {
        GeocodingProvider::new(Client::new(), "http://127.0.0.1:1".to_string())
    }

    #[test]
    fn paris_to_london_is_about_344_km() {
        let km = haversine_km(48.8566, 2.3522, 51.5074, -0.1278);
        assert!((km - 344.0).abs() < 2.0, "got {km}");
    }

    #[test]
    fn zero_distance_for_identical_points() {
        let km = haversine_km(40.0, -73.0, 40.0, -73.0);
        assert!(km.abs() < 1e-9);
    }

    #[test]
    fn distance_supports_miles() {
        let p: DistanceParams = serde_json::from_value(json!({
            "lat1": 48.8566, "lon1": 2.3522,
            "lat2": 51.5074, "lon2": -0.1278,
            "unit": "mi"
        }))
        .unwrap();
        let out = provider().calculate_distance(&p).unwrap();
        let mi = out["distance"].as_f64().unwrap();
        assert!((mi - 214.0).abs() < 2.0, "got {mi}");
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let p: DistanceParams = serde_json::from_value(json!({
            "lat1": 0.0, "lon1": 0.0, "lat2": 1.0, "lon2": 1.0, "unit": "furlongs"
        }))
        .unwrap();
        let err = provider().calculate_distance(&p).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidParam(_)));
    }

    #[test]
    fn geocode_defaults_to_single_result() {
        let p: GeocodeParams = serde_json::from_value(json!({"location": "Berlin"})).unwrap();
        assert_eq!(p.max_results, 1);
    }
}
