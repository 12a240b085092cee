//! Raw MapQuest Geocoding API response models
//!
//! The geocoding endpoint nests coordinates three levels deep:
//! `results[].locations[].latLng.{lat,lng}`. Only the fields the lookup
//! reads are modeled; everything else in the payload is ignored.

use serde::Deserialize;

/// Top-level geocoding response
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

/// One geocoding result (one per requested location string)
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    #[serde(default)]
    pub locations: Vec<GeocodeLocation>,
}

/// A candidate location within a result
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeLocation {
    #[serde(rename = "latLng")]
    pub lat_lng: LatLng,
}

/// Coordinate pair
#[derive(Debug, Deserialize)]
pub(crate) struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
