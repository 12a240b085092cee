//! MBTA stop models
//!
//! Typed representation of a stop plus the raw JSON:API response shapes
//! returned by `GET /stops`.

use serde::{Deserialize, Serialize};

/// A transit stop as returned by the MBTA stops endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Stop identifier (e.g., "place-mlmnl")
    pub id: String,
    /// Display name (e.g., "Malden Center")
    pub name: String,
    /// Raw GTFS `wheelchair_boarding` code (0 = unknown, 1 = accessible,
    /// 2 = not accessible)
    pub wheelchair_boarding: i64,
}

/// Top-level JSON:API response for `GET /stops`
#[derive(Debug, Deserialize)]
pub(crate) struct StopsResponse {
    #[serde(default)]
    pub data: Vec<RawStop>,
}

/// One stop resource
#[derive(Debug, Deserialize)]
pub(crate) struct RawStop {
    #[serde(default)]
    pub id: String,
    pub attributes: RawStopAttributes,
}

/// Attributes of a stop resource
#[derive(Debug, Deserialize)]
pub(crate) struct RawStopAttributes {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub wheelchair_boarding: i64,
}

impl From<RawStop> for Stop {
    fn from(raw: RawStop) -> Self {
        Self {
            id: raw.id,
            name: raw.attributes.name,
            wheelchair_boarding: raw.attributes.wheelchair_boarding,
        }
    }
}
