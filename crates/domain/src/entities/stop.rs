//! Nearest transit stop entity

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::WheelchairAccessibility;

/// A transit stop as returned by a nearest-stop lookup
///
/// Immutable once created; each lookup produces a fresh instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestStop {
    /// Display name of the stop (e.g., "Malden Center")
    pub name: String,
    /// Wheelchair boarding status
    pub accessibility: WheelchairAccessibility,
}

impl NearestStop {
    /// Create a new stop from a name and a raw `wheelchair_boarding` code
    #[must_use]
    pub fn from_code(name: impl Into<String>, code: i64) -> Self {
        Self {
            name: name.into(),
            accessibility: WheelchairAccessibility::from_code(code),
        }
    }
}

impl fmt::Display for NearestStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.accessibility)
    }
}
