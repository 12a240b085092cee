//! Wheelchair accessibility value object
//!
//! The MBTA stops API reports `wheelchair_boarding` as a GTFS-style integer
//! code: 0 = no information, 1 = accessible, 2 = not accessible.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wheelchair boarding status of a transit stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelchairAccessibility {
    /// No accessibility information available (code 0)
    NoInformation,
    /// Stop is wheelchair accessible (code 1)
    Accessible,
    /// Stop is not wheelchair accessible (code 2)
    Inaccessible,
}

impl WheelchairAccessibility {
    /// Map a raw `wheelchair_boarding` code to a status
    ///
    /// Codes outside {0, 1, 2} are treated as "no information" rather than
    /// trusted; the remote contract only defines those three values.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Accessible,
            2 => Self::Inaccessible,
            _ => Self::NoInformation,
        }
    }

    /// The GTFS integer code for this status
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::NoInformation => 0,
            Self::Accessible => 1,
            Self::Inaccessible => 2,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NoInformation => "unknown",
            Self::Accessible => "accessible",
            Self::Inaccessible => "not accessible",
        }
    }
}

impl fmt::Display for WheelchairAccessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
