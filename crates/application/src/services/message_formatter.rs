//! Result message formatting
//!
//! Pure functions turning a lookup outcome into the user-facing sentence.
//! Total over all defined outcomes: the three accessibility codes, the
//! no-nearby-station case, the unknown-place case, and service failure.

use domain::entities::NearestStop;
use domain::value_objects::WheelchairAccessibility;

/// Sentence for a lookup that found no station near the coordinates
///
/// A valid outcome, deliberately distinct from [`unavailable_message`].
pub const NO_NEARBY_STATION: &str = "There are no close stations nearby.";

/// Sentence for a lookup that failed because an external service did
pub const SERVICE_UNAVAILABLE: &str = "Unable to determine the nearest station right now.";

/// Format a completed lookup outcome as one sentence
#[must_use]
pub fn nearest_stop_message(outcome: Option<&NearestStop>) -> String {
    let Some(stop) = outcome else {
        return NO_NEARBY_STATION.to_string();
    };

    let name = &stop.name;
    match stop.accessibility {
        WheelchairAccessibility::Accessible => {
            format!("The nearest station is {name} and it is wheelchair accessible.")
        }
        WheelchairAccessibility::Inaccessible => {
            format!("The nearest station is {name} and it is not wheelchair accessible.")
        }
        WheelchairAccessibility::NoInformation => format!(
            "The nearest station is {name} and there is no information on whether or not it is wheelchair accessible."
        ),
    }
}

/// Sentence for a place name the geocoder could not resolve
#[must_use]
pub fn place_not_found_message(place: &str) -> String {
    format!("Could not find a place called \"{place}\".")
}

/// Sentence for any service failure during the lookup
#[must_use]
pub fn unavailable_message() -> String {
    SERVICE_UNAVAILABLE.to_string()
}
