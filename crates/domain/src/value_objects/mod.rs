//! Value objects for the StopFinder domain

mod accessibility;
mod geo_location;

pub use accessibility::WheelchairAccessibility;
pub use geo_location::{GeoLocation, InvalidCoordinates};
