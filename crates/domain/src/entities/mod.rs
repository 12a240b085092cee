//! Entities for the StopFinder domain

mod stop;

pub use stop::NearestStop;
