//! Ports (interfaces) that infrastructure adapters implement

mod geocoding_port;
mod stop_port;

pub use geocoding_port::GeocodingPort;
pub use stop_port::StopDirectoryPort;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use stop_port::MockStopDirectoryPort;
