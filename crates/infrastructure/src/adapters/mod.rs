//! Adapters implementing application ports with integration clients

mod geocoding_adapter;
mod stop_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use stop_adapter::StopDirectoryAdapter;
