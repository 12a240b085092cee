//! MBTA stop-directory integration for StopFinder
//!
//! Finds the transit stop nearest to a coordinate pair using the
//! [MBTA v3 API](https://api-v3.mbta.com) `GET /stops` endpoint with
//! distance sorting.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other
//! integration crates. [`StopClient`] defines the interface for nearest-stop
//! lookup, implemented by [`MbtaStopClient`].
//!
//! # External contract
//!
//! Proximity ordering is delegated entirely to the remote service: the
//! client requests `sort=distance` and takes the first entry. No local
//! distance computation or re-sorting is performed.

mod client;
mod config;
mod error;
mod models;

pub use client::{MbtaStopClient, StopClient};
pub use config::MbtaConfig;
pub use error::StopError;
pub use models::Stop;
