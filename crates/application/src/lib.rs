//! Application layer for StopFinder
//!
//! Orchestrates the two-hop lookup: geocode a place name, then find the
//! nearest transit stop. Depends on the domain layer and on ports that the
//! infrastructure layer implements with concrete API clients.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::StopFinderService;
pub use services::message_formatter;
