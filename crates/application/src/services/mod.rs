//! Application services

pub mod message_formatter;
mod stop_finder;

pub use stop_finder::StopFinderService;
