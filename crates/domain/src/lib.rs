//! Domain layer for StopFinder
//!
//! Contains the core value objects and entities for nearest-stop lookup.
//! This layer has no external dependencies and defines the ubiquitous language.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
