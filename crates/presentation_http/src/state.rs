//! Application state shared across handlers

use std::sync::Arc;

use application::StopFinderService;

use crate::templates::Templates;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Nearest-stop lookup service
    pub stop_finder: Arc<StopFinderService>,
    /// Compiled page templates
    pub templates: Arc<Templates>,
}
