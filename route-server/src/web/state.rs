//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::Network;
use crate::palette::Palette;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Read-only after startup; every request plans against its own network
/// (or this default) with no state carried between requests.
#[derive(Clone)]
pub struct AppState {
    /// Route search policy
    pub config: Arc<SearchConfig>,

    /// Line colors
    pub palette: Arc<Palette>,

    /// Network used when a request does not supply one
    pub network: Arc<Network>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(config: SearchConfig, palette: Palette, network: Network) -> Self {
        Self {
            config: Arc::new(config),
            palette: Arc::new(palette),
            network: Arc::new(network),
        }
    }
}
