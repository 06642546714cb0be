//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;

/// Shared application state.
///
/// Holds the validated network model, never mutated after startup, so
/// handlers can read it without synchronisation.
#[derive(Clone)]
pub struct AppState {
    /// The immutable metro network
    pub network: Arc<Network>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}
