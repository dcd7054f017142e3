//! Shared application state for axum handlers.

use std::sync::Arc;

use glimmer_app::ports::LightDriver;
use glimmer_app::services::light_service::LightService;

/// Application state shared across all axum handlers.
///
/// Generic over the driver type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the driver itself does not need to be `Clone` —
/// only the `Arc` wrapper is cloned.
pub struct AppState<D> {
    /// The light service owning the authoritative state.
    pub light_service: Arc<LightService<D>>,
}

impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            light_service: Arc::clone(&self.light_service),
        }
    }
}

impl<D> AppState<D>
where
    D: LightDriver + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(light_service: LightService<D>) -> Self {
        Self {
            light_service: Arc::new(light_service),
        }
    }
}
