//! Axum router assembly.

use std::path::PathBuf;

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use glimmer_app::ports::LightDriver;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the light state endpoints at the root (the paths the control panel
/// requests relative to its own location). When `panel_dir` is given, any
/// other path falls through to the static panel assets, with `index.html`
/// served for the root. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<D>(state: AppState<D>, panel_dir: Option<PathBuf>) -> Router
where
    D: LightDriver + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/state", get(crate::api::get_state::<D>))
        .route("/toggle_power", post(crate::api::toggle_power::<D>))
        .route("/set_color/{r}/{g}/{b}", post(crate::api::set_color::<D>));

    let router = match panel_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
