//! JSON handlers for the light state endpoints.
//!
//! These are the three endpoints the control panel consumes. The mutating
//! endpoints return the updated state as JSON; the panel fires its requests
//! without reading the response, but the body is useful for `curl` and tests.

use axum::Json;
use axum::extract::{Path, State};

use glimmer_app::ports::LightDriver;
use glimmer_domain::color::Rgb;
use glimmer_domain::light::LightState;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /state`
pub async fn get_state<D>(State(state): State<AppState<D>>) -> Json<LightState>
where
    D: LightDriver + Send + Sync + 'static,
{
    Json(state.light_service.state().await)
}

/// `POST /toggle_power`
///
/// Flips the power flag. No request body.
pub async fn toggle_power<D>(
    State(state): State<AppState<D>>,
) -> Result<Json<LightState>, ApiError>
where
    D: LightDriver + Send + Sync + 'static,
{
    let updated = state.light_service.toggle_power().await?;
    Ok(Json(updated))
}

/// `POST /set_color/{r}/{g}/{b}`
///
/// Components are path-encoded integers; anything outside 0–255 fails `u8`
/// extraction and is rejected with `400` before reaching the service.
pub async fn set_color<D>(
    State(state): State<AppState<D>>,
    Path((r, g, b)): Path<(u8, u8, u8)>,
) -> Result<Json<LightState>, ApiError>
where
    D: LightDriver + Send + Sync + 'static,
{
    let updated = state.light_service.set_color(Rgb::new(r, g, b)).await?;
    Ok(Json(updated))
}
