//! HTTP client wrapping `gloo-net` for calls to the device endpoints.
//!
//! Paths are relative (`./state`, not `/state`) so the panel works no matter
//! where it is mounted. The mutating calls are fire-and-forget: the device
//! confirms changes through the next state poll, not through these responses.

use gloo_net::http::Request;

use glimmer_domain::color::Rgb;
use glimmer_domain::light::LightState;

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Fetch the current device state.
pub async fn fetch_state() -> Result<LightState, ApiError> {
    let resp = Request::get("./state").send().await?;
    Ok(resp.json::<LightState>().await?)
}

/// Ask the device to flip its power flag. No body, response ignored.
pub async fn toggle_power() -> Result<(), ApiError> {
    Request::post("./toggle_power").send().await?;
    Ok(())
}

/// Ask the device to change color. Components ride in the path, response
/// ignored.
pub async fn set_color(color: Rgb) -> Result<(), ApiError> {
    Request::post(&set_color_path(color)).send().await?;
    Ok(())
}

/// Relative request path for a color change, one decimal component per
/// segment.
fn set_color_path(color: Rgb) -> String {
    format!("./set_color/{}/{}/{}", color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_encode_color_components_as_decimal_path_segments() {
        let color: Rgb = "#ff8000".parse().unwrap();
        assert_eq!(set_color_path(color), "./set_color/255/128/0");
    }

    #[test]
    fn should_encode_zero_components() {
        assert_eq!(set_color_path(Rgb::new(0, 0, 0)), "./set_color/0/0/0");
    }
}
