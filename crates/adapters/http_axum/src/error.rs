//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use glimmer_domain::error::GlimmerError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`GlimmerError`] to an HTTP response with appropriate status code.
pub struct ApiError(GlimmerError);

impl From<GlimmerError> for ApiError {
    fn from(err: GlimmerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            GlimmerError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            GlimmerError::Driver(err) => {
                tracing::error!(error = %err, "driver error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
