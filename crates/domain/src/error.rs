//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`;
//! no `String` variants at the domain boundary.

use crate::color::ParseColorError;

/// Top-level error for glimmer operations.
#[derive(Debug, thiserror::Error)]
pub enum GlimmerError {
    /// A value failed domain validation (e.g. a malformed color string).
    #[error("validation error")]
    Validation(#[from] ParseColorError),
    /// The light driver could not apply the requested state.
    #[error("light driver error")]
    Driver(#[from] DriverError),
}

/// Error raised by a light driver while applying state.
#[derive(Debug, thiserror::Error)]
#[error("driver `{driver}`: {message}")]
pub struct DriverError {
    /// Name of the driver that failed.
    pub driver: &'static str,
    /// Human-readable failure description.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn should_convert_parse_error_into_validation_variant() {
        let err = "#nope".parse::<Rgb>().unwrap_err();
        let top: GlimmerError = err.into();
        assert!(matches!(top, GlimmerError::Validation(_)));
    }

    #[test]
    fn should_display_driver_name_and_message() {
        let err = DriverError {
            driver: "virtual",
            message: "strip unreachable".to_string(),
        };
        assert_eq!(err.to_string(), "driver `virtual`: strip unreachable");
    }
}
