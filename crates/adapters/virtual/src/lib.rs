//! # glimmer-adapter-virtual
//!
//! Virtual light driver for testing and demonstration. Applying a state logs
//! it and records it in memory instead of driving an LED strip; the recorded
//! state lets tests assert what the hardware would be showing.
//!
//! ## Dependency rule
//!
//! Depends on `glimmer-app` (port traits) and `glimmer-domain` only.

use std::sync::Mutex;

use glimmer_app::ports::LightDriver;
use glimmer_domain::error::GlimmerError;
use glimmer_domain::light::LightState;

/// A simulated light that remembers the last state applied to it.
#[derive(Debug, Default)]
pub struct VirtualLight {
    applied: Mutex<Option<LightState>>,
}

impl VirtualLight {
    /// The last state applied through the driver, if any.
    #[must_use]
    pub fn last_applied(&self) -> Option<LightState> {
        *self
            .applied
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl LightDriver for VirtualLight {
    fn name(&self) -> &'static str {
        "virtual"
    }

    async fn apply(&self, state: LightState) -> Result<(), GlimmerError> {
        tracing::info!(power = state.power, color = %state.color, "virtual light updated");
        *self
            .applied
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_domain::color::Rgb;

    #[test]
    fn should_start_with_nothing_applied() {
        let light = VirtualLight::default();
        assert_eq!(light.last_applied(), None);
    }

    #[tokio::test]
    async fn should_record_last_applied_state() {
        let light = VirtualLight::default();

        let state = LightState {
            power: true,
            color: Rgb::new(255, 128, 0),
        };
        light.apply(state).await.unwrap();

        assert_eq!(light.last_applied(), Some(state));
    }

    #[tokio::test]
    async fn should_overwrite_previous_application() {
        let light = VirtualLight::default();

        let first = LightState {
            power: true,
            color: Rgb::new(1, 2, 3),
        };
        let second = LightState {
            power: false,
            color: Rgb::new(4, 5, 6),
        };
        light.apply(first).await.unwrap();
        light.apply(second).await.unwrap();

        assert_eq!(light.last_applied(), Some(second));
    }

    #[test]
    fn should_report_virtual_as_name() {
        let light = VirtualLight::default();
        assert_eq!(light.name(), "virtual");
    }
}
