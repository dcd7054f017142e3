//! Light service — use-cases for reading and mutating the light state.

use tokio::sync::Mutex;

use glimmer_domain::color::Rgb;
use glimmer_domain::error::GlimmerError;
use glimmer_domain::light::LightState;

use crate::ports::LightDriver;

/// Application service owning the authoritative light state.
///
/// All mutations go through this service so the in-memory state and the
/// driven hardware never diverge in ordering: the state mutex is held across
/// the driver call, serializing applications.
pub struct LightService<D> {
    driver: D,
    state: Mutex<LightState>,
}

impl<D: LightDriver> LightService<D> {
    /// Create a new service with the default power-up state.
    pub fn new(driver: D) -> Self {
        Self::with_state(driver, LightState::default())
    }

    /// Create a new service starting from the given state.
    pub fn with_state(driver: D, state: LightState) -> Self {
        Self {
            driver,
            state: Mutex::new(state),
        }
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> LightState {
        *self.state.lock().await
    }

    /// Flip the power flag and drive the light, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns [`GlimmerError::Driver`] when the driver fails to apply the
    /// state. The in-memory state is updated regardless (last-write-wins,
    /// the next successful application converges).
    pub async fn toggle_power(&self) -> Result<LightState, GlimmerError> {
        let mut state = self.state.lock().await;
        state.toggle_power();
        let snapshot = *state;
        tracing::debug!(power = snapshot.power, "toggling power");
        self.driver.apply(snapshot).await?;
        Ok(snapshot)
    }

    /// Change the color and drive the light, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns [`GlimmerError::Driver`] when the driver fails to apply the
    /// state. The in-memory state is updated regardless.
    pub async fn set_color(&self, color: Rgb) -> Result<LightState, GlimmerError> {
        let mut state = self.state.lock().await;
        state.color = color;
        let snapshot = *state;
        tracing::debug!(color = %color, "setting color");
        self.driver.apply(snapshot).await?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_domain::error::DriverError;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct RecordingDriver {
        applied: StdMutex<Vec<LightState>>,
        fail: bool,
    }

    impl LightDriver for RecordingDriver {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn apply(&self, state: LightState) -> Result<(), GlimmerError> {
            self.applied.lock().unwrap().push(state);
            if self.fail {
                return Err(DriverError {
                    driver: self.name(),
                    message: "simulated failure".to_string(),
                }
                .into());
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn should_start_from_default_state() {
        let service = LightService::new(RecordingDriver::default());
        assert_eq!(service.state().await, LightState::default());
    }

    #[tokio::test]
    async fn should_toggle_power_and_drive_light() {
        let service = LightService::new(RecordingDriver::default());

        let state = service.toggle_power().await.unwrap();
        assert!(state.power);

        let applied = service.driver.applied.lock().unwrap();
        assert_eq!(applied.len(), 1);
        assert!(applied[0].power);
    }

    #[tokio::test]
    async fn should_toggle_back_to_off() {
        let service = LightService::new(RecordingDriver::default());
        service.toggle_power().await.unwrap();
        let state = service.toggle_power().await.unwrap();
        assert!(!state.power);
    }

    #[tokio::test]
    async fn should_set_color_without_touching_power() {
        let service = LightService::new(RecordingDriver::default());

        let state = service.set_color(Rgb::new(255, 128, 0)).await.unwrap();
        assert_eq!(state.color, Rgb::new(255, 128, 0));
        assert!(!state.power);
        assert_eq!(service.state().await.color, Rgb::new(255, 128, 0));
    }

    #[tokio::test]
    async fn should_keep_mutation_when_driver_fails() {
        let driver = RecordingDriver {
            fail: true,
            ..RecordingDriver::default()
        };
        let service = LightService::new(driver);

        let result = service.toggle_power().await;
        assert!(matches!(result, Err(GlimmerError::Driver(_))));
        assert!(service.state().await.power);
    }
}
