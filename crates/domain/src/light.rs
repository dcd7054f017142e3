//! Light state — the full externally visible state of the light.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Power flag plus current color.
///
/// Serializes to the wire body `{"power": bool, "color": [r, g, b]}` consumed
/// by the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightState {
    pub power: bool,
    pub color: Rgb,
}

impl Default for LightState {
    /// Powered off, warm white — what the light shows on first power-up.
    fn default() -> Self {
        Self {
            power: false,
            color: Rgb::new(255, 147, 41),
        }
    }
}

impl LightState {
    /// Flip the power flag, leaving the color untouched.
    pub fn toggle_power(&mut self) {
        self.power = !self.power;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_powered_off_warm_white() {
        let state = LightState::default();
        assert!(!state.power);
        assert_eq!(state.color, Rgb::new(255, 147, 41));
    }

    #[test]
    fn should_toggle_power_without_touching_color() {
        let mut state = LightState {
            power: false,
            color: Rgb::new(10, 20, 30),
        };
        state.toggle_power();
        assert!(state.power);
        assert_eq!(state.color, Rgb::new(10, 20, 30));
        state.toggle_power();
        assert!(!state.power);
    }

    #[test]
    fn should_serialize_to_wire_body() {
        let state = LightState {
            power: true,
            color: Rgb::new(255, 128, 0),
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"power":true,"color":[255,128,0]}"#);
    }

    #[test]
    fn should_deserialize_from_wire_body() {
        let state: LightState = serde_json::from_str(r#"{"power":false,"color":[5,10,15]}"#).unwrap();
        assert!(!state.power);
        assert_eq!(state.color, Rgb::new(5, 10, 15));
    }
}
