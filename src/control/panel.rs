use crate::constants::{ANGLE_CHOICES, SPEED_MAX, SPEED_MIN};
use crate::errors::SimulationError;

use super::scenario::ScenarioConfig;

/// State of the user-facing control surface: active scenario, launch angle
/// from the fixed menu, speed slider, and the launch flag. The engine reads
/// this each tick; it never mutates it.
pub struct ControlPanel {
    scenario: &'static ScenarioConfig,
    angle_deg: u32,
    speed: f64,
    launching: bool,
}

impl ControlPanel {
    pub fn new() -> Self {
        ControlPanel {
            scenario: &ScenarioConfig::all()[0],
            angle_deg: 45,
            speed: 3.0,
            launching: false,
        }
    }

    pub fn select_scenario(&mut self, id: u8) -> Result<(), SimulationError> {
        self.scenario = ScenarioConfig::get(id)?;
        Ok(())
    }

    pub fn set_angle(&mut self, degrees: u32) -> Result<(), SimulationError> {
        if !ANGLE_CHOICES.contains(&degrees) {
            return Err(SimulationError::ControlError(format!(
                "angle {}° is not on the menu {:?}",
                degrees, ANGLE_CHOICES
            )));
        }
        self.angle_deg = degrees;
        Ok(())
    }

    /// Slider input: clamped to the supported band and quantized to one
    /// decimal, never rejected.
    pub fn set_speed(&mut self, speed: f64) {
        let clamped = if speed.is_finite() {
            speed.clamp(SPEED_MIN, SPEED_MAX)
        } else {
            SPEED_MIN
        };
        self.speed = (clamped * 10.0).round() / 10.0;
    }

    pub fn fire(&mut self) {
        self.launching = true;
    }

    pub fn stop(&mut self) {
        self.launching = false;
    }

    pub fn is_launching(&self) -> bool {
        self.launching
    }

    pub fn scenario(&self) -> &'static ScenarioConfig {
        self.scenario
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle_deg as f64
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}
