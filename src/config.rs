use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::input::{
    MouseMode, JOYSTICK_DEAD_ZONE, JOYSTICK_SPEED_DOWNSCALER, JOYSTICK_X_AXIS_CENTER,
    JOYSTICK_Y_AXIS_CENTER, POWER_BUTTON_LONG_PRESS_DURATION, POWER_BUTTON_SHORT_PRESS_DURATION,
};

/// Press thresholds for the power button, in microseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerButtonTimings {
    pub short_press_us: u32,
    pub long_press_us: u32,
}

impl Default for PowerButtonTimings {
    fn default() -> Self {
        PowerButtonTimings {
            short_press_us: POWER_BUTTON_SHORT_PRESS_DURATION,
            long_press_us: POWER_BUTTON_LONG_PRESS_DURATION,
        }
    }
}

/// Raw ADC calibration of the analog sticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoystickCalibration {
    pub x_center: u16,
    pub y_center: u16,
    pub dead_zone: u16,
    pub speed_downscaler: u16,
}

impl Default for JoystickCalibration {
    fn default() -> Self {
        JoystickCalibration {
            x_center: JOYSTICK_X_AXIS_CENTER,
            y_center: JOYSTICK_Y_AXIS_CENTER,
            dead_zone: JOYSTICK_DEAD_ZONE,
            speed_downscaler: JOYSTICK_SPEED_DOWNSCALER,
        }
    }
}

/// Everything the daemon lets a user tune. Missing keys fall back to the built-in constants.
///
/// ```toml
/// mouse_mode = "left-joystick"
///
/// [power_button]
/// long_press_us = 3000000
///
/// [joystick]
/// dead_zone = 400
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    pub mouse_mode: MouseMode,
    pub power_button: PowerButtonTimings,
    pub joystick: JoystickCalibration,
}

impl DaemonConfig {
    pub fn from_toml_str(s: &str) -> Result<DaemonConfig> {
        let config: DaemonConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<DaemonConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = DaemonConfig::from_toml_str(&content)?;
        debug!("Loaded config from {:?}: {:?}", path, config);
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let timings = &self.power_button;
        if timings.short_press_us >= timings.long_press_us {
            return Err(Error::InvalidConfig(format!(
                "power_button.short_press_us ({}) must be below long_press_us ({})",
                timings.short_press_us, timings.long_press_us
            )));
        }
        if self.joystick.speed_downscaler == 0 {
            return Err(Error::InvalidConfig(
                "joystick.speed_downscaler must not be zero".to_owned(),
            ));
        }
        Ok(())
    }
}
