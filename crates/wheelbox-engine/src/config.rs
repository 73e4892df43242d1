//! Engine configuration.

use serde::{Deserialize, Serialize};
use wheelbox_calibration::{AngleAxis, PedalAxis};
use wheelbox_errors::{ConfigError, ConfigResult};

/// Tunables for the control loop.
///
/// Loaded from an optional JSON file by the CLI; every field has a default
/// matching the stock hardware, so a partial file only overrides what it
/// names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Angle sensor scaling.
    pub angle: AngleAxis,
    /// Pedal potentiometer scaling, shared by both pedals.
    pub pedals: PedalAxis,
    /// Bounded wait for a complete wheel-node frame, per cycle.
    pub wheel_timeout_ms: u64,
    /// Bounded wait for a complete PC telemetry line, per cycle.
    pub pc_timeout_ms: u64,
    /// Sleep between polls while a link is idle.
    pub poll_interval_us: u64,
    /// Rig without pedal potentiometers: local effort is forced to full
    /// so the wheel still self-centers at strength.
    pub pedal_less_rig: bool,
    /// Brake level (normalized `0..=255`) at which the brake pedal starts
    /// vibrating even without rumble; approximates ABS feedback at 80%.
    pub brake_rumble_threshold: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            angle: AngleAxis::default(),
            pedals: PedalAxis::default(),
            wheel_timeout_ms: 500,
            pc_timeout_ms: 500,
            poll_interval_us: 250,
            pedal_less_rig: false,
            brake_rumble_threshold: 204,
        }
    }
}

impl EngineConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] naming the first
    /// out-of-range field.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.angle.ticks_per_degree > 0.0) {
            return Err(ConfigError::invalid(
                "angle.ticks_per_degree must be greater than 0",
            ));
        }
        if self.angle.max_ticks <= 0 {
            return Err(ConfigError::invalid(
                "angle.max_ticks must be greater than 0",
            ));
        }
        if self.pedals.input_max == 0 {
            return Err(ConfigError::invalid(
                "pedals.input_max must be greater than 0",
            ));
        }
        if self.wheel_timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "wheel_timeout_ms must be greater than 0",
            ));
        }
        if self.pc_timeout_ms == 0 {
            return Err(ConfigError::invalid("pc_timeout_ms must be greater than 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = EngineConfig {
            wheel_timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_angle_scale_rejected() {
        let mut config = EngineConfig::default();
        config.angle.ticks_per_degree = 0.0;
        assert!(config.validate().is_err());

        config.angle.ticks_per_degree = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"pedal_less_rig": true, "pc_timeout_ms": 250}"#)
                .expect("partial config should parse");
        assert!(config.pedal_less_rig);
        assert_eq!(config.pc_timeout_ms, 250);
        assert_eq!(config.wheel_timeout_ms, 500);
        assert_eq!(config.pedals.input_max, 1023);
    }
}
