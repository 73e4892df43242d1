//! Dual-enable H-bridge pin translation.
//!
//! The motor sits on a dual half-bridge driver with one PWM line per
//! rotation direction and a pair of enable lines. Stopping and disabling
//! are different states: a stop holds both PWM lines at zero with the
//! enables energized, while a disable drops the enables and removes power
//! entirely.

use crate::pwm::{Direction, MotorOutput};

/// Pin-level state for the bridge driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgePins {
    /// Duty on the clockwise PWM line.
    pub right_pwm: u8,
    /// Duty on the counter-clockwise PWM line.
    pub left_pwm: u8,
    /// Level of both enable lines.
    pub enabled: bool,
}

impl BridgePins {
    /// Idle state at power-on: enabled, both PWM lines low.
    pub fn idle() -> Self {
        Self {
            right_pwm: 0,
            left_pwm: 0,
            enabled: true,
        }
    }
}

impl From<MotorOutput> for BridgePins {
    fn from(output: MotorOutput) -> Self {
        match output {
            MotorOutput::Disabled => Self {
                right_pwm: 0,
                left_pwm: 0,
                enabled: false,
            },
            MotorOutput::Command(cmd) => {
                let (right_pwm, left_pwm) = match cmd.direction {
                    Direction::Right => (cmd.pwm, 0),
                    Direction::Left => (0, cmd.pwm),
                    Direction::Stop => (0, 0),
                };
                Self {
                    right_pwm,
                    left_pwm,
                    enabled: true,
                }
            }
        }
    }
}
