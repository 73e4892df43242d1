//! Logging backends for the actuator ports.
//!
//! On a development host there is no H-bridge to drive, so the motor and
//! pedal-rumble outputs are rendered as structured log events instead.
//! Both backends log on change only, compared against the previous value.

use tracing::{debug, warn};

use wheelbox_engine::{MotorDriver, PedalRumble};
use wheelbox_ffb::{BridgePins, MotorOutput};

/// Motor driver that logs each distinct output as its bridge pin state.
#[derive(Debug, Default)]
pub struct LoggingMotor {
    last: Option<MotorOutput>,
}

impl MotorDriver for LoggingMotor {
    fn apply(&mut self, output: MotorOutput) {
        if self.last == Some(output) {
            return;
        }
        let pins = BridgePins::from(output);
        match output {
            MotorOutput::Disabled => warn!("motor driver disabled (end-stop cutout)"),
            MotorOutput::Command(_) => {
                debug!(
                    right_pwm = pins.right_pwm,
                    left_pwm = pins.left_pwm,
                    "motor command"
                );
            }
        }
        self.last = Some(output);
    }
}

/// Pedal rumble sink that logs transitions.
#[derive(Debug, Default)]
pub struct LoggingRumble {
    brake: bool,
    throttle: bool,
}

impl PedalRumble for LoggingRumble {
    fn set_brake(&mut self, vibrate: bool) {
        if vibrate != self.brake {
            debug!(vibrate, "brake pedal rumble");
            self.brake = vibrate;
        }
    }

    fn set_throttle(&mut self, vibrate: bool) {
        if vibrate != self.throttle {
            debug!(vibrate, "accelerator pedal rumble");
            self.throttle = vibrate;
        }
    }
}
