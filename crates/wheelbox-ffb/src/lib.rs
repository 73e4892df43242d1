//! Effort fusion and PWM mapping for the WheelBox force-feedback motor.
//!
//! Two force models compete for the motor every cycle: the legacy
//! pedal-resistance model (press harder, steer heavier) and the simulator
//! model built from speed, lateral acceleration, and rumble impulses. This
//! crate fuses them into one bounded effort and turns (angle, effort) into
//! a self-centering motor command with a hard mechanical cutout.
//!
//! Everything here is a pure function of its inputs plus one two-state
//! cutout machine; no I/O, no allocation. The orchestrator in
//! `wheelbox-engine` is the only caller.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod bridge;
pub mod fusion;
pub mod pwm;

pub use bridge::BridgePins;
pub use fusion::{
    EffortInputs, G_DEADBAND, G_LOAD_MAX, SPEED_KPH_CAP, SPEED_LOAD_MAX, SPEED_LOAD_MIN, fuse,
};
pub use pwm::{
    CUTOUT_DEGREES, Direction, MotorCommand, MotorOutput, PRODUCT_MAX, PWM_FLOOR, PWM_MAX, PWM_MIN,
    PWM_THRESHOLD_DEG, SafetyCutout, centering_command,
};
