//! Control-cycle orchestration for the WheelBox force-feedback core.
//!
//! The engine owns the two serial peers, the local sensors, the motor
//! driver, and all per-cycle state, and runs the fixed sequence once per
//! cycle:
//!
//! 1. receive and validate a wheel-node frame (bounded wait, degrade to
//!    the last accepted frame),
//! 2. run reset-edge detection and recalibrate if the edge fired,
//! 3. read and normalize the local sensors,
//! 4. report sensors to the PC bridge,
//! 5. receive telemetry (bounded wait, degrade to neutral defaults),
//! 6. fuse effort and drive the motor through the safety cutout,
//! 7. update the pedal vibration outputs,
//! 8. forward a condensed status line to the wheel node.
//!
//! There is exactly one thread of control: a cycle runs to completion
//! before the next begins, and nothing outside the engine holds a
//! reference to its state.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod acquire;
pub mod config;
pub mod context;
pub mod cycle;
pub mod harness;
pub mod ports;

pub use config::EngineConfig;
pub use context::ControlCycleContext;
pub use cycle::{CycleReport, Engine};
pub use ports::{LinkPort, MotorDriver, PedalRumble, SensorBank, SensorSample};
