//! Line framing and message codecs for the WheelBox serial links.
//!
//! This crate is intentionally I/O-free: it turns bytes into validated
//! frames and frames back into wire lines, and nothing else. All port
//! handling lives in `wheelbox-engine`, so everything here can be tested
//! without hardware.
//!
//! Two peers speak two different grammars over newline-terminated ASCII:
//!
//! - **Wheel node** (dash-delimited): 16 button states plus a reset bit in,
//!   an angle/pedal/telemetry status line out.
//! - **PC bridge** (mixed): a dash-delimited sensor report out, a
//!   semicolon-delimited six-field telemetry report in.
//!
//! Malformed input never produces an error the caller must abort on: the
//! wheel parser fails fast with a typed arity mismatch so the caller can
//! reuse its last accepted frame, and the telemetry parser degrades to
//! neutral per-field defaults.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]

pub mod framer;
pub mod report;
pub mod telemetry;
pub mod wheel;

pub use framer::{LINE_CAPACITY, LineFramer};
pub use report::{SensorReport, TelemetryTail, WheelStatus};
pub use telemetry::{Gear, LATERAL_G_NEUTRAL, TELEMETRY_FIELDS, TelemetryReport, parse_telemetry};
pub use wheel::{WHEEL_BUTTON_COUNT, WHEEL_FRAME_FIELDS, WheelFrame, parse_wheel_frame};
