//! Shared error taxonomy for the WheelBox control core.
//!
//! The control loop favors availability over strict error reporting: most
//! failures degrade to a last-known-good or neutral value instead of
//! propagating. The types here exist so that the degradation *reasons* stay
//! typed and loggable rather than collapsing into booleans.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod frame;
pub mod link;

pub use config::{ConfigError, ConfigResult};
pub use frame::{FrameError, FrameResult};
pub use link::{LinkError, LinkResult};
