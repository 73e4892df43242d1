//! Per-cycle mutable state.

use wheelbox_calibration::{CalibrationState, RawSnapshot};
use wheelbox_ffb::SafetyCutout;
use wheelbox_protocol::{LineFramer, WheelFrame};

/// State carried from cycle to cycle.
///
/// Lifecycle: built once at startup from the boot sensor sample, mutated
/// only inside [`Engine::run_cycle`](crate::Engine::run_cycle), never
/// shared. Nothing here survives a power cycle.
#[derive(Debug)]
pub struct ControlCycleContext {
    /// Current zero-references.
    pub calibration: CalibrationState,
    /// Last accepted wheel frame, reused when a cycle's frame is
    /// malformed or late.
    pub last_wheel_frame: WheelFrame,
    /// Line assembly for the wheel link.
    pub wheel_framer: LineFramer,
    /// Line assembly for the PC link.
    pub pc_framer: LineFramer,
    /// Mechanical end-stop cutout.
    pub cutout: SafetyCutout,
    /// Completed cycles since boot.
    pub cycle_count: u64,
}

impl ControlCycleContext {
    /// Initializes cycle state from the boot-time sensor snapshot, which
    /// becomes the first zero-reference.
    pub fn new(boot: RawSnapshot) -> Self {
        Self {
            calibration: CalibrationState::boot(boot),
            last_wheel_frame: WheelFrame::default(),
            wheel_framer: LineFramer::new(),
            pc_framer: LineFramer::new(),
            cutout: SafetyCutout::default(),
            cycle_count: 0,
        }
    }
}
