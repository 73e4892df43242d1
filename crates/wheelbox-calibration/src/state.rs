//! Zero-reference state and the re-zero trigger.

/// Rising-edge detector for the wheel node's reset bit.
///
/// The physical reset button holds the bit high for as long as it is
/// pressed; only the false→true transition may trigger a re-zero, which
/// also debounces the button implicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResetEdge {
    last: bool,
}

impl ResetEdge {
    /// Feeds the current level, returning `true` only on a rising edge.
    pub fn update(&mut self, level: bool) -> bool {
        let rising = level && !self.last;
        self.last = level;
        rising
    }
}

/// Raw sensor values captured at a single instant.
///
/// Passed into [`CalibrationState::observe`] so that a re-zero captures all
/// three offsets from the same sensor pass, never mixing pre- and
/// post-edge samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSnapshot {
    /// Raw angle sensor tick count.
    pub angle_ticks: i32,
    /// Raw accelerator ADC sample.
    pub accelerator: u16,
    /// Raw brake ADC sample.
    pub brake: u16,
}

/// Current zero-references for the angle sensor and both pedals.
///
/// Owned by the control-cycle orchestrator, mutated only between reading
/// the wheel frame and computing calibrated sensor values, and rebuilt
/// from the boot-time sensor snapshot on every power-up — nothing here is
/// persisted.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationState {
    zero_offset: i32,
    accelerator_offset: u16,
    brake_offset: u16,
    edge: ResetEdge,
}

impl CalibrationState {
    /// Initializes calibration from the first sensor pass after power-on.
    pub fn boot(snapshot: RawSnapshot) -> Self {
        Self {
            zero_offset: snapshot.angle_ticks,
            accelerator_offset: snapshot.accelerator,
            brake_offset: snapshot.brake,
            edge: ResetEdge::default(),
        }
    }

    /// Feeds this cycle's reset level and raw sensor snapshot.
    ///
    /// On a rising edge the snapshot becomes the new zero-reference for all
    /// three axes at once. Steady levels and falling edges change nothing.
    /// Returns `true` when a re-zero happened.
    pub fn observe(&mut self, reset_level: bool, snapshot: RawSnapshot) -> bool {
        if !self.edge.update(reset_level) {
            return false;
        }
        self.zero_offset = snapshot.angle_ticks;
        self.accelerator_offset = snapshot.accelerator;
        self.brake_offset = snapshot.brake;
        true
    }

    /// Angle sensor tick count treated as straight-ahead.
    pub fn zero_offset(&self) -> i32 {
        self.zero_offset
    }

    /// Accelerator rest offset in raw ADC counts.
    pub fn accelerator_offset(&self) -> u16 {
        self.accelerator_offset
    }

    /// Brake rest offset in raw ADC counts.
    pub fn brake_offset(&self) -> u16 {
        self.brake_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rising_edge_only() {
        let mut edge = ResetEdge::default();
        assert!(!edge.update(false));
        assert!(edge.update(true));
        assert!(!edge.update(true));
        assert!(!edge.update(false));
        assert!(edge.update(true));
    }

    #[test]
    fn test_boot_captures_snapshot() {
        let state = CalibrationState::boot(RawSnapshot {
            angle_ticks: 812,
            accelerator: 44,
            brake: 51,
        });
        assert_eq!(state.zero_offset(), 812);
        assert_eq!(state.accelerator_offset(), 44);
        assert_eq!(state.brake_offset(), 51);
    }

    #[test]
    fn test_held_reset_recalibrates_once() {
        let mut state = CalibrationState::boot(RawSnapshot::default());
        let levels = [false, true, true, true, false];
        let mut recalibrations = 0;

        for (i, &level) in levels.iter().enumerate() {
            let snapshot = RawSnapshot {
                angle_ticks: i as i32 * 100,
                accelerator: i as u16,
                brake: i as u16,
            };
            if state.observe(level, snapshot) {
                recalibrations += 1;
            }
        }

        assert_eq!(recalibrations, 1);
        // Captured at the edge (index 1), not at the later held-high samples.
        assert_eq!(state.zero_offset(), 100);
        assert_eq!(state.accelerator_offset(), 1);
    }

    #[test]
    fn test_release_and_press_again_recalibrates() {
        let mut state = CalibrationState::boot(RawSnapshot::default());
        assert!(state.observe(true, RawSnapshot::default()));
        assert!(!state.observe(false, RawSnapshot::default()));
        assert!(state.observe(
            true,
            RawSnapshot {
                angle_ticks: -40,
                accelerator: 9,
                brake: 12,
            }
        ));
        assert_eq!(state.zero_offset(), -40);
    }

    #[test]
    fn test_falling_edge_is_noop() {
        let mut state = CalibrationState::boot(RawSnapshot::default());
        assert!(state.observe(true, RawSnapshot {
            angle_ticks: 7,
            accelerator: 7,
            brake: 7,
        }));
        assert!(!state.observe(false, RawSnapshot {
            angle_ticks: 99,
            accelerator: 99,
            brake: 99,
        }));
        assert_eq!(state.zero_offset(), 7);
        assert_eq!(state.brake_offset(), 7);
    }
}
