//! Raw-to-calibrated axis conversion.

use serde::{Deserialize, Serialize};

/// Angle sensor scaling.
///
/// The rotary sensor counts ticks; the control loop works in degrees
/// relative to the current zero-reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleAxis {
    /// Sensor ticks per degree of wheel rotation.
    pub ticks_per_degree: f32,
    /// Mechanical travel limit in ticks; relative counts are clamped to
    /// `[-max_ticks, +max_ticks]`.
    pub max_ticks: i32,
}

impl Default for AngleAxis {
    fn default() -> Self {
        // 4 ticks/degree with 540° of travel to either side.
        Self {
            ticks_per_degree: 4.0,
            max_ticks: 2160,
        }
    }
}

impl AngleAxis {
    /// Converts a raw tick count into a calibrated reading.
    pub fn reading(&self, raw_ticks: i32, zero_offset: i32) -> AngleReading {
        let ticks = raw_ticks
            .saturating_sub(zero_offset)
            .clamp(-self.max_ticks, self.max_ticks);
        AngleReading {
            ticks,
            degrees: ticks as f32 / self.ticks_per_degree,
        }
    }
}

/// Wheel rotation relative to the zero-reference.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AngleReading {
    /// Relative tick count, clamped to the axis travel limit.
    pub ticks: i32,
    /// Rotation in degrees, positive to the right.
    pub degrees: f32,
}

/// Pedal potentiometer scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedalAxis {
    /// Raw ADC excursion corresponding to a fully pressed pedal.
    pub input_max: u16,
    /// Scaled values below this read as released. Keeps a slightly
    /// misadjusted rest offset from dragging the brake.
    pub deadzone: u8,
}

impl Default for PedalAxis {
    fn default() -> Self {
        // 10-bit ADC, full mechanical travel.
        Self {
            input_max: 1023,
            deadzone: 8,
        }
    }
}

impl PedalAxis {
    /// Converts a raw ADC sample into a calibrated reading.
    ///
    /// The excursion from the rest offset maps linearly onto `0..=255`;
    /// direction of travel does not matter, so a potentiometer wired
    /// backwards still works.
    pub fn reading(&self, raw: u16, offset: u16) -> PedalReading {
        let excursion = u32::from(raw.abs_diff(offset));
        let span = u32::from(self.input_max.max(1));
        let scaled = ((excursion * 255) / span).min(255) as u8;
        let scaled = if scaled < self.deadzone { 0 } else { scaled };
        PedalReading {
            raw,
            offset,
            scaled,
        }
    }
}

/// Normalized pedal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PedalReading {
    /// Raw ADC sample, `0..=1023` on the stock hardware.
    pub raw: u16,
    /// Rest offset the excursion was measured against.
    pub offset: u16,
    /// Normalized position, `0..=255`, zero inside the dead zone.
    pub scaled: u8,
}
