//! Outbound line encoders.
//!
//! The Box emits one line per peer per cycle: the full sensor report to the
//! PC bridge and a condensed status line to the wheel node's dashboard.

use crate::telemetry::Gear;
use crate::wheel::WHEEL_BUTTON_COUNT;

/// Marker sent in place of the telemetry tail when no report arrived.
pub const NO_TELEMETRY_TAIL: &str = "NONE";

/// The Box→PC sensor report.
///
/// Dash-delimited: `degrees-acc-brk-b0-...-b15-handbrake-gx-gy`, with the
/// angle formatted to one decimal. The button block echoes the wheel
/// node's last accepted frame so the bridge sees buttons and axes in one
/// consistent snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReport {
    /// Calibrated wheel angle in degrees, positive to the right.
    pub degrees: f32,
    /// Accelerator pedal, normalized `0..=255`.
    pub accelerator: u8,
    /// Brake pedal, normalized `0..=255`.
    pub brake: u8,
    /// Echo of the wheel node's button states.
    pub buttons: [bool; WHEEL_BUTTON_COUNT],
    /// Handbrake lever state.
    pub handbrake: bool,
    /// Shifter gate X position, `0..=255` with 127 at center.
    pub shifter_x: u8,
    /// Shifter gate Y position, `0..=255` with 127 at center.
    pub shifter_y: u8,
}

impl Default for SensorReport {
    fn default() -> Self {
        Self {
            degrees: 0.0,
            accelerator: 0,
            brake: 0,
            buttons: [false; WHEEL_BUTTON_COUNT],
            handbrake: false,
            shifter_x: 127,
            shifter_y: 127,
        }
    }
}

impl SensorReport {
    /// Formats the report as its wire line, without the terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use wheelbox_protocol::SensorReport;
    ///
    /// let report = SensorReport {
    ///     degrees: -12.34,
    ///     accelerator: 200,
    ///     ..Default::default()
    /// };
    /// assert!(report.encode().starts_with("-12.3-200-0-"));
    /// ```
    pub fn encode(&self) -> String {
        let mut line = format!("{:.1}-{}-{}", self.degrees, self.accelerator, self.brake);
        for &pressed in &self.buttons {
            line.push('-');
            line.push(if pressed { '1' } else { '0' });
        }
        line.push('-');
        line.push(if self.handbrake { '1' } else { '0' });
        line.push_str(&format!("-{}-{}", self.shifter_x, self.shifter_y));
        line
    }
}

/// Telemetry subset forwarded to the wheel node's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryTail {
    /// Gearbox state for the gear indicator.
    pub gear: Gear,
    /// Vehicle speed in km/h.
    pub speed_kph: u16,
    /// Rev-limit percentage for the shift-light bar.
    pub rpm_percent: u8,
}

/// The Box→Wheel status line.
///
/// Pipe-delimited header with a semicolon-delimited telemetry tail:
/// `degrees|acc|brk|gear;speed;rpmPercent`, or `degrees|acc|brk|NONE`
/// when no telemetry is available this cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelStatus {
    /// Calibrated wheel angle in degrees.
    pub degrees: f32,
    /// Accelerator pedal, normalized `0..=255`.
    pub accelerator: u8,
    /// Brake pedal, normalized `0..=255`.
    pub brake: u8,
    /// Telemetry tail, absent when the PC link produced nothing.
    pub telemetry: Option<TelemetryTail>,
}

impl WheelStatus {
    /// Formats the status as its wire line, without the terminator.
    pub fn encode(&self) -> String {
        let head = format!("{:.1}|{}|{}|", self.degrees, self.accelerator, self.brake);
        match self.telemetry {
            Some(tail) => format!(
                "{head}{};{};{}",
                tail.gear, tail.speed_kph, tail.rpm_percent
            ),
            None => format!("{head}{NO_TELEMETRY_TAIL}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_report_layout() {
        let mut report = SensorReport {
            degrees: 30.0,
            accelerator: 128,
            brake: 0,
            handbrake: true,
            ..Default::default()
        };
        report.buttons[0] = true;
        report.buttons[15] = true;

        let line = report.encode();
        assert_eq!(line, "30.0-128-0-1-0-0-0-0-0-0-0-0-0-0-0-0-0-0-1-1-127-127");

        // The PC bridge counts on the dash arity: 3 header fields, 16
        // buttons, handbrake, gx, gy.
        assert_eq!(line.split('-').count(), 22);
    }

    #[test]
    fn test_sensor_report_negative_angle_one_decimal() {
        let report = SensorReport {
            degrees: -449.96,
            ..Default::default()
        };
        assert!(report.encode().starts_with("-450.0-0-0-"));
    }

    #[test]
    fn test_wheel_status_with_telemetry() {
        let status = WheelStatus {
            degrees: -5.5,
            accelerator: 0,
            brake: 255,
            telemetry: Some(TelemetryTail {
                gear: Gear::Forward(2),
                speed_kph: 88,
                rpm_percent: 64,
            }),
        };
        assert_eq!(status.encode(), "-5.5|0|255|2;88;64");
    }

    #[test]
    fn test_wheel_status_without_telemetry() {
        let status = WheelStatus {
            degrees: 0.0,
            accelerator: 10,
            brake: 0,
            telemetry: None,
        };
        assert_eq!(status.encode(), "0.0|10|0|NONE");
    }

    #[test]
    fn test_wheel_status_neutral_gear_token() {
        let status = WheelStatus {
            degrees: 0.0,
            accelerator: 0,
            brake: 0,
            telemetry: Some(TelemetryTail {
                gear: Gear::Neutral,
                speed_kph: 0,
                rpm_percent: 0,
            }),
        };
        assert_eq!(status.encode(), "0.0|0|0|N;0;0");
    }
}
