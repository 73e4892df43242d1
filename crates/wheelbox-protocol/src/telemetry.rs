//! Simulator telemetry report codec.
//!
//! The PC bridge condenses game telemetry into one semicolon-delimited line
//! per cycle: `rpm;gear;speed;lateralG;rumble;rpmPercent`. The bridge emits
//! `0;N;0;127;0;0` when no game is selected, which fuses identically to a
//! missing report.

use std::fmt;

/// Fields in a telemetry report line.
pub const TELEMETRY_FIELDS: usize = 6;

/// Lateral-G wire value meaning "no lateral acceleration".
///
/// The bridge maps signed lateral G onto `0..=255` with 127 at rest.
pub const LATERAL_G_NEUTRAL: u8 = 127;

/// Gearbox state as displayed on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gear {
    /// Reverse, transmitted as `R`.
    Reverse,
    /// Neutral, transmitted as `N`.
    #[default]
    Neutral,
    /// Forward gear number, transmitted as its decimal digits.
    Forward(u8),
}

impl Gear {
    /// Parses a gear token.
    ///
    /// `0` and `-1` are accepted as aliases for neutral and reverse because
    /// some bridge versions sent numeric gears before the lettered tokens.
    /// Returns `None` for anything unrecognized.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "N" | "n" | "0" => Some(Gear::Neutral),
            "R" | "r" | "-1" => Some(Gear::Reverse),
            digits => digits.parse::<u8>().ok().map(Gear::Forward),
        }
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gear::Reverse => write!(f, "R"),
            Gear::Neutral => write!(f, "N"),
            Gear::Forward(n) => write!(f, "{n}"),
        }
    }
}

/// One telemetry report from the PC bridge.
///
/// # Examples
///
/// ```
/// use wheelbox_protocol::{TelemetryReport, parse_telemetry};
///
/// let report = parse_telemetry("7200;3;148;190;0;53").unwrap();
/// assert_eq!(report.speed_kph, 148);
/// assert_eq!(parse_telemetry(&report.encode()), Some(report));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryReport {
    /// Engine speed in revolutions per minute.
    pub rpm: u32,
    /// Gearbox state.
    pub gear: Gear,
    /// Vehicle speed in km/h.
    pub speed_kph: u16,
    /// Lateral acceleration, `0..=255` with [`LATERAL_G_NEUTRAL`] at rest.
    pub lateral_g: u8,
    /// Curb/collision impulse strength, `0..=255`.
    pub rumble: u8,
    /// Engine speed as a percentage of the game's rev limit, `0..=100`.
    pub rpm_percent: u8,
}

impl Default for TelemetryReport {
    /// The neutral report: stationary, no lateral load, no rumble.
    fn default() -> Self {
        Self {
            rpm: 0,
            gear: Gear::Neutral,
            speed_kph: 0,
            lateral_g: LATERAL_G_NEUTRAL,
            rumble: 0,
            rpm_percent: 0,
        }
    }
}

impl TelemetryReport {
    /// Formats the report as its wire line, without the terminator.
    pub fn encode(&self) -> String {
        format!(
            "{};{};{};{};{};{}",
            self.rpm, self.gear, self.speed_kph, self.lateral_g, self.rumble, self.rpm_percent
        )
    }
}

/// Parses one PC-bridge line into a [`TelemetryReport`].
///
/// Returns `None` when fewer than [`TELEMETRY_FIELDS`] non-empty fields are
/// present; the cycle then runs without telemetry. A present but
/// non-numeric field falls back to its neutral default alone, so one
/// corrupted field does not discard the rest of the report.
pub fn parse_telemetry(line: &str) -> Option<TelemetryReport> {
    let fields: Vec<&str> = line.split(';').map(str::trim).collect();
    if fields.len() < TELEMETRY_FIELDS || fields.iter().take(TELEMETRY_FIELDS).any(|f| f.is_empty())
    {
        return None;
    }

    Some(TelemetryReport {
        rpm: fields[0].parse().unwrap_or(0),
        gear: Gear::from_token(fields[1]).unwrap_or_default(),
        speed_kph: fields[2].parse().unwrap_or(0),
        lateral_g: fields[3].parse().unwrap_or(LATERAL_G_NEUTRAL),
        rumble: fields[4].parse().unwrap_or(0),
        rpm_percent: fields[5].parse().unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_report() {
        let report = parse_telemetry("13250;4;287;40;180;98").unwrap();
        assert_eq!(report.rpm, 13250);
        assert_eq!(report.gear, Gear::Forward(4));
        assert_eq!(report.speed_kph, 287);
        assert_eq!(report.lateral_g, 40);
        assert_eq!(report.rumble, 180);
        assert_eq!(report.rpm_percent, 98);
    }

    #[test]
    fn test_parse_idle_bridge_line() {
        let report = parse_telemetry("0;N;0;127;0;0").unwrap();
        assert_eq!(report, TelemetryReport::default());
    }

    #[test]
    fn test_parse_reverse_gear() {
        let report = parse_telemetry("900;R;4;127;0;10").unwrap();
        assert_eq!(report.gear, Gear::Reverse);
    }

    #[test]
    fn test_short_line_is_no_telemetry() {
        assert_eq!(parse_telemetry("7000;3;120;127;0"), None);
        assert_eq!(parse_telemetry(""), None);
        assert_eq!(parse_telemetry("garbage"), None);
    }

    #[test]
    fn test_empty_field_is_no_telemetry() {
        assert_eq!(parse_telemetry("7000;;120;127;0;50"), None);
    }

    #[test]
    fn test_corrupt_field_falls_back_alone() {
        let report = parse_telemetry("7000;3;1x0;127;40;50").unwrap();
        assert_eq!(report.speed_kph, 0);
        assert_eq!(report.rumble, 40);
        assert_eq!(report.rpm, 7000);
    }

    #[test]
    fn test_corrupt_lateral_g_falls_back_to_neutral() {
        let report = parse_telemetry("7000;3;120;999;40;50").unwrap();
        assert_eq!(report.lateral_g, LATERAL_G_NEUTRAL);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let report = parse_telemetry("7000;3;120;127;0;50;junk").unwrap();
        assert_eq!(report.rpm_percent, 50);
    }

    #[test]
    fn test_round_trip() {
        let report = TelemetryReport {
            rpm: 8421,
            gear: Gear::Forward(6),
            speed_kph: 301,
            lateral_g: 12,
            rumble: 255,
            rpm_percent: 77,
        };
        assert_eq!(parse_telemetry(&report.encode()), Some(report));
    }

    #[test]
    fn test_gear_tokens() {
        assert_eq!(Gear::from_token("N"), Some(Gear::Neutral));
        assert_eq!(Gear::from_token("R"), Some(Gear::Reverse));
        assert_eq!(Gear::from_token("0"), Some(Gear::Neutral));
        assert_eq!(Gear::from_token("-1"), Some(Gear::Reverse));
        assert_eq!(Gear::from_token("7"), Some(Gear::Forward(7)));
        assert_eq!(Gear::from_token("?"), None);
    }
}
