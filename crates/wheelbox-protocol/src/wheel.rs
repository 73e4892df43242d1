//! Wheel-node frame parsing.
//!
//! The wheel node reports its 4×4 button matrix and a recalibration request
//! once per cycle as a dash-joined line: `b0-b1-...-b15-reset`.

use wheelbox_errors::{FrameError, FrameResult};

/// Buttons scanned by the wheel node's key matrix.
pub const WHEEL_BUTTON_COUNT: usize = 16;

/// Fields in a wheel frame: the button states plus the reset bit.
pub const WHEEL_FRAME_FIELDS: usize = WHEEL_BUTTON_COUNT + 1;

/// One validated frame from the wheel node.
///
/// Field values are tolerant: exactly `"1"` reads as set, anything else as
/// clear, so a single corrupted character cannot spuriously trigger a
/// recalibration. Structure is not tolerant: the field count must match
/// [`WHEEL_FRAME_FIELDS`] or the whole line is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelFrame {
    /// Button states, index 0 through 15 in matrix scan order.
    pub buttons: [bool; WHEEL_BUTTON_COUNT],
    /// Recalibration request level. Edge detection is the caller's job.
    pub reset: bool,
}

impl Default for WheelFrame {
    fn default() -> Self {
        Self {
            buttons: [false; WHEEL_BUTTON_COUNT],
            reset: false,
        }
    }
}

impl WheelFrame {
    /// Number of buttons currently pressed.
    pub fn pressed_count(&self) -> usize {
        self.buttons.iter().filter(|&&b| b).count()
    }
}

/// Parses one wheel-node line into a [`WheelFrame`].
///
/// The arity check counts delimiter occurrences before any field is
/// interpreted; a line with the wrong field count is rejected whole and the
/// caller keeps its previously accepted frame.
///
/// # Errors
///
/// [`FrameError::ArityMismatch`] when the dash-delimited field count is not
/// exactly [`WHEEL_FRAME_FIELDS`].
///
/// # Examples
///
/// ```
/// use wheelbox_protocol::parse_wheel_frame;
///
/// let line = "1-0-0-0-0-0-0-0-0-0-0-0-0-0-0-0-1";
/// let frame = parse_wheel_frame(line).unwrap();
/// assert!(frame.buttons[0]);
/// assert!(frame.reset);
/// ```
pub fn parse_wheel_frame(line: &str) -> FrameResult<WheelFrame> {
    let actual = line.matches('-').count() + 1;
    if actual != WHEEL_FRAME_FIELDS {
        return Err(FrameError::ArityMismatch {
            expected: WHEEL_FRAME_FIELDS,
            actual,
        });
    }

    let mut fields = line.split('-').map(str::trim);
    let mut buttons = [false; WHEEL_BUTTON_COUNT];
    for slot in buttons.iter_mut() {
        *slot = fields.next() == Some("1");
    }
    let reset = fields.next() == Some("1");

    Ok(WheelFrame { buttons, reset })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join(fields: &[&str]) -> String {
        fields.join("-")
    }

    #[test]
    fn test_parse_all_clear() {
        let line = join(&["0"; WHEEL_FRAME_FIELDS]);
        let frame = parse_wheel_frame(&line).unwrap();
        assert_eq!(frame, WheelFrame::default());
        assert_eq!(frame.pressed_count(), 0);
    }

    #[test]
    fn test_parse_buttons_and_reset() {
        let mut fields = ["0"; WHEEL_FRAME_FIELDS];
        fields[3] = "1";
        fields[15] = "1";
        fields[16] = "1";
        let frame = parse_wheel_frame(&join(&fields)).unwrap();
        assert!(frame.buttons[3]);
        assert!(frame.buttons[15]);
        assert!(frame.reset);
        assert_eq!(frame.pressed_count(), 2);
    }

    #[test]
    fn test_one_field_short_rejected() {
        let line = join(&["0"; WHEEL_FRAME_FIELDS - 1]);
        let err = parse_wheel_frame(&line).unwrap_err();
        assert_eq!(
            err,
            wheelbox_errors::FrameError::ArityMismatch {
                expected: 17,
                actual: 16,
            }
        );
    }

    #[test]
    fn test_one_field_long_rejected() {
        let line = join(&["0"; WHEEL_FRAME_FIELDS + 1]);
        assert!(parse_wheel_frame(&line).is_err());
    }

    #[test]
    fn test_empty_line_rejected() {
        assert!(parse_wheel_frame("").is_err());
    }

    #[test]
    fn test_corrupt_field_reads_clear() {
        let mut fields = ["0"; WHEEL_FRAME_FIELDS];
        fields[5] = "x";
        fields[16] = "9";
        let frame = parse_wheel_frame(&join(&fields)).unwrap();
        assert!(!frame.buttons[5]);
        assert!(!frame.reset);
    }

    #[test]
    fn test_whitespace_tolerated() {
        let mut fields = ["0"; WHEEL_FRAME_FIELDS];
        fields[0] = " 1 ";
        let frame = parse_wheel_frame(&join(&fields)).unwrap();
        assert!(frame.buttons[0]);
    }
}
