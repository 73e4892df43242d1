//! Per-cycle framing and structural validation errors.
//!
//! These errors occur on the control-loop hot path, so they are `Copy` with
//! a fixed-size representation: no heap allocation happens between reading
//! a serial byte and commanding the motor.

use thiserror::Error;

/// Structural failure of a single received line.
///
/// A `FrameError` never aborts a control cycle. The orchestrator logs it and
/// falls back to the last accepted frame (wheel link) or neutral defaults
/// (PC link).
///
/// # Examples
///
/// ```
/// use wheelbox_errors::FrameError;
///
/// let err = FrameError::ArityMismatch { expected: 17, actual: 16 };
/// assert_eq!(
///     err.to_string(),
///     "field count mismatch: expected 17, got 16",
/// );
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Line exceeded the framer's buffer before a terminator arrived.
    #[error("line overflowed {capacity}-byte buffer before terminator")]
    Overflow {
        /// Capacity of the line buffer that overflowed.
        capacity: usize,
    },

    /// Delimited field count did not match the fixed frame arity.
    #[error("field count mismatch: expected {expected}, got {actual}")]
    ArityMismatch {
        /// Fields the grammar requires.
        expected: usize,
        /// Fields actually present in the line.
        actual: usize,
    },
}

pub type FrameResult<T> = Result<T, FrameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_overflow() {
        let err = FrameError::Overflow { capacity: 96 };
        assert_eq!(
            err.to_string(),
            "line overflowed 96-byte buffer before terminator"
        );
    }

    #[test]
    fn test_display_arity() {
        let err = FrameError::ArityMismatch {
            expected: 17,
            actual: 15,
        };
        assert_eq!(err.to_string(), "field count mismatch: expected 17, got 15");
    }

    #[test]
    fn test_frame_error_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<FrameError>();
    }

    #[test]
    fn test_frame_error_is_std_error() {
        let err = FrameError::Overflow { capacity: 64 };
        let _: &dyn std::error::Error = &err;
    }
}
