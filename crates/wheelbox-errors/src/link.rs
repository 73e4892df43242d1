//! Serial link acquisition errors.

use thiserror::Error;

/// Failure to acquire a complete line from a serial peer.
#[derive(Debug, Error)]
pub enum LinkError {
    /// Underlying port I/O failed.
    #[error("link I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No complete line arrived before the bounded-wait deadline.
    ///
    /// The peer is polled again next cycle; there is no retry within the
    /// cycle that timed out.
    #[error("no complete line within {waited_ms} ms")]
    Timeout {
        /// How long the acquire loop waited.
        waited_ms: u64,
    },
}

impl LinkError {
    /// True when the failure is the bounded-wait deadline expiring, which
    /// degrades to a default value rather than surfacing to the caller.
    pub fn is_timeout(&self) -> bool {
        matches!(self, LinkError::Timeout { .. })
    }
}

pub type LinkResult<T> = Result<T, LinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let err = LinkError::Timeout { waited_ms: 500 };
        assert_eq!(err.to_string(), "no complete line within 500 ms");
        assert!(err.is_timeout());
    }

    #[test]
    fn test_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "port gone");
        let err: LinkError = io_err.into();
        assert!(matches!(err, LinkError::Io(_)));
        assert!(!err.is_timeout());
    }
}
