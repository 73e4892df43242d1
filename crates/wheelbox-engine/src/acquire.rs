//! Bounded-wait line acquisition.
//!
//! The original firmware busy-waited forever for each peer, locking the
//! whole node up when a cable came loose. Acquisition here is bounded: the
//! caller gets a complete line or a typed timeout, and decides which
//! fallback value the cycle proceeds with.

use std::thread;
use std::time::{Duration, Instant};

use wheelbox_errors::{LinkError, LinkResult};
use wheelbox_protocol::LineFramer;

use crate::ports::LinkPort;

/// Discards the port's buffered stale bytes and any partial line in the
/// framer.
///
/// Run at the top of each per-peer exchange so a response is matched to
/// this cycle's request, not to leftovers from the last one.
///
/// # Errors
///
/// Propagates port I/O failure.
pub fn drain<P: LinkPort + ?Sized>(port: &mut P, framer: &mut LineFramer) -> LinkResult<()> {
    port.discard_input()?;
    framer.clear();
    Ok(())
}

/// Polls the port until a complete line is framed or the timeout expires.
///
/// Bytes are consumed as fast as they arrive; the poll interval only
/// paces the idle loop.
///
/// # Errors
///
/// [`LinkError::Timeout`] when no terminator arrived in time, or the
/// underlying port failure.
pub fn acquire_line<P: LinkPort + ?Sized>(
    port: &mut P,
    framer: &mut LineFramer,
    timeout: Duration,
    poll_interval: Duration,
) -> LinkResult<String> {
    let start = Instant::now();
    loop {
        match port.try_read_byte()? {
            Some(byte) => {
                if let Some(line) = framer.push(byte) {
                    return Ok(line);
                }
            }
            None => {
                if start.elapsed() >= timeout {
                    return Err(LinkError::Timeout {
                        waited_ms: timeout.as_millis() as u64,
                    });
                }
                thread::sleep(poll_interval);
            }
        }
    }
}
