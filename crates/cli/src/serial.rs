//! Real serial links behind the engine's port trait.

use std::io::{self, Read, Write};
use std::time::Duration;

use serialport::{ClearBuffer, SerialPort};
use tracing::info;

use wheelbox_engine::LinkPort;

use crate::error::CliError;

/// Per-read timeout. Short enough that `try_read_byte` behaves as a
/// non-blocking poll; the engine's acquire loop supplies the real waiting.
const READ_TIMEOUT: Duration = Duration::from_millis(1);

/// A UART peer opened from a port path.
pub struct SerialLink {
    port: Box<dyn SerialPort>,
}

impl SerialLink {
    /// Opens `path` at `baud`, 8N1.
    ///
    /// # Errors
    ///
    /// [`CliError::SerialOpen`] when the driver refuses the port.
    pub fn open(path: &str, baud: u32) -> Result<Self, CliError> {
        let port = serialport::new(path, baud)
            .timeout(READ_TIMEOUT)
            .open()
            .map_err(|source| CliError::SerialOpen {
                port: path.to_string(),
                source,
            })?;
        info!(port = path, baud, "serial link opened");
        Ok(Self { port })
    }
}

impl LinkPort for SerialLink {
    fn try_read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match self.port.read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.port.write_all(line.as_bytes())?;
        self.port.write_all(b"\n")?;
        Ok(())
    }

    fn discard_input(&mut self) -> io::Result<()> {
        self.port
            .clear(ClearBuffer::Input)
            .map_err(io::Error::from)
    }
}
