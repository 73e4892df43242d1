//! In-memory doubles for the port traits.
//!
//! Used by the engine's own tests and by the CLI's `simulate` subcommand,
//! which replays scripted frames through a real engine without hardware.

use std::collections::VecDeque;
use std::io;

use wheelbox_ffb::MotorOutput;

use crate::ports::{LinkPort, MotorDriver, PedalRumble, SensorBank, SensorSample};

/// A serial peer fed from a byte script.
///
/// Bytes queued with [`push_line`](ScriptedLink::push_line) model the
/// peer's response to this cycle and survive `discard_input`; bytes queued
/// with [`push_stale_line`](ScriptedLink::push_stale_line) model leftovers
/// from an earlier cycle and are dropped by it. Everything the engine
/// writes is collected in [`sent`](ScriptedLink::sent).
#[derive(Debug, Default)]
pub struct ScriptedLink {
    stale: VecDeque<u8>,
    incoming: VecDeque<u8>,
    /// Lines written by the engine, terminators stripped.
    pub sent: Vec<String>,
}

impl ScriptedLink {
    /// Creates a link with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a line plus its `\n` terminator.
    pub fn push_line(&mut self, line: &str) {
        self.push_bytes(line.as_bytes());
        self.incoming.push_back(b'\n');
    }

    /// Queues raw bytes without a terminator.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.incoming.extend(bytes.iter().copied());
    }

    /// Queues a line that reads as already buffered before the cycle's
    /// drain, so `discard_input` throws it away.
    pub fn push_stale_line(&mut self, line: &str) {
        self.stale.extend(line.as_bytes().iter().copied());
        self.stale.push_back(b'\n');
    }
}

impl LinkPort for ScriptedLink {
    fn try_read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.stale.pop_front().or_else(|| self.incoming.pop_front()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.sent.push(line.to_string());
        Ok(())
    }

    fn discard_input(&mut self) -> io::Result<()> {
        self.stale.clear();
        Ok(())
    }
}

/// A sensor bank returning whatever the test last stored.
#[derive(Debug, Default)]
pub struct StaticSensors {
    /// The sample every call returns; mutate between cycles.
    pub current: SensorSample,
}

impl StaticSensors {
    /// Creates a bank returning `sample` until told otherwise.
    pub fn new(sample: SensorSample) -> Self {
        Self { current: sample }
    }
}

impl SensorBank for StaticSensors {
    fn sample(&mut self) -> SensorSample {
        self.current
    }
}

/// A motor driver that records every output it is given.
#[derive(Debug, Default)]
pub struct RecordingMotor {
    /// Outputs in application order.
    pub outputs: Vec<MotorOutput>,
}

impl RecordingMotor {
    /// The most recent output, if any cycle ran.
    pub fn last(&self) -> Option<MotorOutput> {
        self.outputs.last().copied()
    }
}

impl MotorDriver for RecordingMotor {
    fn apply(&mut self, output: MotorOutput) {
        self.outputs.push(output);
    }
}

/// A pedal rumble sink that records every state change.
#[derive(Debug, Default)]
pub struct RecordingRumble {
    /// Brake vibration states in application order.
    pub brake: Vec<bool>,
    /// Accelerator vibration states in application order.
    pub throttle: Vec<bool>,
}

impl PedalRumble for RecordingRumble {
    fn set_brake(&mut self, vibrate: bool) {
        self.brake.push(vibrate);
    }

    fn set_throttle(&mut self, vibrate: bool) {
        self.throttle.push(vibrate);
    }
}
