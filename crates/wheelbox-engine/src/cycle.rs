//! The control cycle orchestrator.

use std::time::Duration;

use tracing::{debug, info, warn};

use wheelbox_calibration::RawSnapshot;
use wheelbox_errors::LinkResult;
use wheelbox_ffb::{EffortInputs, MotorOutput, centering_command, fuse};
use wheelbox_protocol::{
    SensorReport, TelemetryTail, WheelStatus, parse_telemetry, parse_wheel_frame,
};

use crate::acquire::{acquire_line, drain};
use crate::config::EngineConfig;
use crate::context::ControlCycleContext;
use crate::ports::{LinkPort, MotorDriver, PedalRumble, SensorBank};

/// What one cycle observed and commanded; returned for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    /// Cycle number, starting at 1.
    pub cycle: u64,
    /// Calibrated wheel angle in degrees.
    pub degrees: f32,
    /// Normalized accelerator position.
    pub accelerator: u8,
    /// Normalized brake position.
    pub brake: u8,
    /// Fused effort that drove the motor.
    pub effort: u8,
    /// Output applied to the motor driver.
    pub output: MotorOutput,
    /// Whether a reset edge re-zeroed the sensors this cycle.
    pub recalibrated: bool,
    /// Whether a fresh wheel frame was accepted (vs. the last one reused).
    pub wheel_frame_fresh: bool,
    /// Whether a telemetry report was received (vs. neutral defaults).
    pub telemetry_fresh: bool,
}

/// The WheelBox control engine.
///
/// Owns both serial peers, the sensor bank, the motor driver, the pedal
/// vibration outputs, and all cycle state. Single-threaded by
/// construction: callers invoke [`run_cycle`](Engine::run_cycle) in a
/// loop, and each call runs the full eight-step sequence to completion.
#[derive(Debug)]
pub struct Engine<W, P, S, M, R> {
    config: EngineConfig,
    ctx: ControlCycleContext,
    wheel: W,
    pc: P,
    sensors: S,
    motor: M,
    rumble: R,
}

impl<W, P, S, M, R> Engine<W, P, S, M, R>
where
    W: LinkPort,
    P: LinkPort,
    S: SensorBank,
    M: MotorDriver,
    R: PedalRumble,
{
    /// Validates the configuration and initializes calibration from the
    /// boot sensor sample.
    ///
    /// # Errors
    ///
    /// Returns the configuration validation failure, if any.
    pub fn new(
        config: EngineConfig,
        wheel: W,
        pc: P,
        mut sensors: S,
        motor: M,
        rumble: R,
    ) -> Result<Self, wheelbox_errors::ConfigError> {
        config.validate()?;
        let boot = sensors.sample();
        info!(
            zero_ticks = boot.angle_ticks,
            accelerator = boot.accelerator,
            brake = boot.brake,
            "calibration initialized from boot sample"
        );
        let ctx = ControlCycleContext::new(RawSnapshot {
            angle_ticks: boot.angle_ticks,
            accelerator: boot.accelerator,
            brake: boot.brake,
        });
        Ok(Self {
            config,
            ctx,
            wheel,
            pc,
            sensors,
            motor,
            rumble,
        })
    }

    /// Runs one full control cycle.
    ///
    /// Malformed or late input from either peer never fails the cycle; it
    /// degrades to the last accepted wheel frame or to neutral telemetry.
    ///
    /// # Errors
    ///
    /// Only port I/O failures (a dead link) propagate.
    pub fn run_cycle(&mut self) -> LinkResult<CycleReport> {
        let poll = Duration::from_micros(self.config.poll_interval_us);

        // 1. Wheel frame, bounded wait, degrade to the last accepted one.
        drain(&mut self.wheel, &mut self.ctx.wheel_framer)?;
        let wheel_timeout = Duration::from_millis(self.config.wheel_timeout_ms);
        let mut wheel_frame_fresh = false;
        let frame = match acquire_line(
            &mut self.wheel,
            &mut self.ctx.wheel_framer,
            wheel_timeout,
            poll,
        ) {
            Ok(line) => match parse_wheel_frame(&line) {
                Ok(frame) => {
                    wheel_frame_fresh = true;
                    self.ctx.last_wheel_frame = frame;
                    frame
                }
                Err(err) => {
                    debug!(%err, "wheel frame rejected; reusing last accepted frame");
                    self.ctx.last_wheel_frame
                }
            },
            Err(err) if err.is_timeout() => {
                debug!(%err, "wheel link silent; reusing last accepted frame");
                self.ctx.last_wheel_frame
            }
            Err(err) => return Err(err),
        };

        // 2 + 3. One sensor pass feeds both the reset capture and this
        // cycle's calibrated readings, so a fresh zero applies immediately.
        let sample = self.sensors.sample();
        let recalibrated = self.ctx.calibration.observe(
            frame.reset,
            RawSnapshot {
                angle_ticks: sample.angle_ticks,
                accelerator: sample.accelerator,
                brake: sample.brake,
            },
        );
        if recalibrated {
            info!(
                zero_ticks = sample.angle_ticks,
                "reset edge received; sensors re-zeroed"
            );
        }

        let angle = self
            .config
            .angle
            .reading(sample.angle_ticks, self.ctx.calibration.zero_offset());
        let accelerator = self
            .config
            .pedals
            .reading(sample.accelerator, self.ctx.calibration.accelerator_offset());
        let brake = self
            .config
            .pedals
            .reading(sample.brake, self.ctx.calibration.brake_offset());

        // 4. Sensor report to the PC bridge.
        let report = SensorReport {
            degrees: angle.degrees,
            accelerator: accelerator.scaled,
            brake: brake.scaled,
            buttons: frame.buttons,
            handbrake: sample.handbrake,
            shifter_x: sample.shifter_x,
            shifter_y: sample.shifter_y,
        };
        self.pc.write_line(&report.encode())?;

        // 5. Telemetry, bounded wait, degrade to neutral defaults.
        drain(&mut self.pc, &mut self.ctx.pc_framer)?;
        let pc_timeout = Duration::from_millis(self.config.pc_timeout_ms);
        let telemetry = match acquire_line(&mut self.pc, &mut self.ctx.pc_framer, pc_timeout, poll)
        {
            Ok(line) => {
                let parsed = parse_telemetry(&line);
                if parsed.is_none() {
                    debug!(%line, "telemetry line incomplete; using neutral defaults");
                }
                parsed
            }
            Err(err) if err.is_timeout() => {
                debug!(%err, "PC link silent; using neutral defaults");
                None
            }
            Err(err) => return Err(err),
        };
        let telemetry_fresh = telemetry.is_some();
        let fused_from = telemetry.unwrap_or_default();

        // 6. Fuse effort and drive the motor through the cutout.
        let local_pedal = if self.config.pedal_less_rig {
            255
        } else {
            accelerator.scaled.max(brake.scaled)
        };
        let effort = fuse(EffortInputs {
            local_pedal,
            speed_kph: fused_from.speed_kph,
            lateral_g: fused_from.lateral_g,
            rumble: fused_from.rumble,
        });

        let was_cut_out = self.ctx.cutout.is_engaged();
        let output = centering_command(&mut self.ctx.cutout, angle.degrees, effort);
        if self.ctx.cutout.is_engaged() != was_cut_out {
            if self.ctx.cutout.is_engaged() {
                warn!(
                    degrees = angle.degrees,
                    "end-stop cutout engaged; motor driver disabled"
                );
            } else {
                info!(degrees = angle.degrees, "end-stop cutout released");
            }
        }
        self.motor.apply(output);

        // 7. Pedal vibration: brake reacts to rumble or hard braking,
        // accelerator to rumble only.
        let hard_braking = brake.scaled >= self.config.brake_rumble_threshold;
        self.rumble
            .set_brake(fused_from.rumble > 0 || hard_braking);
        self.rumble.set_throttle(fused_from.rumble > 0);

        // 8. Condensed status to the wheel node's dashboard.
        let status = WheelStatus {
            degrees: angle.degrees,
            accelerator: accelerator.scaled,
            brake: brake.scaled,
            telemetry: telemetry.map(|t| TelemetryTail {
                gear: t.gear,
                speed_kph: t.speed_kph,
                rpm_percent: t.rpm_percent,
            }),
        };
        self.wheel.write_line(&status.encode())?;

        self.ctx.cycle_count += 1;
        Ok(CycleReport {
            cycle: self.ctx.cycle_count,
            degrees: angle.degrees,
            accelerator: accelerator.scaled,
            brake: brake.scaled,
            effort,
            output,
            recalibrated,
            wheel_frame_fresh,
            telemetry_fresh,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Cycle state, for observability.
    pub fn context(&self) -> &ControlCycleContext {
        &self.ctx
    }

    /// The wheel-link peer.
    pub fn wheel_mut(&mut self) -> &mut W {
        &mut self.wheel
    }

    /// The PC-link peer.
    pub fn pc_mut(&mut self) -> &mut P {
        &mut self.pc
    }

    /// The sensor bank.
    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }

    /// The motor driver.
    pub fn motor(&self) -> &M {
        &self.motor
    }

    /// The pedal vibration outputs.
    pub fn rumble(&self) -> &R {
        &self.rumble
    }
}
