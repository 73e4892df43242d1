//! Scripted bench session.
//!
//! Replays a synthetic drive through a real engine wired to in-memory
//! doubles: the wheel sweeps side to side, speed ramps up, rumble pulses,
//! and a mid-run reset re-zeroes the sensors. Useful for eyeballing the
//! control loop's behavior without a single piece of hardware attached.

use anyhow::Result;
use tracing::{debug, info};

use wheelbox_engine::harness::{RecordingMotor, RecordingRumble, ScriptedLink, StaticSensors};
use wheelbox_engine::{Engine, EngineConfig};
use wheelbox_ffb::MotorOutput;
use wheelbox_protocol::WHEEL_FRAME_FIELDS;

use crate::error::CliError;

fn wheel_line(reset: bool) -> String {
    let mut fields = vec!["0"; WHEEL_FRAME_FIELDS];
    if reset {
        fields[WHEEL_FRAME_FIELDS - 1] = "1";
    }
    fields.join("-")
}

/// Runs `cycles` scripted cycles and logs what the motor would have done.
pub fn run(cycles: u32, config: EngineConfig) -> Result<()> {
    let ticks_per_degree = config.angle.ticks_per_degree;
    let mut engine = Engine::new(
        config,
        ScriptedLink::new(),
        ScriptedLink::new(),
        StaticSensors::default(),
        RecordingMotor::default(),
        RecordingRumble::default(),
    )
    .map_err(CliError::Config)?;

    info!(cycles, "simulated session starting");
    let mut driven = 0u32;
    let mut cut_out = 0u32;

    for i in 0..cycles {
        // Sweep the wheel ±120° while the car accelerates to 300 km/h.
        let degrees = (i as f32 / 25.0).sin() * 120.0;
        engine.sensors_mut().current.angle_ticks = (degrees * ticks_per_degree) as i32;

        let reset = i == cycles / 2;
        engine.wheel_mut().push_line(&wheel_line(reset));

        let speed = (i * 300 / cycles.max(1)) as u16;
        let rumble: u8 = if i > 0 && i % 40 == 0 { 200 } else { 0 };
        let rpm = 1500 + u32::from(speed) * 40;
        let rpm_percent = (rpm * 100 / 13_500).min(100);
        engine
            .pc_mut()
            .push_line(&format!("{rpm};3;{speed};127;{rumble};{rpm_percent}"));

        let report = engine.run_cycle()?;
        match report.output {
            MotorOutput::Disabled => cut_out += 1,
            MotorOutput::Command(cmd) if cmd.pwm > 0 => driven += 1,
            MotorOutput::Command(_) => {}
        }
        debug!(
            cycle = report.cycle,
            degrees = report.degrees,
            effort = report.effort,
            output = ?report.output,
            recalibrated = report.recalibrated,
            "simulated cycle"
        );
    }

    info!(driven, cut_out, "simulated session complete");
    Ok(())
}
