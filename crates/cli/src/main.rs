//! wheelbox - WheelBox control core runner.
//!
//! Runs the force-feedback control loop against the two serial peers, or
//! replays a scripted session through the same engine for bench work.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod error;
mod motor;
mod serial;
mod simulate;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wheelbox_engine::harness::StaticSensors;
use wheelbox_engine::{Engine, EngineConfig};

use crate::error::CliError;
use crate::motor::{LoggingMotor, LoggingRumble};
use crate::serial::SerialLink;

#[derive(Parser)]
#[command(name = "wheelbox")]
#[command(about = "WheelBox force-feedback control core")]
#[command(version)]
#[command(long_about = "
wheelbox runs the steering-wheel control loop: it exchanges frames with
the wheel node and the PC telemetry bridge over two serial links, fuses
pedal input with simulator telemetry, and drives the wheel motor.

On a development host the motor and pedal-rumble outputs are rendered as
log events and the local sensors sit at neutral; embedded targets provide
their own SensorBank and MotorDriver implementations.
")]
struct Cli {
    /// Verbose logging (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the control loop against real serial links
    Run {
        /// Serial port connected to the wheel node
        #[arg(long)]
        wheel_port: String,

        /// Serial port connected to the PC telemetry bridge
        #[arg(long)]
        pc_port: String,

        /// Baud rate for both links
        #[arg(long, default_value_t = 115_200)]
        baud: u32,

        /// JSON engine configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Stop after this many cycles instead of running until killed
        #[arg(long)]
        cycles: Option<u64>,
    },

    /// Replay a scripted session without hardware
    Simulate {
        /// Cycles to simulate
        #[arg(long, default_value_t = 200)]
        cycles: u32,

        /// JSON engine configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("wheelbox={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match execute(cli.command) {
        Ok(()) => Ok(()),
        Err(e) => {
            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            eprintln!("error: {e:#}");
            std::process::exit(code);
        }
    }
}

fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            wheel_port,
            pc_port,
            baud,
            config,
            cycles,
        } => {
            let config = load_config(config.as_deref())?;
            run_links(&wheel_port, &pc_port, baud, config, cycles)
        }
        Commands::Simulate { cycles, config } => {
            let config = load_config(config.as_deref())?;
            simulate::run(cycles, config)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig, CliError> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: EngineConfig =
        serde_json::from_str(&text).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

fn run_links(
    wheel_port: &str,
    pc_port: &str,
    baud: u32,
    config: EngineConfig,
    cycles: Option<u64>,
) -> Result<()> {
    let wheel = SerialLink::open(wheel_port, baud)?;
    let pc = SerialLink::open(pc_port, baud)?;
    let mut engine = Engine::new(
        config,
        wheel,
        pc,
        StaticSensors::default(),
        LoggingMotor::default(),
        LoggingRumble::default(),
    )
    .map_err(CliError::Config)?;

    info!("control loop starting");
    let mut completed = 0u64;
    loop {
        let report = engine.run_cycle()?;
        trace!(
            cycle = report.cycle,
            degrees = report.degrees,
            effort = report.effort,
            wheel_fresh = report.wheel_frame_fresh,
            telemetry_fresh = report.telemetry_fresh,
            "cycle complete"
        );
        completed += 1;
        if cycles.is_some_and(|limit| completed >= limit) {
            break;
        }
    }
    info!(cycles = completed, "control loop finished");
    Ok(())
}
