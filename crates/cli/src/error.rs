//! CLI error types and exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Failures the binary reports to the operator.
#[derive(Debug, Error)]
pub enum CliError {
    /// A serial port could not be opened.
    #[error("failed to open serial port {port}: {source}")]
    SerialOpen {
        /// Port path as given on the command line.
        port: String,
        /// The underlying driver failure.
        source: serialport::Error,
    },

    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// Path as given on the command line.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for the engine config.
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        /// Path as given on the command line.
        path: PathBuf,
        /// The underlying parse failure.
        source: serde_json::Error,
    },

    /// The configuration parsed but failed validation.
    #[error(transparent)]
    Config(#[from] wheelbox_errors::ConfigError),
}

impl CliError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SerialOpen { .. } => 2,
            CliError::ConfigRead { .. } | CliError::ConfigParse { .. } | CliError::Config(_) => 4,
        }
    }
}
