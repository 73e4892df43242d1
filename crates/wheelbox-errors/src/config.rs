//! Configuration validation errors.

use thiserror::Error;

/// Invalid engine or CLI configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration value is out of its documented range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ConfigError {
    /// Shorthand for [`ConfigError::InvalidConfiguration`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        ConfigError::InvalidConfiguration(msg.into())
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
