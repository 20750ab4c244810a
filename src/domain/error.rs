use thiserror::Error;

/// Failure reported by a bulb driver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// Transport could not be established
    #[error("connection failed: {0}")]
    Connection(String),
    /// The bulb rejected or failed to execute a command
    #[error("command failed: {0}")]
    Command(String),
}

/// Invalid bulb or host configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("bulb #{index}: `name` is required")]
    MissingName { index: usize },
    #[error("bulb '{name}': `address` is required")]
    MissingAddress { name: String },
    #[error("bulb '{name}': `version` must be a positive integer")]
    InvalidVersion { name: String },
    #[error("bulb name '{0}' is used more than once")]
    DuplicateName(String),
    #[error("`poll_interval_secs` must be at least 1")]
    InvalidPollInterval,
}
