use thiserror::Error;

/// Errors produced while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid configuration value for {key}: {reason}")]
    ValidationError { key: String, reason: String },

    #[error("Environment variable error: {0}")]
    EnvVarError(String),
}
