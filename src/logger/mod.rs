//! Logger initialization on top of tracing-subscriber.
//!
//! `RUST_LOG` wins over the configured level so operators can raise
//! verbosity without editing configuration files.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggerConfig};

pub fn init_logger(config: &LoggerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| anyhow::anyhow!("invalid log filter '{}': {e}", config.level))?;

    match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;

    Ok(())
}
