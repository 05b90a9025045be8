use std::{fs::OpenOptions, sync::Mutex};

use tracing_subscriber::EnvFilter;

use crate::{
    config::LogConfig,
    error::{UartScopeTuiError, UartScopeTuiResult},
};

/// Installs a file-backed subscriber. The terminal belongs to the UI, so
/// nothing is installed when no log file is configured. `RUST_LOG` overrides
/// the configured level.
pub fn init(config: &LogConfig) -> UartScopeTuiResult<()> {
    let Some(path) = &config.file else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| UartScopeTuiError::Logging(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| UartScopeTuiError::Logging(e.to_string()))?;
    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
