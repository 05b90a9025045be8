use std::path::PathBuf;

use thiserror::Error;

pub type UartScopeTuiResult<T> = Result<T, UartScopeTuiError>;

#[derive(Error, Debug)]
pub enum UartScopeTuiError {
    #[error("uartscope_tui: IO error: {}", _0)]
    Io(std::io::Error),
    #[error("uartscope_tui: invalid config {}: {}", _0.display(), _1)]
    Config(PathBuf, toml::de::Error),
    #[error("uartscope_tui: logging: {}", _0)]
    Logging(String),
}

impl From<std::io::Error> for UartScopeTuiError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}
