use std::path::{Path, PathBuf};

use serde::Deserialize;
use uartscope_wave::RenderOptions;

use crate::{
    backend::input::InputFormat,
    error::{UartScopeTuiError, UartScopeTuiResult},
};

pub const CONFIG_PATH_ENV: &str = "UARTSCOPE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "uartscope.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input: InputConfig,
    pub plot: PlotConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub data: String,
    pub format: InputFormat,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    pub label_offset: f64,
    pub annotation_height: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Config {
    /// `$UARTSCOPE_CONFIG` if set, else `uartscope.toml` in the working
    /// directory when present, else the defaults.
    pub fn load() -> UartScopeTuiResult<Self> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Self::from_path(Path::new(&path));
        }
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            Self::from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_path(path: &Path) -> UartScopeTuiResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| UartScopeTuiError::Config(path.to_path_buf(), e))
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            data: "0x41".to_string(),
            format: InputFormat::Hex,
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            label_offset: options.label_offset,
            annotation_height: options.annotation_height,
        }
    }
}

impl From<&PlotConfig> for RenderOptions {
    fn from(config: &PlotConfig) -> Self {
        RenderOptions {
            label_offset: config.label_offset,
            annotation_height: config.annotation_height,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;
    use std::path::PathBuf;

    use crate::{backend::input::InputFormat, error::UartScopeTuiError};

    use super::Config;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.input.data, "0x41");
        assert_eq!(config.input.format, InputFormat::Hex);
        assert_eq!(config.plot.label_offset, 0.2);
        assert_eq!(config.plot.annotation_height, 1.0);
        assert_eq!(config.log.file, None);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_partial_file() {
        let file = write_config(
            r#"
            [input]
            format = "bin"

            [log]
            file = "scope.log"
            "#,
        );
        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.input.format, InputFormat::Binary);
        assert_eq!(config.input.data, "0x41");
        assert_eq!(config.log.file, Some(PathBuf::from("scope.log")));
        assert_eq!(config.log.level, "info");
        assert_eq!(config.plot, Config::default().plot);
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            r#"
            [input]
            data = "65"
            format = "decimal"

            [plot]
            label_offset = 0.3
            annotation_height = 1.25

            [log]
            level = "debug"
            "#,
        );
        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.input.data, "65");
        assert_eq!(config.input.format, InputFormat::Decimal);
        assert_eq!(config.plot.label_offset, 0.3);
        assert_eq!(config.plot.annotation_height, 1.25);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let file = write_config("[plot]\nbaud_rate = 9600\n");
        assert!(matches!(
            Config::from_path(file.path()),
            Err(UartScopeTuiError::Config(_, _))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::from_path(&dir.path().join("missing.toml")),
            Err(UartScopeTuiError::Io(_))
        ));
    }
}
