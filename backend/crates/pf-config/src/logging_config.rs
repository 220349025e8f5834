use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL,
    LogLevel,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Directory for `file`, relative to the config dir
    pub dir: String,
    /// Log to this file instead of stdout
    pub file: Option<String>,
    /// Ignored when logging to a file
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: DEFAULT_LOG_DIRECTORY.to_string(),
            file: None,
            colored: DEFAULT_LOG_COLORED,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.file.as_deref() {
            Some(file) if file.trim().is_empty() => Err(ConfigError::invalid(
                "logging.file",
                "must not be blank when set",
            )),
            _ => Ok(()),
        }
    }
}
