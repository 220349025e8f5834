use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Configuration could not be read or holds an unusable value.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key}: {message} {location}")]
    InvalidValue {
        key: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot access {path}: {source} {location}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Cannot parse {path}: {source} {location}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
        location: ErrorLocation,
    },

    #[error("Cannot determine current working directory: {source} {location}")]
    CurrentDir {
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn parse(path: &Path, source: toml::de::Error) -> Self {
        ConfigError::Parse {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = std::result::Result<T, ConfigError>;
