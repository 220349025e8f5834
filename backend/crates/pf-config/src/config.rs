use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use error_location::ErrorLocation;
use log::{info, warn};
use serde::Deserialize;

/// Environment variables that override `config.toml`, applied in `load()`.
pub const ENV_SERVER_HOST: &str = "PF_SERVER_HOST";
pub const ENV_SERVER_PORT: &str = "PF_SERVER_PORT";
pub const ENV_DATABASE_PATH: &str = "PF_DATABASE_PATH";
pub const ENV_DATABASE_MAX_CONNECTIONS: &str = "PF_DATABASE_MAX_CONNECTIONS";
pub const ENV_LOG_LEVEL: &str = "PF_LOG_LEVEL";
pub const ENV_LOG_COLORED: &str = "PF_LOG_COLORED";
pub const ENV_LOG_FILE: &str = "PF_LOG_FILE";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Read `config.toml` from the config dir (defaults when absent), then
    /// apply `PF_*` environment overrides. The config dir is created if
    /// missing.
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::io(&config_dir, e))?;

        let config_path = config_dir.join(CONFIG_FILENAME);
        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(contents) => Self::parse(&config_path, &contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => return Err(ConfigError::io(&config_path, e)),
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn parse(path: &Path, contents: &str) -> ConfigErrorResult<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::parse(path, e))
    }

    /// `PF_CONFIG_DIR` if set, else `.pf/` under the working directory.
    #[track_caller]
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Some(dir) = env_var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|source| ConfigError::CurrentDir {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Check every section; call once at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// None when logging to stdout.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(filename) = self.logging.file.as_deref() else {
            return Ok(None);
        };

        Ok(Some(
            Self::config_dir()?.join(&self.logging.dir).join(filename),
        ))
    }

    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Log the effective settings.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}", self.bind_addr());
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        warn!("  permissions: open (no authentication on any endpoint)");
    }

    fn apply_env_overrides(&mut self) {
        override_parsed(ENV_SERVER_HOST, &mut self.server.host);
        override_parsed(ENV_SERVER_PORT, &mut self.server.port);

        override_parsed(ENV_DATABASE_PATH, &mut self.database.path);
        override_parsed(
            ENV_DATABASE_MAX_CONNECTIONS,
            &mut self.database.max_connections,
        );

        override_parsed(ENV_LOG_LEVEL, &mut self.logging.level);
        if let Some(flag) = env_var(ENV_LOG_COLORED) {
            self.logging.colored = matches!(flag.trim(), "1" | "true");
        }
        if let Some(file) = env_var(ENV_LOG_FILE) {
            self.logging.file = Some(file);
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Values that fail to parse leave `target` untouched.
fn override_parsed<T: FromStr>(name: &str, target: &mut T) {
    if let Some(parsed) = env_var(name).and_then(|raw| raw.parse().ok()) {
        *target = parsed;
    }
}
