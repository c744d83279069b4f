//! Configuration loading and typed config structures for Tilerace.
//!
//! The canonical configuration lives in `tilerace-config.yaml` in the
//! working directory. Every field has a default, so a missing file or a
//! partial file is fine. Environment variables override the file:
//!
//! - `TILERACE_GAME_FILE` overrides `storage.game_file`
//! - `TILERACE_HOST` overrides `server.host`
//! - `TILERACE_PORT` overrides `server.port` (ignored unless a valid port)
//! - `TILERACE_LOG_LEVEL` overrides `logging.level`

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tilerace_types::LAST_TILE;
use tracing::{info, warn};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "tilerace-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but describes an unplayable board.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TileraceConfig {
    /// Board and movement rules.
    #[serde(default)]
    pub rules: RulesConfig,

    /// Where the game file lives.
    #[serde(default)]
    pub storage: StorageConfig,

    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TileraceConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist. Environment overrides are applied either way.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an existing file cannot be read or
    /// parsed, or if the result fails [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!(path = %path.display(), "Config file not found, using defaults");
            let mut config = Self::default();
            config.apply_env_overrides();
            config.validate()?;
            Ok(config)
        }
    }

    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. No environment overrides
    /// are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("TILERACE_GAME_FILE") {
            self.storage.game_file = PathBuf::from(val);
        }
        if let Some(val) = lookup("TILERACE_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("TILERACE_PORT") {
            match val.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(e) => warn!(value = %val, error = %e, "Ignoring invalid TILERACE_PORT"),
            }
        }
        if let Some(val) = lookup("TILERACE_LOG_LEVEL") {
            self.logging.level = val;
        }
    }

    /// Check that the rules describe a playable board.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `last_tile` or `die_faces` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.last_tile == 0 {
            return Err(ConfigError::Invalid {
                reason: "rules.last_tile must be at least 1".to_owned(),
            });
        }
        if self.rules.die_faces == 0 {
            return Err(ConfigError::Invalid {
                reason: "rules.die_faces must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

/// Board and movement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RulesConfig {
    /// Index of the final tile. Reaching it wins.
    #[serde(default = "default_last_tile")]
    pub last_tile: u32,

    /// Tiles gained when a `Treasure` event fires.
    #[serde(default = "default_treasure_advance")]
    pub treasure_advance: u32,

    /// Tiles lost when a `Portal` event fires.
    #[serde(default = "default_portal_retreat")]
    pub portal_retreat: u32,

    /// Number of faces on the die; rolls are uniform over `1..=die_faces`.
    #[serde(default = "default_die_faces")]
    pub die_faces: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            last_tile: default_last_tile(),
            treasure_advance: default_treasure_advance(),
            portal_retreat: default_portal_retreat(),
            die_faces: default_die_faces(),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Path of the persisted game file.
    #[serde(default = "default_game_file")]
    pub game_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            game_file: default_game_file(),
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const fn default_last_tile() -> u32 {
    LAST_TILE
}

const fn default_treasure_advance() -> u32 {
    10
}

const fn default_portal_retreat() -> u32 {
    3
}

const fn default_die_faces() -> u32 {
    6
}

fn default_game_file() -> PathBuf {
    PathBuf::from("game.txt")
}

fn default_host() -> String {
    "127.0.0.1".to_owned()
}

const fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_owned()
}
