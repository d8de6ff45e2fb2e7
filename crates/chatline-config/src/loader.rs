//! Configuration loading utilities

use crate::schema::Config;
use chatline_common::ChatError;
use std::env;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "CHATLINE_CONFIG_PATH";

/// File loaded when [`CONFIG_PATH_VAR`] is not set.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading or writing the configuration file
    #[error("Failed to access configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    Validation(String),
}

impl From<ConfigError> for ChatError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source(err.to_string(), err)
    }
}

/// Configuration loader for the server
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the environment-selected file, `config.toml`,
    /// or defaults, in that order
    pub fn load() -> Result<Config, ConfigError> {
        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return Self::load_config(path);
        }
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::load_config(DEFAULT_CONFIG_FILE);
        }

        info!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text; missing fields take defaults
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Write configuration as TOML through a temporary file in the same
    /// directory, then move it into place
    pub fn save_config<P: AsRef<Path>>(config: &Config, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(config)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(content.as_bytes())?;
        file.persist(path).map_err(|e| ConfigError::Io(e.error))?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Apply overrides from process environment variables
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(address) = lookup("CHATLINE_ADDRESS") {
            debug!("Overriding network.address from environment");
            config.network.address = address;
        }
        if let Some(name) = lookup("CHATLINE_SERVER_NAME") {
            debug!("Overriding server.name from environment");
            config.server.name = name;
        }
        if let Some(max) = lookup("CHATLINE_MAX_PLAYERS") {
            debug!("Overriding server.maximum_players from environment");
            config.server.maximum_players =
                max.trim().parse().map_err(|e| ConfigError::EnvParse {
                    var: "CHATLINE_MAX_PLAYERS".to_string(),
                    source: Box::new(e),
                })?;
        }
        if let Some(message) = lookup("CHATLINE_SHUTDOWN_MESSAGE") {
            debug!("Overriding server.shutdown_message from environment");
            config.server.shutdown_message = message;
        }
        if let Some(world) = lookup("CHATLINE_WORLD_NAME") {
            debug!("Overriding world.name from environment");
            config.world.name = world;
        }
        Ok(())
    }
}
