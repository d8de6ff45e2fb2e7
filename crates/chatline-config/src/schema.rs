//! Configuration schema definitions using serde.

use crate::loader::ConfigError;
use crate::validator::ConfigValidator;
use serde::{Deserialize, Serialize};

/// Main configuration structure for a Chatline server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Network settings.
    pub network: NetworkConfig,
    /// Server settings.
    pub server: ServerConfig,
    /// World settings.
    pub world: WorldConfig,
}

/// Network configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Address the server listens on, e.g. `:19132`.
    pub address: String,
    /// Whether HTTP endpoints with server information are served on the
    /// same address.
    pub enable_endpoints: bool,
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Name shown in the server list.
    pub name: String,
    /// Maximum players online at once. 0 lets the limit grow with every join.
    pub maximum_players: usize,
    /// Message shown to players on shutdown. Empty means the default
    /// disconnect message.
    pub shutdown_message: String,
}

/// World configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World name, shown at the top of the player list.
    pub name: String,
    /// Folder holding the world data.
    pub folder: String,
    /// Upper bound for the chunk radius players may request.
    pub maximum_chunk_radius: u32,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigValidator::validate(self)
    }
}

impl ServerConfig {
    /// The configured shutdown message, `None` when the default should be
    /// used.
    #[must_use]
    pub fn shutdown_message(&self) -> Option<&str> {
        let message = self.shutdown_message.trim();
        (!message.is_empty()).then_some(message)
    }
}
