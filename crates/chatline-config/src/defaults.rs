//! Default configuration values.

use crate::schema::{Config, NetworkConfig, ServerConfig, WorldConfig};

/// Default listen address.
pub const DEFAULT_ADDRESS: &str = ":19132";

/// Default chunk radius cap.
pub const DEFAULT_MAXIMUM_CHUNK_RADIUS: u32 = 32;

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            server: ServerConfig::default(),
            world: WorldConfig::default(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            enable_endpoints: true,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "Chatline Server".to_string(),
            maximum_players: 0,
            shutdown_message: String::new(),
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: "World".to_string(),
            folder: "world".to_string(),
            maximum_chunk_radius: DEFAULT_MAXIMUM_CHUNK_RADIUS,
        }
    }
}
