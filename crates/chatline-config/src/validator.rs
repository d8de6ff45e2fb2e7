//! Runtime validation of loaded configuration.

use crate::loader::ConfigError;
use crate::schema::Config;
use std::ops::RangeInclusive;

/// Chunk radii the client accepts.
pub const CHUNK_RADIUS_RANGE: RangeInclusive<u32> = 1..=128;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting every problem at once.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let problems = Self::problems(config);
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(problems.join("; ")))
        }
    }

    /// Lists the problems with a configuration, empty when it is valid.
    #[must_use]
    pub fn problems(config: &Config) -> Vec<String> {
        let mut problems = Vec::new();

        if let Err(problem) = check_address(&config.network.address) {
            problems.push(problem);
        }
        if config.server.name.trim().is_empty() {
            problems.push("server.name cannot be empty".to_string());
        }
        if config.world.name.trim().is_empty() {
            problems.push("world.name cannot be empty".to_string());
        }
        if config.world.folder.trim().is_empty() {
            problems.push("world.folder cannot be empty".to_string());
        }
        if !CHUNK_RADIUS_RANGE.contains(&config.world.maximum_chunk_radius) {
            problems.push(format!(
                "world.maximum_chunk_radius must be between {} and {}, got {}",
                CHUNK_RADIUS_RANGE.start(),
                CHUNK_RADIUS_RANGE.end(),
                config.world.maximum_chunk_radius
            ));
        }

        problems
    }
}

fn check_address(address: &str) -> Result<(), String> {
    let Some((_, port)) = address.rsplit_once(':') else {
        return Err(format!("network.address '{address}' has no port"));
    };
    match port.parse::<u16>() {
        Ok(0) | Err(_) => Err(format!("network.address '{address}' has an invalid port")),
        Ok(_) => Ok(()),
    }
}
