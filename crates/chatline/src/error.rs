//! Application-wide error types using thiserror.

use chatline_common::ChatError;
use chatline_config::ConfigError;
use chatline_i18n::I18nError;

/// Main server error type.
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Locale or translation error.
    #[error("Localization error: {0}")]
    Localization(#[from] I18nError),

    /// The server is at its player limit.
    #[error("Server is full ({max} players)")]
    Full {
        /// The configured limit.
        max: usize,
    },

    /// A player with this name is already online.
    #[error("Player '{0}' is already online")]
    AlreadyOnline(String),

    /// No player with this name is online.
    #[error("Player '{0}' is not online")]
    UnknownPlayer(String),

    /// Shared infrastructure error.
    #[error(transparent)]
    Common(#[from] ChatError),
}

/// Result type for the server.
pub type ServerResult<T> = Result<T, ServerError>;
