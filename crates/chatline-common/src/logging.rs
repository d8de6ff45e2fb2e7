//! Structured logging infrastructure for Chatline

use crate::error::{ChatError, Result};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "chatline_i18n=trace")
    pub level: String,
    /// Whether to emit one JSON object per event
    pub json_format: bool,
    /// Whether to enable pretty formatting with colors
    pub pretty_format: bool,
    /// Whether to include spans in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
    /// Whether to include thread ids
    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: false,
            include_spans: false,
            include_targets: true,
            include_thread_ids: false,
        }
    }
}

impl LoggingConfig {
    /// Builds the event filter, honouring `RUST_LOG` when it is set.
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Initialize the tracing subscriber with the given configuration
///
/// Fails if a global subscriber has already been installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let installed = if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_span_events(config.span_events())
            .with_target(config.include_targets)
            .with_thread_ids(config.include_thread_ids);
        registry.with(layer).try_init()
    } else if config.pretty_format {
        let layer = fmt::layer()
            .pretty()
            .with_span_events(config.span_events())
            .with_target(config.include_targets)
            .with_thread_ids(config.include_thread_ids);
        registry.with(layer).try_init()
    } else {
        let layer = fmt::layer()
            .compact()
            .with_span_events(config.span_events())
            .with_target(config.include_targets)
            .with_thread_ids(config.include_thread_ids);
        registry.with(layer).try_init()
    };

    installed.map_err(|e| ChatError::config_with_source("failed to install tracing subscriber", e))
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<()> {
    init_logging(&LoggingConfig::default())
}

/// Initialize logging for development (pretty, debug level)
pub fn init_dev_logging() -> Result<()> {
    init_logging(&LoggingConfig {
        level: "debug".to_string(),
        pretty_format: true,
        include_spans: true,
        include_thread_ids: true,
        ..LoggingConfig::default()
    })
}
