//! Error types for translation templates

use chatline_common::ChatError;
use thiserror::Error;

/// Errors raised while defining or filling translations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// A translation was filled with the wrong number of arguments
    #[error("translation '{fallback}' requires exactly {expected} parameters, got {actual}")]
    ParamCount {
        fallback: String,
        expected: usize,
        actual: usize,
    },

    /// A fallback or wrap pattern has the wrong number of `%v` markers
    #[error("pattern '{pattern}' must contain exactly {expected} markers, found {actual}")]
    MarkerCount {
        pattern: String,
        expected: usize,
        actual: usize,
    },

    /// The translation was never constructed
    #[error("translation is unset")]
    Unset,
}

/// Result type for translation operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for ChatError {
    fn from(err: I18nError) -> Self {
        let locale = match &err {
            I18nError::InvalidLanguageId(code) => Some(code.clone()),
            _ => None,
        };
        Self::Localization {
            message: err.to_string(),
            locale,
            source: Some(Box::new(err)),
        }
    }
}
