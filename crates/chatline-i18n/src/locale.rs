//! Locale parsing helpers
//!
//! Choosing a locale is up to the caller; this module only turns the codes
//! clients report into [`LanguageIdentifier`] values.

use crate::error::{I18nError, I18nResult};
use unic_langid::LanguageIdentifier;

/// Locale assumed when a client reports nothing usable.
pub const DEFAULT_LOCALE_CODE: &str = "en-US";

/// Parse a locale code such as `en-GB` or the client form `en_GB`.
pub fn parse_locale(code: &str) -> I18nResult<LanguageIdentifier> {
    let normalized = code.trim().replace('_', "-");
    if normalized.is_empty() {
        return Err(I18nError::InvalidLanguageId(code.to_string()));
    }
    normalized
        .parse()
        .map_err(|_| I18nError::InvalidLanguageId(code.to_string()))
}

/// Parse a locale code, falling back to [`default_locale`] when it is invalid.
#[must_use]
pub fn parse_locale_or_default(code: &str) -> LanguageIdentifier {
    parse_locale(code).unwrap_or_else(|err| {
        tracing::debug!("{err}, using {DEFAULT_LOCALE_CODE}");
        default_locale()
    })
}

/// The default locale.
#[must_use]
pub fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE_CODE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default())
}

/// Strip everything but the language subtag, e.g. `en-GB` becomes `en`.
#[must_use]
pub fn language_only(locale: &LanguageIdentifier) -> LanguageIdentifier {
    LanguageIdentifier::from_parts(locale.language, None, None, &[])
}
