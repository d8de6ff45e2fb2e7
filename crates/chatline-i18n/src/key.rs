//! Translation identifier resolution
//!
//! A [`TranslationKey`] maps a locale to the identifier the client looks up
//! in its own language resources. Protocol keys are constant, so `&'static
//! str`, `String` and [`ConstKey`] ignore the locale. [`LocaleTable`] and
//! [`Computed`] vary the identifier per locale.

use crate::locale::language_only;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Resolves the identifier of a message for a locale.
///
/// Implementations must be pure: the same locale always yields the same
/// identifier.
pub trait TranslationKey: fmt::Debug + Send + Sync {
    /// Returns the identifier to send for `locale`.
    fn resolve(&self, locale: &LanguageIdentifier) -> Cow<'_, str>;
}

impl TranslationKey for &'static str {
    fn resolve(&self, _locale: &LanguageIdentifier) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TranslationKey for String {
    fn resolve(&self, _locale: &LanguageIdentifier) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

/// A key that is the same for every locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConstKey(Cow<'static, str>);

impl ConstKey {
    /// Wraps a static identifier.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    /// Wraps an owned identifier.
    #[must_use]
    pub const fn owned(key: String) -> Self {
        Self(Cow::Owned(key))
    }

    /// The identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TranslationKey for ConstKey {
    fn resolve(&self, _locale: &LanguageIdentifier) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

/// Per-locale identifiers with a default.
///
/// Lookup tries the exact locale, then its language subtag alone, then the
/// default.
#[derive(Debug, Clone)]
pub struct LocaleTable {
    default: String,
    entries: HashMap<LanguageIdentifier, String>,
}

impl LocaleTable {
    /// Create a table that resolves to `default` until entries are added.
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            entries: HashMap::new(),
        }
    }

    /// Add or replace the identifier for a locale.
    #[must_use]
    pub fn with(mut self, locale: LanguageIdentifier, key: impl Into<String>) -> Self {
        self.entries.insert(locale, key.into());
        self
    }

    /// Number of locale-specific entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether only the default is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TranslationKey for LocaleTable {
    fn resolve(&self, locale: &LanguageIdentifier) -> Cow<'_, str> {
        let key = self
            .entries
            .get(locale)
            .or_else(|| self.entries.get(&language_only(locale)))
            .unwrap_or(&self.default);
        Cow::Borrowed(key.as_str())
    }
}

/// A key computed by a function of the locale.
pub struct Computed<F>(F);

impl<F> Computed<F>
where
    F: Fn(&LanguageIdentifier) -> String + Send + Sync,
{
    /// Wrap a resolving function.
    pub const fn new(resolve: F) -> Self {
        Self(resolve)
    }
}

impl<F> fmt::Debug for Computed<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Computed(..)")
    }
}

impl<F> TranslationKey for Computed<F>
where
    F: Fn(&LanguageIdentifier) -> String + Send + Sync,
{
    fn resolve(&self, locale: &LanguageIdentifier) -> Cow<'_, str> {
        Cow::Owned((self.0)(locale))
    }
}
