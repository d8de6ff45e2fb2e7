//! Translation templates and their filled-in messages.
//!
//! # Invariants
//!
//! 1. **Construction validates patterns**: a [`Translation`] built with
//!    [`Translation::new`] has exactly `params` markers in its fallback and
//!    exactly one in its wrap pattern.
//!
//! 2. **Argument count is exact**: [`Translation::fill`] only returns a
//!    [`Translated`] when given exactly `params` arguments.
//!
//! 3. **Thread safety**: both types are `Send + Sync` and immutable after
//!    construction.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Marker mismatch | Fallback or wrap pattern miscounted | `new`/`with_wrap` panic, `try_*` return [`I18nError::MarkerCount`] |
//! | Argument mismatch | Call site passes the wrong number of arguments | `fill` panics, `try_fill` returns [`I18nError::ParamCount`] |
//! | Zero template | `Translation::default()` filled | `fill` panics, `try_fill` returns [`I18nError::Unset`] |

use crate::error::{I18nError, I18nResult};
use crate::key::TranslationKey;
use crate::param::Param;
use crate::pattern::{count_markers, format_positional};
use chatline_text::{colourf, MARKER};
use fluent_bundle::FluentArgs;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::trace;
use unic_langid::LanguageIdentifier;

/// A message kind: an identifier resolver, the number of arguments it takes,
/// a fallback pattern for server-side rendering and a wrap pattern that
/// decorates either rendering.
#[derive(Debug, Clone)]
pub struct Translation {
    key: Arc<dyn TranslationKey>,
    params: usize,
    fallback: Cow<'static, str>,
    wrap: Option<Cow<'static, str>>,
}

impl Default for Translation {
    /// The zero translation. It reports [`Translation::is_zero`] and cannot
    /// be filled.
    fn default() -> Self {
        Self {
            key: Arc::new(""),
            params: 0,
            fallback: Cow::Borrowed(""),
            wrap: None,
        }
    }
}

impl Translation {
    /// Define a translation with an identity wrap.
    ///
    /// `fallback` should read like a standard translation of the message and
    /// contain one `%v` per parameter.
    ///
    /// # Panics
    ///
    /// Panics if `fallback` does not contain exactly `params` markers.
    pub fn new(
        key: impl TranslationKey + 'static,
        params: usize,
        fallback: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::try_new(key, params, fallback).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Define a translation, reporting a miscounted fallback as an error.
    pub fn try_new(
        key: impl TranslationKey + 'static,
        params: usize,
        fallback: impl Into<Cow<'static, str>>,
    ) -> I18nResult<Self> {
        let fallback = fallback.into();
        check_markers(&fallback, params)?;

        let translation = Self {
            key: Arc::new(key),
            params,
            fallback,
            wrap: Some(Cow::Borrowed(MARKER)),
        };
        trace!(key = ?translation.key, params, "defined translation");
        Ok(translation)
    }

    /// Return a copy whose renderings are placed into `pattern`.
    ///
    /// `pattern` holds exactly one `%v` and may use colour markup, such as
    /// `<yellow>%v</yellow>`. `self` is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` does not contain exactly one marker.
    #[must_use]
    pub fn with_wrap(&self, pattern: impl Into<Cow<'static, str>>) -> Self {
        self.try_with_wrap(pattern)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`Translation::with_wrap`], reporting a miscounted pattern as an
    /// error.
    pub fn try_with_wrap(&self, pattern: impl Into<Cow<'static, str>>) -> I18nResult<Self> {
        let pattern = pattern.into();
        check_markers(&pattern, 1)?;

        Ok(Self {
            wrap: Some(pattern),
            ..self.clone()
        })
    }

    /// Whether this is the zero translation rather than one built with
    /// [`Translation::new`].
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.wrap.is_none()
    }

    /// Fill the translation with its arguments.
    ///
    /// Every argument is rendered to its display form immediately.
    ///
    /// # Panics
    ///
    /// Panics if the number of arguments differs from [`Translation::params`]
    /// or if the translation is the zero value. Both indicate a defect at the
    /// call site.
    pub fn fill<I>(&self, args: I) -> Translated
    where
        I: IntoIterator,
        I::Item: Into<Param>,
    {
        self.try_fill(args).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Fill the translation, reporting a wrong argument count as an error.
    pub fn try_fill<I>(&self, args: I) -> I18nResult<Translated>
    where
        I: IntoIterator,
        I::Item: Into<Param>,
    {
        if self.is_zero() {
            return Err(I18nError::Unset);
        }

        let values: Vec<Param> = args.into_iter().map(Into::into).collect();
        if values.len() != self.params {
            return Err(I18nError::ParamCount {
                fallback: self.fallback.to_string(),
                expected: self.params,
                actual: values.len(),
            });
        }

        let params = values.iter().map(ToString::to_string).collect();
        Ok(Translated {
            translation: self.clone(),
            params,
            values,
        })
    }

    /// Resolve a translation that takes no arguments. Equal to filling it
    /// with nothing and calling [`Translated::resolve`].
    ///
    /// # Panics
    ///
    /// Panics if the translation requires arguments.
    #[must_use]
    pub fn resolve(&self, locale: &LanguageIdentifier) -> String {
        self.fill(Vec::<Param>::new()).resolve(locale)
    }

    /// The identifier resolver.
    #[must_use]
    pub fn key(&self) -> &dyn TranslationKey {
        self.key.as_ref()
    }

    /// Number of arguments [`Translation::fill`] expects.
    #[must_use]
    pub const fn params(&self) -> usize {
        self.params
    }

    /// The fallback pattern.
    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// The wrap pattern, `None` for the zero translation.
    #[must_use]
    pub fn wrap(&self) -> Option<&str> {
        self.wrap.as_deref()
    }

    fn wrap_pattern(&self) -> &str {
        self.wrap.as_deref().unwrap_or(MARKER)
    }
}

fn check_markers(pattern: &str, expected: usize) -> I18nResult<()> {
    let actual = count_markers(pattern);
    if actual == expected {
        Ok(())
    } else {
        Err(I18nError::MarkerCount {
            pattern: pattern.to_string(),
            expected,
            actual,
        })
    }
}

/// A [`Translation`] filled with its arguments.
///
/// Ready to send to a client with [`Translated::resolve`] and
/// [`Translated::params`], or to render locally with
/// [`Translated::fallback`]. Implements `Display` and `Error` through the
/// fallback rendering, so the same value works as a chat line and as the
/// reason an operation failed.
#[derive(Debug, Clone)]
pub struct Translated {
    translation: Translation,
    params: Vec<String>,
    values: Vec<Param>,
}

impl Translated {
    /// Resolve the identifier for `locale` and decorate it with the wrap
    /// pattern. The arguments are not substituted: the client does that
    /// using [`Translated::params`].
    #[must_use]
    pub fn resolve(&self, locale: &LanguageIdentifier) -> String {
        let key = self.translation.key.resolve(locale);
        colourf(self.translation.wrap_pattern(), &key)
    }

    /// The arguments in display form, in order.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The arguments as they were passed, in order.
    #[must_use]
    pub fn values(&self) -> &[Param] {
        &self.values
    }

    /// The arguments as Fluent arguments named `"0"`, `"1"`, ...
    #[must_use]
    pub fn fluent_args(&self) -> FluentArgs<'_> {
        let mut args = FluentArgs::with_capacity(self.values.len());
        for (index, value) in self.values.iter().enumerate() {
            args.set(index.to_string(), value.to_fluent());
        }
        args
    }

    /// Render the fallback pattern with the arguments and decorate the
    /// result with the wrap pattern.
    #[must_use]
    pub fn fallback(&self) -> String {
        let rendered = format_positional(&self.translation.fallback, &self.values);
        colourf(self.translation.wrap_pattern(), &rendered)
    }

    /// The translation this message was filled from.
    #[must_use]
    pub const fn translation(&self) -> &Translation {
        &self.translation
    }
}

impl fmt::Display for Translated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fallback())
    }
}

impl std::error::Error for Translated {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{ConstKey, LocaleTable};
    use crate::locale::parse_locale;

    fn joined() -> Translation {
        Translation::new(
            ConstKey::new("%multiplayer.player.joined"),
            1,
            "%v joined the game",
        )
        .with_wrap("<yellow>%v</yellow>")
    }

    #[test]
    fn test_new_uses_identity_wrap() {
        let t = Translation::new("%commands.generic.usage", 1, "Usage: %v");
        assert_eq!(t.wrap(), Some("%v"));
        assert!(!t.is_zero());
        assert_eq!(t.params(), 1);
        assert_eq!(t.fallback(), "Usage: %v");
    }

    #[test]
    fn test_default_is_zero() {
        let t = Translation::default();
        assert!(t.is_zero());
        assert_eq!(t.wrap(), None);
        assert!(matches!(t.try_fill(Vec::<Param>::new()), Err(I18nError::Unset)));
    }

    #[test]
    fn test_with_wrap_leaves_original() {
        let plain = Translation::new("%disconnect.disconnected", 0, "Disconnected by Server");
        let wrapped = plain.with_wrap("<red>%v</red>");
        assert_eq!(plain.wrap(), Some("%v"));
        assert_eq!(wrapped.wrap(), Some("<red>%v</red>"));
        assert_eq!(plain.resolve(&parse_locale("en").unwrap()), "%disconnect.disconnected");
    }

    #[test]
    fn test_try_new_marker_mismatch() {
        let err = Translation::try_new("%x", 2, "only %v").unwrap_err();
        assert_eq!(
            err,
            I18nError::MarkerCount {
                pattern: "only %v".to_string(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_try_with_wrap_marker_mismatch() {
        let t = Translation::new("%x", 0, "x");
        assert!(matches!(
            t.try_with_wrap("<yellow>no marker</yellow>"),
            Err(I18nError::MarkerCount { expected: 1, actual: 0, .. })
        ));
        assert!(t.try_with_wrap("%v%v").is_err());
    }

    #[test]
    #[should_panic(expected = "must contain exactly 1 markers, found 0")]
    fn test_with_wrap_panics_on_mismatch() {
        let _ = Translation::new("%x", 0, "x").with_wrap("nothing");
    }

    #[test]
    fn test_fill_and_render() {
        let msg = joined().fill(["Steve"]);
        assert_eq!(msg.params(), ["Steve"]);
        assert_eq!(msg.values(), [Param::from("Steve")]);
        assert_eq!(msg.fallback(), "§eSteve joined the game§r");
        assert_eq!(
            msg.resolve(&parse_locale("en-GB").unwrap()),
            "§e%multiplayer.player.joined§r"
        );
        assert_eq!(msg.translation().params(), 1);
    }

    #[test]
    fn test_try_fill_wrong_count() {
        let err = joined().try_fill(["x", "y"]).unwrap_err();
        assert_eq!(
            err,
            I18nError::ParamCount {
                fallback: "%v joined the game".to_string(),
                expected: 1,
                actual: 2,
            }
        );
    }

    #[test]
    #[should_panic(expected = "requires exactly 1 parameters, got 2")]
    fn test_fill_wrong_count_panics() {
        let _ = joined().fill(["x", "y"]);
    }

    #[test]
    #[should_panic(expected = "requires exactly 1 parameters, got 0")]
    fn test_resolve_only_requires_no_params() {
        let _ = joined().resolve(&parse_locale("en").unwrap());
    }

    #[test]
    fn test_resolve_uses_locale_table() {
        let t = Translation::new(
            LocaleTable::new("%chat.hello").with(parse_locale("fr").unwrap(), "%chat.bonjour"),
            0,
            "Hello",
        );
        assert_eq!(t.resolve(&parse_locale("fr-CA").unwrap()), "%chat.bonjour");
        assert_eq!(t.resolve(&parse_locale("en").unwrap()), "%chat.hello");
    }

    #[test]
    fn test_display_and_error_match_fallback() {
        let msg = joined().fill(["Alex"]);
        let as_error: Box<dyn std::error::Error + Send + Sync> = Box::new(msg.clone());
        assert_eq!(msg.to_string(), msg.fallback());
        assert_eq!(as_error.to_string(), msg.fallback());
    }

    #[test]
    fn test_fluent_args_are_positional() {
        let t = Translation::new("%commands.give.success", 2, "Gave %v * %v");
        let msg = t.fill([Param::from("stone"), Param::from(64)]);
        let args = msg.fluent_args();
        assert_eq!(args.get("0"), Some(&fluent_bundle::FluentValue::from("stone")));
        assert_eq!(args.get("1"), Some(&fluent_bundle::FluentValue::from(64.0_f64)));
        assert_eq!(msg.fallback(), "Gave stone * 64");
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translation>();
        assert_send_sync::<Translated>();
    }
}
