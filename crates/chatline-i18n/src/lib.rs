//! # Chatline I18n
//!
//! Deferred localization of player-facing messages.
//!
//! A [`Translation`] is defined once per message kind. Filling it with
//! arguments yields a [`Translated`] value that renders two ways:
//!
//! - [`Translated::resolve`] produces the translation identifier for a
//!   locale. Sent together with [`Translated::params`], it lets the client
//!   localize the message with its own language resources.
//! - [`Translated::fallback`] substitutes the arguments on the server, for
//!   consoles, logs and error values. `Display` and `Error` both use it.
//!
//! # Example
//!
//! ```rust
//! use chatline_i18n::{locale::parse_locale, translate, MESSAGE_JOIN};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let joined = translate!(MESSAGE_JOIN, "Steve");
//! let locale = parse_locale("en-GB")?;
//!
//! assert_eq!(joined.resolve(&locale), "§e%multiplayer.player.joined§r");
//! assert_eq!(joined.params(), ["Steve"]);
//! assert_eq!(joined.to_string(), "§eSteve joined the game§r");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod key;
pub mod locale;
pub mod messages;
pub mod param;
pub mod pattern;
pub mod translation;

pub use error::{I18nError, I18nResult};
pub use key::{Computed, ConstKey, LocaleTable, TranslationKey};
pub use messages::*;
pub use param::Param;
pub use translation::{Translated, Translation};

// Re-export the locale type callers pass to resolvers
pub use unic_langid::LanguageIdentifier;

/// Fills a [`Translation`] with arguments of mixed types.
///
/// Each argument is converted with [`Param::from`]. Like
/// [`Translation::fill`], this panics when the argument count does not
/// match the template.
///
/// ```rust
/// use chatline_i18n::{translate, MESSAGE_COMMAND_SYNTAX, MESSAGE_SERVER_DISCONNECT};
///
/// let syntax = translate!(MESSAGE_COMMAND_SYNTAX, "/tp ", 12, " extra");
/// assert_eq!(syntax.params(), ["/tp ", "12", " extra"]);
///
/// let disconnect = translate!(MESSAGE_SERVER_DISCONNECT);
/// assert!(disconnect.params().is_empty());
/// ```
#[macro_export]
macro_rules! translate {
    ($translation:expr $(,)?) => {
        $translation.fill(::std::vec::Vec::<$crate::Param>::new())
    };
    ($translation:expr, $($arg:expr),+ $(,)?) => {
        $translation.fill(::std::vec![$($crate::Param::from($arg)),+])
    };
}
