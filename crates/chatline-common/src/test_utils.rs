//! Test utilities and shared test helpers for Chatline.
//!
//! Common fixtures and strategies used by unit and integration tests across
//! the workspace.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may already own the global subscriber.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Locale codes exercised by tests.
pub mod locale_fixtures {
    /// Locale codes with a region subtag.
    pub const REGIONAL: &[&str] = &["en-GB", "en-US", "de-DE", "fr-FR", "ja-JP"];

    /// Locale codes carrying only a language subtag.
    pub const LANGUAGE_ONLY: &[&str] = &["en", "de", "fr", "ja"];
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for generating player names as the client would send them.
    pub fn player_name_strategy() -> impl Strategy<Value = String> {
        r"[a-zA-Z0-9_ ]{1,16}".prop_map(|s| s.to_string())
    }

    /// Strategy for free text that never contains markup or markers.
    pub fn plain_text_strategy() -> impl Strategy<Value = String> {
        r"[a-zA-Z0-9 .,!?]{0,48}".prop_map(|s| s.to_string())
    }

    /// Strategy for argument lists of the given length.
    pub fn arguments_strategy(len: usize) -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec(plain_text_strategy(), len)
    }
}
