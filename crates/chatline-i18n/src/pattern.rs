//! Positional `%v` formatting for fallback patterns.
//!
//! `%v` is replaced by the next argument and `%%` by a literal `%`. Any
//! other `%` is copied as-is. Substitution is a single pass: text coming
//! from arguments is never scanned for markers.

use chatline_text::MARKER;
use std::fmt::{Display, Write};

/// Count the `%v` markers in `pattern`, ignoring `%%` escapes.
#[must_use]
pub fn count_markers(pattern: &str) -> usize {
    let mut count = 0;
    let mut rest = pattern;

    while let Some(index) = rest.find('%') {
        rest = &rest[index..];
        if rest.starts_with("%%") {
            rest = &rest[2..];
        } else if rest.starts_with(MARKER) {
            count += 1;
            rest = &rest[MARKER.len()..];
        } else {
            rest = &rest[1..];
        }
    }

    count
}

/// Substitute `values` into the markers of `pattern` in order.
///
/// Markers without a value render as `%!v(MISSING)`; values without a marker
/// are appended as `%!(EXTRA a, b)`.
#[must_use]
pub fn format_positional<T: Display>(pattern: &str, values: &[T]) -> String {
    let mut result = String::with_capacity(pattern.len() + values.len() * 8);
    let mut values = values.iter();
    let mut rest = pattern;

    while let Some(index) = rest.find('%') {
        result.push_str(&rest[..index]);
        rest = &rest[index..];
        if rest.starts_with("%%") {
            result.push('%');
            rest = &rest[2..];
        } else if rest.starts_with(MARKER) {
            match values.next() {
                // Writing to a String cannot fail.
                Some(value) => {
                    let _ = write!(result, "{value}");
                }
                None => result.push_str("%!v(MISSING)"),
            }
            rest = &rest[MARKER.len()..];
        } else {
            result.push('%');
            rest = &rest[1..];
        }
    }
    result.push_str(rest);

    let extra: Vec<String> = values.map(ToString::to_string).collect();
    if !extra.is_empty() {
        let _ = write!(result, "%!(EXTRA {})", extra.join(", "));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_markers() {
        assert_eq!(count_markers("Disconnected by Server"), 0);
        assert_eq!(count_markers("%v joined the game"), 1);
        assert_eq!(count_markers(r#"Syntax error: unexpected value: at "%v>>%v<<%v""#), 3);
        assert_eq!(count_markers("100%% sure, %v"), 1);
        assert_eq!(count_markers("%%v is escaped"), 0);
        assert_eq!(count_markers("trailing %"), 0);
    }

    #[test]
    fn test_format_in_order() {
        assert_eq!(
            format_positional(r#"at "%v>>%v<<%v""#, &["/give ", "@q", " stone"]),
            r#"at "/give >>@q<< stone""#
        );
    }

    #[test]
    fn test_format_escapes_and_stray_percent() {
        assert_eq!(format_positional("%v%% done", &[80]), "80% done");
        assert_eq!(format_positional("50% off", &[] as &[&str]), "50% off");
    }

    #[test]
    fn test_arguments_are_not_rescanned() {
        assert_eq!(format_positional("%v and %v", &["%v", "b"]), "%v and b");
    }

    #[test]
    fn test_missing_and_extra() {
        assert_eq!(format_positional("%v and %v", &["a"]), "a and %!v(MISSING)");
        assert_eq!(format_positional("%v", &["a", "b", "c"]), "a%!(EXTRA b, c)");
    }
}
