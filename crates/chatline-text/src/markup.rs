//! Colour markup expansion.
//!
//! Patterns use HTML-like tags named after a [`Format`], for example
//! `<yellow>%v</yellow>` or `<bold><red>!</red></bold>`. Opening tags emit
//! the format code. Closing tags emit a reset and then re-apply every format
//! still open, so nested tags restore the outer colour.
//!
//! # Failure Modes
//!
//! | Input | Behavior |
//! |-------|----------|
//! | Unknown tag | Kept as literal text |
//! | Closing tag with no matching open tag | Kept as literal text |
//! | `<` without `>` | Kept as literal text |
//! | `<` followed by anything but a tag name, such as `<%v>` | `<` kept as literal text, the rest is expanded |
//! | Second `%v` in a pattern | Rendered as `%!v(MISSING)` |

use crate::format::{Format, FORMAT_PREFIX};

/// The substitution marker.
pub const MARKER: &str = "%v";

/// Expands markup in `pattern` and substitutes `value` at its marker.
///
/// `value` is inserted verbatim: tags inside it are not expanded, so text
/// supplied by players cannot inject formatting.
#[must_use]
pub fn colourf(pattern: &str, value: &str) -> String {
    expand(pattern, Some(value))
}

/// Expands markup in `pattern` without substituting anything.
///
/// Markers are left in place; `%%` still collapses to `%`.
#[must_use]
pub fn colour(pattern: &str) -> String {
    expand(pattern, None)
}

/// Removes every formatting code from `text`.
#[must_use]
pub fn clean(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch == FORMAT_PREFIX {
            // Skip the code character as well.
            chars.next();
        } else {
            result.push(ch);
        }
    }

    result
}

fn expand(pattern: &str, value: Option<&str>) -> String {
    let mut result = String::with_capacity(pattern.len() + value.map_or(0, str::len) + 8);
    let mut open: Vec<Format> = Vec::new();
    let mut value = value;
    let mut substituted = false;
    let mut rest = pattern;

    while let Some(ch) = rest.chars().next() {
        match ch {
            '%' if rest.starts_with("%%") => {
                result.push('%');
                rest = &rest[2..];
            }
            '%' if rest.starts_with(MARKER) => {
                match value.take() {
                    Some(v) => {
                        result.push_str(v);
                        substituted = true;
                    }
                    None if substituted => result.push_str("%!v(MISSING)"),
                    None => result.push_str(MARKER),
                }
                rest = &rest[MARKER.len()..];
            }
            '<' => match rest.find('>').filter(|&end| is_tag_name(&rest[1..end])) {
                Some(end) => {
                    let tag = &rest[1..end];
                    if !apply_tag(tag, &mut open, &mut result) {
                        result.push_str(&rest[..=end]);
                    }
                    rest = &rest[end + 1..];
                }
                None => {
                    result.push('<');
                    rest = &rest[1..];
                }
            },
            _ => {
                result.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    result
}

/// Whether `text` between `<` and `>` has the shape of a tag, such as
/// `dark-aqua` or `/bold`.
fn is_tag_name(text: &str) -> bool {
    let name = text.strip_prefix('/').unwrap_or(text);
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_lowercase() || b == b'-')
}

/// Applies a single tag to the output, returning false when it is not markup.
fn apply_tag(tag: &str, open: &mut Vec<Format>, out: &mut String) -> bool {
    if let Some(name) = tag.strip_prefix('/') {
        let Some(format) = Format::from_tag(name) else {
            return false;
        };
        let Some(index) = open.iter().rposition(|f| *f == format) else {
            return false;
        };
        open.remove(index);
        out.push(FORMAT_PREFIX);
        out.push('r');
        for format in open.iter() {
            out.push(FORMAT_PREFIX);
            out.push(format.code());
        }
        return true;
    }

    match Format::from_tag(tag) {
        Some(format) => {
            open.push(format);
            out.push(FORMAT_PREFIX);
            out.push(format.code());
            true
        }
        None => false,
    }
}
