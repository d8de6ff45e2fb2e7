//! Typed translation arguments

use fluent_bundle::FluentValue;
use std::fmt;

/// An argument passed to [`Translation::fill`](crate::Translation::fill).
///
/// The typed value is kept for server-side rendering; its `Display` form is
/// what gets sent to clients.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// Free text, such as a player name.
    Text(String),
    /// A whole number.
    Integer(i128),
    /// A floating point number.
    Float(f64),
}

impl Param {
    /// The value as a Fluent argument.
    ///
    /// Fluent keeps numbers as `f64`, so integers beyond 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_fluent(&self) -> FluentValue<'_> {
        match self {
            Self::Text(text) => FluentValue::from(text.as_str()),
            Self::Integer(n) => FluentValue::from(*n as f64),
            Self::Float(n) => FluentValue::from(*n),
        }
    }

    /// Whether the value is numeric.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Param {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<char> for Param {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Self::Text(value.to_string())
    }
}

macro_rules! from_integer {
    ($($int:ty)+) => {
        $(
            impl From<$int> for Param {
                fn from(value: $int) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )+
    };
}

from_integer!(i8 i16 i32 i64 i128 u8 u16 u32 u64);

impl From<isize> for Param {
    fn from(value: isize) -> Self {
        Self::Integer(value as i128)
    }
}

impl From<usize> for Param {
    fn from(value: usize) -> Self {
        Self::Integer(value as i128)
    }
}

impl From<f32> for Param {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
