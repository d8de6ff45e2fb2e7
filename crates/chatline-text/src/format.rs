//! Bedrock colour and style formatting codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Character that introduces a formatting code.
pub const FORMAT_PREFIX: char = '§';

/// A colour or style understood by the Bedrock client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Grey,
    DarkGrey,
    Blue,
    Green,
    Aqua,
    Red,
    Purple,
    Yellow,
    White,
    DarkYellow,
    Obfuscated,
    Bold,
    Italic,
}

impl Format {
    /// Code character following [`FORMAT_PREFIX`].
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Grey => '7',
            Self::DarkGrey => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::Purple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
            Self::DarkYellow => 'g',
            Self::Obfuscated => 'k',
            Self::Bold => 'l',
            Self::Italic => 'o',
        }
    }

    /// Tag name used in markup, e.g. `dark-blue` for `<dark-blue>`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark-blue",
            Self::DarkGreen => "dark-green",
            Self::DarkAqua => "dark-aqua",
            Self::DarkRed => "dark-red",
            Self::DarkPurple => "dark-purple",
            Self::Gold => "gold",
            Self::Grey => "grey",
            Self::DarkGrey => "dark-grey",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::DarkYellow => "dark-yellow",
            Self::Obfuscated => "obfuscated",
            Self::Bold => "bold",
            Self::Italic => "italic",
        }
    }

    /// Parse a markup tag name. `gray` and `dark-gray` are accepted as aliases.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "gray" => return Some(Self::Grey),
            "dark-gray" => return Some(Self::DarkGrey),
            _ => {}
        }
        Self::all().iter().copied().find(|format| format.tag() == tag)
    }

    /// Whether the format changes colour rather than style.
    #[must_use]
    pub const fn is_colour(self) -> bool {
        !matches!(self, Self::Obfuscated | Self::Bold | Self::Italic)
    }

    /// Every known format.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Black,
            Self::DarkBlue,
            Self::DarkGreen,
            Self::DarkAqua,
            Self::DarkRed,
            Self::DarkPurple,
            Self::Gold,
            Self::Grey,
            Self::DarkGrey,
            Self::Blue,
            Self::Green,
            Self::Aqua,
            Self::Red,
            Self::Purple,
            Self::Yellow,
            Self::White,
            Self::DarkYellow,
            Self::Obfuscated,
            Self::Bold,
            Self::Italic,
        ]
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{FORMAT_PREFIX}{}", self.code())
    }
}
