//! # Chatline Text
//!
//! Decoration of chat text: expansion of HTML-like colour and style tags
//! into Bedrock `§` formatting codes, with a single `%v` substitution slot.
//!
//! # Example
//!
//! ```rust
//! use chatline_text::{clean, colourf};
//!
//! let line = colourf("<yellow>%v</yellow>", "Steve joined the game");
//! assert_eq!(line, "§eSteve joined the game§r");
//! assert_eq!(clean(&line), "Steve joined the game");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod format;
pub mod markup;

pub use format::{Format, FORMAT_PREFIX};
pub use markup::{clean, colour, colourf, MARKER};
