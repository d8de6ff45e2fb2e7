//! # Chatline Config
//!
//! Server configuration for Chatline: a flat settings object with defaults,
//! loaded from TOML with environment variable overrides and validated
//! before use.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::*;
pub use schema::*;
pub use validator::*;
