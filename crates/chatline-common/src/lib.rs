//! # Chatline Common
//!
//! Shared error type, structured logging and test helpers for Chatline.
//!
//! Every other crate in the workspace builds on the [`ChatError`] taxonomy
//! defined here and initialises `tracing` through [`init_logging`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{ChatError, Result};
pub use logging::{init_default_logging, init_dev_logging, init_logging, LoggingConfig};
