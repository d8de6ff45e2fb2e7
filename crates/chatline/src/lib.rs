//! # Chatline
//!
//! Chat handling for a Bedrock server: player messages are sent as
//! translation keys with parameters for the client to localize, while the
//! console and logs show the server-rendered fallback text.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod console;
pub mod error;
pub mod outbound;
pub mod server;

pub use console::*;
pub use error::*;
pub use outbound::*;
pub use server::*;
