//! Predefined translations for vanilla client keys.
//!
//! Keys follow the `en_GB.lang` file of the Bedrock resource pack; the
//! leading `%` tells the client to look the key up.

use crate::key::ConstKey;
use crate::translation::Translation;
use once_cell::sync::Lazy;

/// Broadcast when a player joins. One parameter: the player name.
pub static MESSAGE_JOIN: Lazy<Translation> = Lazy::new(|| {
    Translation::new(
        ConstKey::new("%multiplayer.player.joined"),
        1,
        "%v joined the game",
    )
    .with_wrap("<yellow>%v</yellow>")
});

/// Broadcast when a player leaves. One parameter: the player name.
pub static MESSAGE_QUIT: Lazy<Translation> = Lazy::new(|| {
    Translation::new(
        ConstKey::new("%multiplayer.player.left"),
        1,
        "%v left the game",
    )
    .with_wrap("<yellow>%v</yellow>")
});

/// Disconnect screen text when the server closes a connection.
pub static MESSAGE_SERVER_DISCONNECT: Lazy<Translation> = Lazy::new(|| {
    Translation::new(
        ConstKey::new("%disconnect.disconnected"),
        0,
        "Disconnected by Server",
    )
    .with_wrap("<yellow>%v</yellow>")
});

/// Command parse failure. Parameters: the text before, at and after the
/// offending value.
pub static MESSAGE_COMMAND_SYNTAX: Lazy<Translation> = Lazy::new(|| {
    Translation::new(
        ConstKey::new("%commands.generic.syntax"),
        3,
        r#"Syntax error: unexpected value: at "%v>>%v<<%v""#,
    )
});

/// Command usage hint. One parameter: the usage line.
pub static MESSAGE_COMMAND_USAGE: Lazy<Translation> = Lazy::new(|| {
    Translation::new(ConstKey::new("%commands.generic.usage"), 1, "Usage: %v")
});

/// Unknown command. One parameter: the command name.
pub static MESSAGE_COMMAND_UNKNOWN: Lazy<Translation> = Lazy::new(|| {
    Translation::new(
        ConstKey::new("%commands.generic.unknown"),
        1,
        r#"Unknown command: "%v": Please check that the command exists and that you have permission to use it."#,
    )
});

/// A target selector matched nothing.
pub static MESSAGE_COMMAND_NO_TARGETS: Lazy<Translation> = Lazy::new(|| {
    Translation::new(
        ConstKey::new("%commands.generic.noTargetMatch"),
        0,
        "No targets matched selector",
    )
});

/// Every predefined translation, in declaration order.
#[must_use]
pub fn catalog() -> Vec<&'static Translation> {
    vec![
        &*MESSAGE_JOIN,
        &*MESSAGE_QUIT,
        &*MESSAGE_SERVER_DISCONNECT,
        &*MESSAGE_COMMAND_SYNTAX,
        &*MESSAGE_COMMAND_USAGE,
        &*MESSAGE_COMMAND_UNKNOWN,
        &*MESSAGE_COMMAND_NO_TARGETS,
    ]
}
