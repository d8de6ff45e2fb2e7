//! Integration tests for chatline crate.
//!
//! These tests drive the server the way the console loop does and check
//! what reaches players and the console.

use chatline::{ChatServer, ConsoleSink, PacketKind, ServerError};
use chatline_common::test_utils::init_test_logging;
use chatline_common::test_utils::property_testing::player_name_strategy;
use chatline_config::Config;
use chatline_i18n::{I18nError, MESSAGE_JOIN};
use proptest::prelude::*;

#[test]
fn test_join_and_quit_flow() {
    init_test_logging();

    let mut server = ChatServer::new(Config::default());
    server.join("Steve", "en_GB").unwrap();
    server.join("Alex", "ja_JP").unwrap();
    server.drain();

    server.quit("Alex").unwrap();
    let packets = server.drain();
    assert_eq!(packets.len(), 1);

    let (player, packet) = &packets[0];
    assert_eq!(player, "Steve");
    assert_eq!(packet.kind, PacketKind::Translation);
    assert_eq!(packet.message, "§e%multiplayer.player.left§r");
    assert_eq!(packet.parameters, vec!["Alex".to_string()]);
    assert_eq!(server.players(), vec!["Steve"]);
}

#[test]
fn test_invalid_locale_falls_back() {
    let mut server = ChatServer::new(Config::default());
    server.join("Steve", "???").unwrap();
    let session = server.session("Steve").unwrap();
    assert_eq!(session.locale().to_string(), "en-US");
}

#[test]
fn test_unknown_command_is_sent_as_translation() {
    let mut server = ChatServer::new(Config::default());
    server.join("Steve", "en").unwrap();
    server.drain();

    server.command("Steve", "/fly").unwrap();
    let packets = server.drain();
    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0].1.message, "%commands.generic.unknown");
    assert_eq!(packets[0].1.parameters, vec!["fly".to_string()]);
}

#[test]
fn test_console_sees_fallback_text() {
    let sink = ConsoleSink::default();
    assert_eq!(sink.render(&MESSAGE_JOIN.fill(["Steve"])), "Steve joined the game");
}

#[test]
fn test_error_conversions() {
    let err: ServerError = I18nError::InvalidLanguageId("xx yy".to_string()).into();
    assert_eq!(
        err.to_string(),
        "Localization error: Invalid language identifier: xx yy"
    );
}

#[test]
fn test_packets_serialize_for_transport() {
    let mut server = ChatServer::new(Config::default());
    server.join("Steve", "en").unwrap();
    let packets = server.drain();
    let json = packets[0].1.to_json().unwrap();
    assert_eq!(json["kind"], "translation");
    assert_eq!(json["parameters"][0], "Steve");
}

proptest! {
    #[test]
    fn test_join_packet_carries_name_verbatim(name in player_name_strategy()) {
        let mut server = ChatServer::new(Config::default());
        server.join(&name, "en_US").unwrap();
        let packets = server.drain();

        prop_assert_eq!(packets.len(), 1);
        prop_assert_eq!(&packets[0].1.message, "§e%multiplayer.player.joined§r");
        prop_assert_eq!(&packets[0].1.parameters, &vec![name.clone()]);
        prop_assert_eq!(
            ConsoleSink::default().render(&MESSAGE_JOIN.fill([name.as_str()])),
            format!("{name} joined the game")
        );
    }
}
