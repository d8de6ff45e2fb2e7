//! Integration tests for chatline-i18n crate.
//!
//! These tests cover both renderings of filled translations and the
//! predefined catalog.

use chatline_common::test_utils::init_test_logging;
use chatline_common::test_utils::locale_fixtures::{LANGUAGE_ONLY, REGIONAL};
use chatline_common::test_utils::property_testing::{arguments_strategy, player_name_strategy};
use chatline_i18n::locale::parse_locale;
use chatline_i18n::{
    translate, ConstKey, I18nError, LanguageIdentifier, Param, Translation,
    MESSAGE_COMMAND_SYNTAX, MESSAGE_JOIN, MESSAGE_QUIT, MESSAGE_SERVER_DISCONNECT,
};
use proptest::prelude::*;

fn all_locales() -> Vec<LanguageIdentifier> {
    REGIONAL
        .iter()
        .chain(LANGUAGE_ONLY)
        .map(|code| parse_locale(code).unwrap())
        .collect()
}

fn template_with(params: usize) -> Translation {
    let fallback = vec!["%v"; params].join(" | ");
    Translation::new(ConstKey::new("%test.message"), params, fallback)
        .with_wrap("<gold>%v</gold>")
}

#[test]
fn test_player_joined_scenario() {
    init_test_logging();

    let msg = MESSAGE_JOIN.fill(["Steve"]);
    assert_eq!(msg.fallback(), "§eSteve joined the game§r");
    assert_eq!(msg.params(), ["Steve"]);
    for locale in all_locales() {
        assert_eq!(msg.resolve(&locale), "§e%multiplayer.player.joined§r");
    }
}

#[test]
fn test_server_disconnect_scenario() {
    let msg = translate!(MESSAGE_SERVER_DISCONNECT);
    assert_eq!(msg.fallback(), "§eDisconnected by Server§r");
    assert!(msg.params().is_empty());
    for locale in all_locales() {
        assert_eq!(msg.fallback(), "§eDisconnected by Server§r");
        assert_eq!(
            MESSAGE_SERVER_DISCONNECT.resolve(&locale),
            "§e%disconnect.disconnected§r"
        );
    }
}

#[test]
#[should_panic(expected = "requires exactly 1 parameters, got 2")]
fn test_too_many_arguments_scenario() {
    let _ = MESSAGE_QUIT.fill(["x", "y"]);
}

#[test]
fn test_try_fill_never_returns_message_on_mismatch() {
    for count in [0, 2, 3] {
        let result = MESSAGE_QUIT.try_fill(vec!["arg"; count]);
        assert!(matches!(
            result,
            Err(I18nError::ParamCount { expected: 1, actual, .. }) if actual == count
        ));
    }
}

#[test]
fn test_mixed_argument_types() {
    let msg = translate!(MESSAGE_COMMAND_SYNTAX, "/tp @s ", 1.5, " ~");
    assert_eq!(msg.params(), ["/tp @s ", "1.5", " ~"]);
    assert_eq!(msg.values()[1], Param::Float(1.5));
    assert_eq!(
        msg.to_string(),
        r#"Syntax error: unexpected value: at "/tp @s >>1.5<< ~""#
    );
}

#[test]
fn test_chat_prefix_wrap_keeps_argument() {
    let chat = Translation::new(ConstKey::new("%chat.type.text"), 1, "%v")
        .with_wrap("<%v>");
    let msg = chat.fill(["Steve"]);
    let locale = parse_locale("en-GB").unwrap();

    assert_eq!(msg.fallback(), "<Steve>");
    assert_eq!(msg.resolve(&locale), "<%chat.type.text>");
}

#[test]
fn test_message_as_error_value() {
    fn kick(name: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(MESSAGE_QUIT.fill([name])))
    }

    let err = kick("Alex").unwrap_err();
    assert_eq!(err.to_string(), "§eAlex left the game§r");
}

#[test]
fn test_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| std::thread::spawn(move || MESSAGE_JOIN.fill([format!("player{i}")]).fallback()))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            format!("§eplayer{i} joined the game§r")
        );
    }
}

proptest! {
    #[test]
    fn test_params_match_arguments(n in 0usize..6, seed in arguments_strategy(6)) {
        let args: Vec<String> = seed.into_iter().take(n).collect();
        let msg = template_with(n).fill(args.clone());
        prop_assert_eq!(msg.params().len(), n);
        prop_assert_eq!(msg.params(), args.as_slice());
    }

    #[test]
    fn test_wrong_count_is_rejected(n in 0usize..6, m in 0usize..6) {
        prop_assume!(n != m);
        let result = template_with(n).try_fill(vec!["a"; m]);
        prop_assert!(result.is_err());
    }

    #[test]
    fn test_resolve_ignores_arguments(a in player_name_strategy(), b in player_name_strategy()) {
        let locale = parse_locale("en-GB").unwrap();
        prop_assert_eq!(MESSAGE_JOIN.fill([a]).resolve(&locale), MESSAGE_JOIN.fill([b]).resolve(&locale));
    }

    #[test]
    fn test_fallback_substitutes_in_order(args in arguments_strategy(3)) {
        let msg = template_with(3).fill(args.clone());
        let expected = format!("§6{} | {} | {}§r", args[0], args[1], args[2]);
        prop_assert_eq!(msg.fallback(), expected);
    }

    #[test]
    fn test_renderings_are_idempotent(name in player_name_strategy()) {
        let msg = MESSAGE_JOIN.fill([name]);
        let locale = parse_locale("de-DE").unwrap();
        prop_assert_eq!(msg.fallback(), msg.fallback());
        prop_assert_eq!(msg.resolve(&locale), msg.resolve(&locale));
        prop_assert_eq!(msg.to_string(), msg.fallback());
    }
}
