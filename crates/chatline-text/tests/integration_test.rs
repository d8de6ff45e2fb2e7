//! Integration tests for chatline-text crate.

use chatline_common::test_utils::property_testing::plain_text_strategy;
use chatline_text::{clean, colourf, Format};
use proptest::prelude::*;

#[test]
fn test_every_tag_expands_to_its_code() {
    for format in Format::all() {
        let pattern = format!("<{}>%v</{}>", format.tag(), format.tag());
        assert_eq!(colourf(&pattern, "x"), format!("{format}x§r"));
    }
}

#[test]
fn test_format_serializes_as_tag_name() {
    let json = serde_json::to_string(&Format::DarkAqua).unwrap();
    assert_eq!(json, "\"dark-aqua\"");
    let parsed: Format = serde_json::from_str("\"gold\"").unwrap();
    assert_eq!(parsed, Format::Gold);
}

#[test]
fn test_disconnect_line() {
    let line = colourf("<yellow>%v</yellow>", "Disconnected by Server");
    assert_eq!(line, "§eDisconnected by Server§r");
    assert_eq!(clean(&line), "Disconnected by Server");
}

proptest! {
    #[test]
    fn test_clean_recovers_plain_value(value in plain_text_strategy()) {
        let rendered = colourf("<bold><gold>%v</gold></bold>", &value);
        prop_assert_eq!(clean(&rendered), value);
    }

    #[test]
    fn test_identity_wrap_is_noop(value in plain_text_strategy()) {
        prop_assert_eq!(colourf("%v", &value), value);
    }
}
