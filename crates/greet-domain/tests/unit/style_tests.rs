//! Unit tests for the GreetingStyle tag

use std::str::FromStr;

use greet_domain::error::Error;
use greet_domain::value_objects::GreetingStyle;

#[test]
fn test_style_as_str_round_trip() {
    for style in GreetingStyle::ALL {
        let parsed = GreetingStyle::from_str(style.as_str()).expect("canonical name should parse");
        assert_eq!(parsed, style);
    }
}

#[test]
fn test_style_parse_is_case_insensitive() {
    assert_eq!(
        GreetingStyle::from_str("Formal").expect("should parse"),
        GreetingStyle::Formal
    );
    assert_eq!(
        GreetingStyle::from_str("CASUAL").expect("should parse"),
        GreetingStyle::Casual
    );
}

#[test]
fn test_style_parse_rejects_unknown_names() {
    let err = GreetingStyle::from_str("sarcastic").expect_err("should reject unknown style");

    match err {
        Error::InvalidArgument { message } => assert!(message.contains("sarcastic")),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_style_display_matches_registry_name() {
    assert_eq!(GreetingStyle::Default.to_string(), "default");
    assert_eq!(GreetingStyle::Formal.to_string(), "formal");
    assert_eq!(GreetingStyle::Casual.to_string(), "casual");
}

#[test]
fn test_style_serde_uses_lowercase_names() {
    let json = serde_json::to_string(&GreetingStyle::Formal).expect("serialization");
    assert_eq!(json, "\"formal\"");

    let style: GreetingStyle = serde_json::from_str("\"casual\"").expect("deserialization");
    assert_eq!(style, GreetingStyle::Casual);
}
