//! Unit tests for the provider resolver

use greet_domain::ports::providers::GreetingProvider;
use greet_domain::value_objects::GreetingStyle;
use greet_infrastructure::config::AppConfig;
use greet_infrastructure::di::resolve_providers;

#[test]
fn test_resolves_all_slots_with_default_bindings() {
    let providers = resolve_providers(&AppConfig::default()).expect("default bindings resolve");

    assert_eq!(providers.default.provider_name(), "default");
    assert_eq!(providers.formal.provider_name(), "formal");
    assert_eq!(providers.casual.provider_name(), "casual");
}

#[test]
fn test_slot_can_be_rebound_to_another_provider() {
    let mut config = AppConfig::default();
    config.providers.default = "casual".to_string();

    let providers = resolve_providers(&config).expect("rebinding resolves");

    assert_eq!(providers.default.provider_name(), "casual");
    assert_eq!(
        providers.default.greet("Sam").message,
        "Hey Sam! What's up? 👋"
    );
}

#[test]
fn test_unknown_binding_fails_with_slot_name() {
    let mut config = AppConfig::default();
    config.providers.formal = "sarcastic".to_string();

    let err = resolve_providers(&config).expect_err("unknown binding should fail");
    let message = err.to_string();

    assert!(message.contains("formal"));
    assert!(message.contains("sarcastic"));
}

#[test]
fn test_for_style_returns_the_matching_slot() {
    let providers = resolve_providers(&AppConfig::default()).expect("default bindings resolve");

    for style in GreetingStyle::ALL {
        assert_eq!(providers.for_style(style).provider_name(), style.as_str());
    }
}
