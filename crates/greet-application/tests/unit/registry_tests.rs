//! Unit tests for the greeting provider registry
//!
//! greet-providers is a dev-dependency here so the real providers'
//! linkme registrations are linked into the test binary.

// Force-link greet-providers to ensure linkme registrations are included
extern crate greet_providers;

use greet_application::ports::registry::{
    GreetingProviderConfig, list_greeting_providers, resolve_greeting_provider,
};
use greet_domain::ports::providers::GreetingProvider;
use greet_domain::value_objects::Greeting;

#[test]
fn test_all_styles_are_registered() {
    let names: Vec<&str> = list_greeting_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    for expected in ["default", "formal", "casual"] {
        assert!(names.contains(&expected), "missing provider: {expected}");
    }
}

#[test]
fn test_resolve_default_provider() {
    let provider = resolve_greeting_provider(&GreetingProviderConfig::new("default"))
        .expect("default provider should resolve");

    assert_eq!(provider.provider_name(), "default");
    assert_eq!(provider.greet("Android"), Greeting::new("Hello, Android!"));
}

#[test]
fn test_resolve_formal_provider() {
    let provider = resolve_greeting_provider(&GreetingProviderConfig::new("formal"))
        .expect("formal provider should resolve");

    assert_eq!(
        provider.greet("Mr. Smith"),
        Greeting::new("Good day, Mr. Smith. It is my pleasure to make your acquaintance.")
    );
}

#[test]
fn test_resolve_casual_provider() {
    let provider = resolve_greeting_provider(&GreetingProviderConfig::new("casual"))
        .expect("casual provider should resolve");

    assert_eq!(
        provider.greet("Alex"),
        Greeting::new("Hey Alex! What's up? 👋")
    );
}

#[test]
fn test_resolve_unknown_provider_lists_available() {
    let err = resolve_greeting_provider(&GreetingProviderConfig::new("sarcastic"))
        .expect_err("unknown provider should not resolve");

    assert!(err.contains("Unknown greeting provider 'sarcastic'"));
    assert!(err.contains("default"));
    assert!(err.contains("formal"));
    assert!(err.contains("casual"));
}

#[test]
fn test_resolved_providers_are_fresh_instances_with_stable_output() {
    let first = resolve_greeting_provider(&GreetingProviderConfig::new("formal"))
        .expect("formal provider should resolve");
    let second = resolve_greeting_provider(&GreetingProviderConfig::new("formal"))
        .expect("formal provider should resolve");

    // Providers are stateless: output depends only on the input
    assert_eq!(first.greet("Ana"), second.greet("Ana"));
}
