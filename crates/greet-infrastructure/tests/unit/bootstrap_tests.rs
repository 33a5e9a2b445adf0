//! Unit tests for the AppContext composition root

use std::sync::Arc;

use greet_domain::ports::providers::GreetingProvider;
use greet_domain::value_objects::GreetingStyle;
use greet_infrastructure::config::AppConfig;
use greet_infrastructure::di::init_app;

#[test]
fn test_init_app_wires_use_cases_to_their_bindings() {
    let context = init_app(AppConfig::default()).expect("default bindings resolve");

    assert_eq!(
        context.greeting().execute("Android").message,
        "Hello, Android!"
    );
    assert_eq!(
        context.formal_greeting().execute("Mr. Smith").message,
        "Good day, Mr. Smith. It is my pleasure to make your acquaintance."
    );
    assert_eq!(
        context.casual_greeting().execute("Alex").message,
        "Hey Alex! What's up? 👋"
    );
}

#[test]
fn test_contextual_use_case_routes_on_formality() {
    let context = init_app(AppConfig::default()).expect("default bindings resolve");
    let contextual = context.contextual_greeting();

    assert_eq!(
        contextual.execute_with_formality("Dr. Johnson", true),
        context.provider_for(GreetingStyle::Formal).greet("Dr. Johnson")
    );
    assert_eq!(
        contextual.execute("Sam"),
        context.provider_for(GreetingStyle::Casual).greet("Sam")
    );
}

#[test]
fn test_provider_bindings_are_singleton_scoped() {
    let context = init_app(AppConfig::default()).expect("default bindings resolve");

    let first = context.provider_for(GreetingStyle::Formal);
    let second = context.provider_for(GreetingStyle::Formal);

    // Same instance on every resolution within the process lifetime
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_init_app_fails_on_unknown_binding() {
    let mut config = AppConfig::default();
    config.providers.casual = "nonexistent".to_string();

    assert!(init_app(config).is_err());
}

#[test]
fn test_context_exposes_session_store() {
    let context = init_app(AppConfig::default()).expect("default bindings resolve");

    context.sessions().start_session("user123", "Alice", true);
    let session = context
        .sessions()
        .current_session()
        .expect("session should be active");

    assert_eq!(session.user_name, "Alice");
    context.sessions().end_session();
    assert!(!context.sessions().is_session_active());
}
