//! Unit tests for the Greeting value object

use greet_domain::value_objects::Greeting;

#[test]
fn test_greeting_new() {
    let greeting = Greeting::new("Hello, Android!");

    assert_eq!(greeting.message, "Hello, Android!");
}

#[test]
fn test_greeting_value_equality() {
    let a = Greeting::new("Hello, Android!");
    let b = Greeting::new("Hello, Android!");
    let c = Greeting::new("Hello, iOS!");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_greeting_accepts_empty_message() {
    let greeting = Greeting::new("");

    assert_eq!(greeting.message, "");
    assert_eq!(greeting, Greeting::new(String::new()));
}

#[test]
fn test_greeting_accepts_unicode_message() {
    let greeting = Greeting::new("Hey José! What's up? 👋");

    assert_eq!(greeting.message, "Hey José! What's up? 👋");
}

#[test]
fn test_greeting_display_renders_message() {
    let greeting = Greeting::new("Good day, Dr. Johnson.");

    assert_eq!(greeting.to_string(), "Good day, Dr. Johnson.");
}

#[test]
fn test_greeting_serialization() {
    let greeting = Greeting::new("Hello, Android!");
    let json = serde_json::to_string(&greeting).expect("serialization should succeed");
    let deserialized: Greeting =
        serde_json::from_str(&json).expect("deserialization should succeed");

    assert_eq!(greeting, deserialized);
}
