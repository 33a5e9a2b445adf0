//! Greeting Value Object
//!
//! The single output type of the greeting core: an immutable message
//! wrapper with value equality.

use serde::{Deserialize, Serialize};

/// Value Object: Formatted Greeting
///
/// Represents one greeting message produced by a provider. Greetings are
/// compared by value: two greetings are equal iff their messages are
/// equal. A fresh instance is created on every provider invocation; there
/// is no identity or lifecycle beyond ordinary value semantics.
///
/// ## Business Rules
///
/// - The message is a pure function of the provider's template and the
///   input name; no hidden state affects it
/// - Any message string is valid, including the empty string
///
/// ## Example
///
/// ```rust
/// use greet_domain::value_objects::Greeting;
///
/// let greeting = Greeting::new("Hello, Android!");
/// assert_eq!(greeting.message, "Hello, Android!");
/// assert_eq!(greeting, Greeting::new("Hello, Android!"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Greeting {
    /// The formatted greeting message
    pub message: String,
}

impl Greeting {
    /// Create a new greeting wrapping the given message
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
