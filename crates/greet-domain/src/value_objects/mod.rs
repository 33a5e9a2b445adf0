//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Greeting`] | Formatted greeting message produced by a provider |
//! | [`GreetingStyle`] | Symbolic tag selecting a provider binding |
//! | [`UserSession`] | Auxiliary user-session record for the session store |

/// Greeting message value object
pub mod greeting;
/// User session value object
pub mod session;
/// Type definitions for dynamic domain concepts
pub mod types;

// Re-export commonly used value objects
pub use greeting::Greeting;
pub use session::UserSession;
pub use types::GreetingStyle;
