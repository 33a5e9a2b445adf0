//! # Greet
//!
//! A small greeting library demonstrating layered architecture and
//! explicit dependency-injection composition: value objects in a domain
//! crate, use cases in an application crate, pluggable providers with
//! compile-time registration, and a composition root that resolves
//! qualifier-tagged bindings once at startup.
//!
//! ## Example
//!
//! ```rust
//! use greet::infrastructure::config::AppConfig;
//! use greet::infrastructure::di::init_app;
//!
//! let context = init_app(AppConfig::default()).expect("default bindings resolve");
//!
//! let greeting = context.greeting().execute("Android");
//! assert_eq!(greeting.message, "Hello, Android!");
//!
//! let casual = context.contextual_greeting().execute("Alex");
//! assert_eq!(casual.message, "Hey Alex! What's up? 👋");
//! ```
//!
//! ## Architecture
//!
//! The workspace follows Clean Architecture principles:
//!
//! - `domain` - Core value objects and the provider port
//! - `application` - Use cases, provider registry, session store
//! - `providers` - Concrete greeting providers (default, formal, casual)
//! - `infrastructure` - Config, logging, and the DI composition root

/// Domain layer - value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use greet_domain::*;
}

/// Application layer - use cases, registry, and sessions
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use greet_application::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use greet_providers::*;
}

/// Infrastructure layer - DI, config, and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use greet_infrastructure::*;
}

// Convenience re-exports of the types almost every consumer touches
pub use greet_application::use_cases::GetGreetingUseCase;
pub use greet_domain::value_objects::{Greeting, GreetingStyle};
pub use greet_infrastructure::di::{AppContext, init_app};
