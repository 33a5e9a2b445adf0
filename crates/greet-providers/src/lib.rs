//! # Greet Providers
//!
//! Concrete greeting provider implementations for the greet library.
//!
//! Each provider is a stateless unit struct implementing the
//! [`GreetingProvider`](greet_domain::ports::providers::GreetingProvider)
//! port with one fixed message template. Providers register themselves
//! into the application layer's linkme registry at compile time and
//! implement `shaku::Component` so they can serve as defaults in the
//! infrastructure DI modules.

/// Greeting provider implementations
pub mod greeting;

pub use greeting::{CasualGreetingProvider, DefaultGreetingProvider, FormalGreetingProvider};
