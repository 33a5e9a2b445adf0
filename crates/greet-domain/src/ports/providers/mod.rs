//! Provider Ports
//!
//! Port traits for pluggable providers. Multiple implementations of the
//! same port coexist, distinguished by registry name (the qualifier).

/// Greeting provider port
pub mod greeting;

pub use greeting::GreetingProvider;
