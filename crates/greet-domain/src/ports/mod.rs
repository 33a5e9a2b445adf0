//! Domain Ports
//!
//! Traits that the outer layers implement. The domain depends only on
//! these contracts, never on concrete implementations.

/// Provider ports implemented by the providers crate
pub mod providers;

pub use providers::GreetingProvider;
