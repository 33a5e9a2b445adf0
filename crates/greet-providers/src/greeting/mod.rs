//! Greeting Provider Implementations
//!
//! Provides the available greeting templates behind the
//! [`GreetingProvider`](greet_domain::ports::providers::GreetingProvider) port.
//!
//! ## Available Providers
//!
//! | Provider | Registry Name | Template |
//! |----------|---------------|----------|
//! | [`DefaultGreetingProvider`] | `default` | `Hello, {name}!` |
//! | [`FormalGreetingProvider`] | `formal` | `Good day, {name}. It is my pleasure to make your acquaintance.` |
//! | [`CasualGreetingProvider`] | `casual` | `Hey {name}! What's up? 👋` |
//!
//! ## Provider Selection Guide
//!
//! - **Unqualified binding**: `DefaultGreetingProvider` is the module default
//! - **Business contexts**: Use `FormalGreetingProvider`
//! - **Friendly contexts**: Use `CasualGreetingProvider`

pub mod casual;
pub mod default;
pub mod formal;

// Re-export for convenience
pub use casual::CasualGreetingProvider;
pub use default::DefaultGreetingProvider;
pub use formal::FormalGreetingProvider;
