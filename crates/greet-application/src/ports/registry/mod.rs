//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for greeting providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "formal" → FormalGreetingProvider        │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in greet-providers)
//!
//! ```ignore
//! use greet_application::ports::registry::{GreetingProviderEntry, GREETING_PROVIDERS};
//!
//! #[linkme::distributed_slice(GREETING_PROVIDERS)]
//! static FORMAL_PROVIDER: GreetingProviderEntry = GreetingProviderEntry {
//!     name: "formal",
//!     description: "Professional, formal greeting messages",
//!     factory: |_config| Ok(Arc::new(FormalGreetingProvider::new())),
//! };
//! ```
//!
//! ### Resolving a Provider (in greet-infrastructure)
//!
//! ```ignore
//! use greet_application::ports::registry::resolve_greeting_provider;
//!
//! let config = GreetingProviderConfig::new("formal");
//! let provider = resolve_greeting_provider(&config)?;
//! ```

pub mod greeting;

// Re-export all registry types and functions
pub use greeting::{
    GREETING_PROVIDERS, GreetingProviderConfig, GreetingProviderEntry, list_greeting_providers,
    resolve_greeting_provider,
};
