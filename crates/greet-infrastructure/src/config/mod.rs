//! Configuration management
//!
//! Typed application configuration with a figment-based loader merging
//! defaults, an optional TOML file, and environment variables.

/// Configuration loader service
pub mod loader;
/// Configuration types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, GreetingBindings, LoggingConfig};
