//! # Greet Infrastructure
//!
//! Infrastructure layer for the greet library: configuration loading,
//! structured logging, and the dependency-injection composition root.
//!
//! ## Architecture
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | `AppConfig`, `GreetingBindings`, figment-based `ConfigLoader` |
//! | [`logging`] | tracing-subscriber initialization |
//! | [`di`] | shaku module, registry resolver, `AppContext` bootstrap |
//! | [`error_ext`] | Context extension for converting foreign errors |
//!
//! The composition root ([`di::init_app`]) is the only place that decides
//! which concrete provider satisfies which binding; everything below it
//! receives its dependencies through constructors.

/// Constants used across the infrastructure layer
pub mod constants;
/// Error context extension utilities
pub mod error_ext;

/// Configuration types and loader
pub mod config;
/// Dependency injection composition
pub mod di;
/// Structured logging with tracing
pub mod logging;

pub use config::{AppConfig, ConfigLoader, GreetingBindings, LoggingConfig};
pub use di::{AppContext, init_app};
pub use logging::init_logging;
