//! Shaku DI Modules
//!
//! Container modules for the unqualified bindings. Qualified bindings
//! (formal/casual/default-by-name) are resolved via the registry system
//! in `di/resolver.rs`.

/// Greeting module implementation
pub mod greeting_module;
/// Module trait interfaces
pub mod traits;

pub use greeting_module::GreetingModuleImpl;
pub use traits::GreetingModule;
