//! Application Ports
//!
//! Contracts between the application layer and the crates that plug
//! into it. Currently only the provider registry.

/// Provider registry system
pub mod registry;
