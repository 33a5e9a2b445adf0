//! Module Trait Interfaces - Shaku Strict Pattern
//!
//! These traits define the interfaces for the container modules.
//! Qualified provider bindings are resolved via the registry system in
//! `di/resolver.rs`; only the unqualified binding goes through Shaku.

use shaku::HasComponent;

/// Greeting module trait - the unqualified provider binding.
///
/// The module must expose exactly one `dyn GreetingProvider` component,
/// which consumers receive when they ask for a provider without naming a
/// qualifier.
pub trait GreetingModule: HasComponent<dyn greet_domain::ports::providers::GreetingProvider> {}
