//! Greeting Provider Port
//!
//! Port for greeting message providers. Several implementations coexist
//! (default, formal, casual), distinguished by registry name, and the
//! composition root binds each consumer to one of them.
//!
//! Unlike I/O-backed ports, greeting generation is a pure synchronous
//! computation, so the port is a plain trait with no async surface.

use crate::value_objects::Greeting;

/// Port: Greeting Provider
///
/// Maps a name to a [`Greeting`] via a fixed template. Implementations
/// must be stateless and total: every input string, including the empty
/// string and arbitrary Unicode, produces a greeting, and equal inputs
/// always produce equal greetings.
pub trait GreetingProvider: Send + Sync + std::fmt::Debug {
    /// Format a greeting for the given name
    ///
    /// # Arguments
    /// * `name` - The name to greet; any string is accepted, no
    ///   validation and no length bound
    ///
    /// # Returns
    /// A freshly created greeting whose message interpolates `name`
    /// into the provider's template
    fn greet(&self, name: &str) -> Greeting;

    /// Get the provider registry name (e.g., "default", "formal")
    fn provider_name(&self) -> &str;
}

// shaku's blanket `Interface` impl only covers `Sized` types, so the
// trait object needs its own impl for `shaku::Component` bindings.
impl shaku::Interface for dyn GreetingProvider {}
