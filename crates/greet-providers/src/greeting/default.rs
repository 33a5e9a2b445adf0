//! Default greeting provider
//!
//! The unqualified binding: a plain `Hello` greeting.

use greet_domain::ports::providers::GreetingProvider;
use greet_domain::value_objects::Greeting;

/// Default greeting provider
///
/// Formats `"Hello, {name}!"` for any input name. Stateless and total:
/// the empty string and arbitrary Unicode are accepted unchanged.
///
/// # Example
///
/// ```rust
/// use greet_domain::ports::providers::GreetingProvider;
/// use greet_providers::greeting::DefaultGreetingProvider;
///
/// let provider = DefaultGreetingProvider::new();
/// assert_eq!(provider.greet("Android").message, "Hello, Android!");
/// ```
#[derive(Debug, Clone)]
pub struct DefaultGreetingProvider;

impl DefaultGreetingProvider {
    /// Create a new default greeting provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for DefaultGreetingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingProvider for DefaultGreetingProvider {
    fn greet(&self, name: &str) -> Greeting {
        Greeting::new(format!("Hello, {name}!"))
    }

    fn provider_name(&self) -> &str {
        "default"
    }
}

// Shaku Component implementation for DI container
// This allows DefaultGreetingProvider to be used as a default in Shaku modules
impl<M: shaku::Module> shaku::Component<M> for DefaultGreetingProvider {
    type Interface = dyn GreetingProvider;
    type Parameters = ();

    fn build(_: &mut shaku::ModuleBuildContext<M>, _: Self::Parameters) -> Box<Self::Interface> {
        Box::new(DefaultGreetingProvider::new())
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use greet_application::ports::registry::{
    GREETING_PROVIDERS, GreetingProviderConfig, GreetingProviderEntry,
};

#[linkme::distributed_slice(GREETING_PROVIDERS)]
static DEFAULT_PROVIDER: GreetingProviderEntry = GreetingProviderEntry {
    name: "default",
    description: "Plain greeting messages",
    factory: |_config: &GreetingProviderConfig| {
        Ok(std::sync::Arc::new(DefaultGreetingProvider::new()))
    },
};
