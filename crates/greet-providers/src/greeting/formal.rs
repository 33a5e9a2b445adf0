//! Formal greeting provider
//!
//! Professional, formal greeting messages.

use greet_domain::ports::providers::GreetingProvider;
use greet_domain::value_objects::Greeting;

/// Formal greeting provider
///
/// Formats `"Good day, {name}. It is my pleasure to make your
/// acquaintance."` for any input name.
///
/// # Example
///
/// ```rust
/// use greet_domain::ports::providers::GreetingProvider;
/// use greet_providers::greeting::FormalGreetingProvider;
///
/// let provider = FormalGreetingProvider::new();
/// assert_eq!(
///     provider.greet("Mr. Smith").message,
///     "Good day, Mr. Smith. It is my pleasure to make your acquaintance."
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FormalGreetingProvider;

impl FormalGreetingProvider {
    /// Create a new formal greeting provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for FormalGreetingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingProvider for FormalGreetingProvider {
    fn greet(&self, name: &str) -> Greeting {
        Greeting::new(format!(
            "Good day, {name}. It is my pleasure to make your acquaintance."
        ))
    }

    fn provider_name(&self) -> &str {
        "formal"
    }
}

// Shaku Component implementation for DI container
impl<M: shaku::Module> shaku::Component<M> for FormalGreetingProvider {
    type Interface = dyn GreetingProvider;
    type Parameters = ();

    fn build(_: &mut shaku::ModuleBuildContext<M>, _: Self::Parameters) -> Box<Self::Interface> {
        Box::new(FormalGreetingProvider::new())
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use greet_application::ports::registry::{
    GREETING_PROVIDERS, GreetingProviderConfig, GreetingProviderEntry,
};

#[linkme::distributed_slice(GREETING_PROVIDERS)]
static FORMAL_PROVIDER: GreetingProviderEntry = GreetingProviderEntry {
    name: "formal",
    description: "Professional, formal greeting messages",
    factory: |_config: &GreetingProviderConfig| {
        Ok(std::sync::Arc::new(FormalGreetingProvider::new()))
    },
};
