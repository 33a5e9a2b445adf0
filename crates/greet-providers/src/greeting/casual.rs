//! Casual greeting provider
//!
//! Friendly, informal greeting messages.

use greet_domain::ports::providers::GreetingProvider;
use greet_domain::value_objects::Greeting;

/// Casual greeting provider
///
/// Formats `"Hey {name}! What's up? 👋"` for any input name. The wave
/// emoji is U+1F44B; the upstream sample's test fixtures carried a
/// mojibake copy of it, which is not reproduced here.
///
/// # Example
///
/// ```rust
/// use greet_domain::ports::providers::GreetingProvider;
/// use greet_providers::greeting::CasualGreetingProvider;
///
/// let provider = CasualGreetingProvider::new();
/// assert_eq!(provider.greet("Alex").message, "Hey Alex! What's up? 👋");
/// ```
#[derive(Debug, Clone)]
pub struct CasualGreetingProvider;

impl CasualGreetingProvider {
    /// Create a new casual greeting provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for CasualGreetingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingProvider for CasualGreetingProvider {
    fn greet(&self, name: &str) -> Greeting {
        Greeting::new(format!("Hey {name}! What's up? 👋"))
    }

    fn provider_name(&self) -> &str {
        "casual"
    }
}

// Shaku Component implementation for DI container
impl<M: shaku::Module> shaku::Component<M> for CasualGreetingProvider {
    type Interface = dyn GreetingProvider;
    type Parameters = ();

    fn build(_: &mut shaku::ModuleBuildContext<M>, _: Self::Parameters) -> Box<Self::Interface> {
        Box::new(CasualGreetingProvider::new())
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use greet_application::ports::registry::{
    GREETING_PROVIDERS, GreetingProviderConfig, GreetingProviderEntry,
};

#[linkme::distributed_slice(GREETING_PROVIDERS)]
static CASUAL_PROVIDER: GreetingProviderEntry = GreetingProviderEntry {
    name: "casual",
    description: "Friendly, informal greeting messages",
    factory: |_config: &GreetingProviderConfig| {
        Ok(std::sync::Arc::new(CasualGreetingProvider::new()))
    },
};
