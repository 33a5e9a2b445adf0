//! Greeting Provider Registry
//!
//! Auto-registration system for greeting providers.
//! Providers register themselves via `#[linkme::distributed_slice]` and
//! are discovered at runtime by name.

use std::collections::HashMap;
use std::sync::Arc;

use greet_domain::ports::providers::GreetingProvider;

/// Configuration for greeting provider creation
///
/// Contains the configuration options a greeting provider might need.
/// Providers should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct GreetingProviderConfig {
    /// Provider name (e.g., "default", "formal", "casual")
    pub provider: String,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl GreetingProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for greeting providers
///
/// Each greeting provider implementation registers itself with this entry
/// via the distributed slice. The entry contains metadata and a factory
/// function to create provider instances.
pub struct GreetingProviderEntry {
    /// Unique provider name (e.g., "default", "formal", "casual")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&GreetingProviderConfig) -> Result<Arc<dyn GreetingProvider>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static GREETING_PROVIDERS: [GreetingProviderEntry] = [..];

/// Resolve greeting provider by name from registry
///
/// Searches the registry for a provider matching the configured name
/// and creates an instance using the provider's factory function.
///
/// # Arguments
/// * `config` - Configuration containing provider name and settings
///
/// # Returns
/// * `Ok(Arc<dyn GreetingProvider>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_greeting_provider(
    config: &GreetingProviderConfig,
) -> Result<Arc<dyn GreetingProvider>, String> {
    let provider_name = &config.provider;

    for entry in GREETING_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    // List available providers for helpful error message
    let available: Vec<&str> = GREETING_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown greeting provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered greeting providers
///
/// Returns a list of (name, description) tuples for all registered
/// greeting providers. Useful for CLI help output.
pub fn list_greeting_providers() -> Vec<(&'static str, &'static str)> {
    GREETING_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
