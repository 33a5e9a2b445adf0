//! Dynamic Provider Resolver
//!
//! Resolves providers by name using the linkme distributed slice registry.
//! No direct knowledge of concrete provider implementations.
//!
//! ## Architecture
//!
//! This module is the bridge between configuration and provider instances:
//!
//! ```text
//! Config: "providers.formal = formal"
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────┐
//! │     resolve_providers(&config)      │
//! └─────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────┐
//! │   GREETING_PROVIDERS.iter()         │  ← Discovers auto-registered providers
//! └─────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────┐
//! │   ResolvedGreetingProviders {       │
//! │     default: Arc<dyn ...>,          │
//! │     formal:  Arc<dyn ...>,          │
//! │     casual:  Arc<dyn ...>,          │
//! │   }                                 │
//! └─────────────────────────────────────┘
//! ```
//!
//! Resolution happens once, at startup; the resulting instances are the
//! process-wide singletons every consumer shares.

use std::sync::Arc;

use greet_application::ports::registry::{GreetingProviderConfig, resolve_greeting_provider};
use greet_domain::error::{Error, Result};
use greet_domain::ports::providers::GreetingProvider;
use greet_domain::value_objects::GreetingStyle;

use crate::config::AppConfig;

/// Resolved greeting providers, one per qualifier slot
///
/// Contains the provider instances resolved from application
/// configuration, ready to be injected into use-case constructors.
#[derive(Clone)]
pub struct ResolvedGreetingProviders {
    /// Provider bound to the unqualified (default) slot
    pub default: Arc<dyn GreetingProvider>,
    /// Provider bound to the formal slot
    pub formal: Arc<dyn GreetingProvider>,
    /// Provider bound to the casual slot
    pub casual: Arc<dyn GreetingProvider>,
}

impl ResolvedGreetingProviders {
    /// Provider bound to the given qualifier slot
    pub fn for_style(&self, style: GreetingStyle) -> Arc<dyn GreetingProvider> {
        match style {
            GreetingStyle::Default => Arc::clone(&self.default),
            GreetingStyle::Formal => Arc::clone(&self.formal),
            GreetingStyle::Casual => Arc::clone(&self.casual),
        }
    }
}

impl std::fmt::Debug for ResolvedGreetingProviders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedGreetingProviders")
            .field("default", &self.default.provider_name())
            .field("formal", &self.formal.provider_name())
            .field("casual", &self.casual.provider_name())
            .finish()
    }
}

/// Resolve all greeting providers from application configuration
///
/// Queries the linkme registry to find and instantiate the provider each
/// qualifier slot is bound to.
///
/// # Arguments
/// * `config` - Application configuration containing the binding names
///
/// # Returns
/// * `Ok(ResolvedGreetingProviders)` - All bindings successfully resolved
/// * `Err(Error)` - A binding named an unregistered provider
pub fn resolve_providers(config: &AppConfig) -> Result<ResolvedGreetingProviders> {
    let default = resolve_slot(GreetingStyle::Default, &config.providers.default)?;
    let formal = resolve_slot(GreetingStyle::Formal, &config.providers.formal)?;
    let casual = resolve_slot(GreetingStyle::Casual, &config.providers.casual)?;

    Ok(ResolvedGreetingProviders {
        default,
        formal,
        casual,
    })
}

fn resolve_slot(style: GreetingStyle, provider_name: &str) -> Result<Arc<dyn GreetingProvider>> {
    resolve_greeting_provider(&GreetingProviderConfig::new(provider_name)).map_err(|e| {
        Error::configuration(format!("Failed to resolve '{style}' binding: {e}"))
    })
}
