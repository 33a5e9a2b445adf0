//! DI Container Bootstrap - Composition Root
//!
//! Builds the [`AppContext`]: the one place where providers are resolved
//! and use cases are constructed. Everything in the context is created
//! once per process and shared by reference, which is what gives the
//! bindings their singleton scope.
//!
//! ## Usage
//!
//! ```rust
//! use greet_infrastructure::config::AppConfig;
//! use greet_infrastructure::di::init_app;
//!
//! let context = init_app(AppConfig::default()).expect("default bindings resolve");
//!
//! let greeting = context.greeting().execute("Android");
//! assert_eq!(greeting.message, "Hello, Android!");
//! ```

use std::sync::Arc;

use greet_application::session::UserSessionManager;
use greet_application::use_cases::{
    GetCasualGreetingUseCase, GetContextualGreetingUseCase, GetFormalGreetingUseCase,
    GetGreetingUseCase,
};
use greet_domain::error::Result;
use greet_domain::ports::providers::GreetingProvider;
use greet_domain::value_objects::GreetingStyle;
use shaku::HasComponent;
use tracing::info;

use crate::config::AppConfig;
use crate::di::modules::GreetingModuleImpl;
use crate::di::resolver::{ResolvedGreetingProviders, resolve_providers};

/// Application context with resolved providers and use cases
///
/// This is the composition root. It owns:
/// - the resolved provider bindings (one per qualifier slot)
/// - the use cases, constructed once with their bindings
/// - the auxiliary user session store
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    providers: ResolvedGreetingProviders,

    greeting: GetGreetingUseCase,
    formal_greeting: GetFormalGreetingUseCase,
    casual_greeting: GetCasualGreetingUseCase,
    contextual_greeting: GetContextualGreetingUseCase,

    sessions: Arc<UserSessionManager>,
}

impl AppContext {
    /// Use case bound to the unqualified provider
    pub fn greeting(&self) -> &GetGreetingUseCase {
        &self.greeting
    }

    /// Use case bound to the formal provider
    pub fn formal_greeting(&self) -> &GetFormalGreetingUseCase {
        &self.formal_greeting
    }

    /// Use case bound to the casual provider
    pub fn casual_greeting(&self) -> &GetCasualGreetingUseCase {
        &self.casual_greeting
    }

    /// Composite use case routing on an explicit formality flag
    pub fn contextual_greeting(&self) -> &GetContextualGreetingUseCase {
        &self.contextual_greeting
    }

    /// Provider bound to the given qualifier slot
    pub fn provider_for(&self, style: GreetingStyle) -> Arc<dyn GreetingProvider> {
        self.providers.for_style(style)
    }

    /// The user session store
    pub fn sessions(&self) -> &UserSessionManager {
        &self.sessions
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("providers", &self.providers)
            .finish()
    }
}

/// Initialize the application context from configuration
///
/// Resolves every qualifier slot against the provider registry, then
/// wires the use cases with their bindings. Fails if any configured
/// binding names an unregistered provider.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let providers = resolve_providers(&config)?;
    info!(?providers, "greeting providers resolved");

    // The unqualified binding comes from the shaku container, not from
    // the configurable qualifier slots
    let module = GreetingModuleImpl::builder().build();
    let unqualified: Arc<dyn GreetingProvider> = module.resolve();

    let greeting = GetGreetingUseCase::new(unqualified);
    let formal_greeting = GetFormalGreetingUseCase::new(Arc::clone(&providers.formal));
    let casual_greeting = GetCasualGreetingUseCase::new(Arc::clone(&providers.casual));
    let contextual_greeting = GetContextualGreetingUseCase::new(
        Arc::clone(&providers.formal),
        Arc::clone(&providers.casual),
    );

    Ok(AppContext {
        config: Arc::new(config),
        providers,
        greeting,
        formal_greeting,
        casual_greeting,
        contextual_greeting,
        sessions: Arc::new(UserSessionManager::new()),
    })
}
