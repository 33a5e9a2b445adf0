//! Greeting Use Cases
//!
//! Application services that forward to greeting providers. The provider
//! binding is decided once, by the composition root, and injected through
//! the constructor. Nothing here re-evaluates the binding per call; only
//! the contextual use case branches, on its explicit formality argument.

use std::sync::Arc;

use greet_domain::ports::providers::GreetingProvider;
use greet_domain::value_objects::Greeting;

/// Use case forwarding to the single, unqualified provider binding.
///
/// The counterpart of resolving `dyn GreetingProvider` without a
/// qualifier: whichever provider the composition root bound as the
/// default, this use case uses.
#[derive(Debug, Clone)]
pub struct GetGreetingUseCase {
    provider: Arc<dyn GreetingProvider>,
}

impl GetGreetingUseCase {
    /// Create the use case with its provider binding
    pub fn new(provider: Arc<dyn GreetingProvider>) -> Self {
        Self { provider }
    }

    /// Produce a greeting for the given name
    pub fn execute(&self, name: &str) -> Greeting {
        self.provider.greet(name)
    }
}

/// Use case bound to the formal greeting provider.
#[derive(Debug, Clone)]
pub struct GetFormalGreetingUseCase {
    provider: Arc<dyn GreetingProvider>,
}

impl GetFormalGreetingUseCase {
    /// Create the use case with its formal provider binding
    pub fn new(provider: Arc<dyn GreetingProvider>) -> Self {
        Self { provider }
    }

    /// Produce a formal greeting for the given name
    pub fn execute(&self, name: &str) -> Greeting {
        self.provider.greet(name)
    }
}

/// Use case bound to the casual greeting provider.
#[derive(Debug, Clone)]
pub struct GetCasualGreetingUseCase {
    provider: Arc<dyn GreetingProvider>,
}

impl GetCasualGreetingUseCase {
    /// Create the use case with its casual provider binding
    pub fn new(provider: Arc<dyn GreetingProvider>) -> Self {
        Self { provider }
    }

    /// Produce a casual greeting for the given name
    pub fn execute(&self, name: &str) -> Greeting {
        self.provider.greet(name)
    }
}

/// Composite use case holding both a formal and a casual binding.
///
/// Routes per call on an explicit formality flag; without the flag it
/// defaults to the casual provider.
#[derive(Debug, Clone)]
pub struct GetContextualGreetingUseCase {
    formal_provider: Arc<dyn GreetingProvider>,
    casual_provider: Arc<dyn GreetingProvider>,
}

impl GetContextualGreetingUseCase {
    /// Create the use case with both provider bindings
    pub fn new(
        formal_provider: Arc<dyn GreetingProvider>,
        casual_provider: Arc<dyn GreetingProvider>,
    ) -> Self {
        Self {
            formal_provider,
            casual_provider,
        }
    }

    /// Produce a greeting with the default formality (casual)
    pub fn execute(&self, name: &str) -> Greeting {
        self.execute_with_formality(name, false)
    }

    /// Produce a greeting, formal iff `is_formal` is set
    pub fn execute_with_formality(&self, name: &str, is_formal: bool) -> Greeting {
        if is_formal {
            self.formal_provider.greet(name)
        } else {
            self.casual_provider.greet(name)
        }
    }
}
