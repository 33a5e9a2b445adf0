//! Greeting Module - Provides the unqualified greeting binding
//!
//! Binds the default provider as the module's `dyn GreetingProvider`
//! component. Singleton-scoped: shaku builds the component once per
//! module instance and every resolution returns the same instance.

use shaku::module;

// Import greeting providers
use greet_providers::greeting::DefaultGreetingProvider;

// Import traits
use crate::di::modules::traits::GreetingModule;

module! {
    pub GreetingModuleImpl: GreetingModule {
        components = [
            // Unqualified binding resolves to the default provider
            DefaultGreetingProvider
        ],
        providers = []
    }
}
