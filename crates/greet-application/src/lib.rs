//! # Greet Application
//!
//! Application layer for the greet library. Orchestrates the domain's
//! greeting providers behind use cases, declares the provider registry
//! that concrete providers register into, and hosts the auxiliary user
//! session store.
//!
//! ## Architecture
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`use_cases`] | Thin orchestration over bound providers |
//! | [`ports::registry`] | linkme-based provider registry and resolver |
//! | [`session`] | Single-slot user session store |
//!
//! Use cases receive their provider bindings at construction (constructor
//! injection); the binding never changes for the lifetime of the use case.
//! The registry is how the composition root turns a configured provider
//! name into an `Arc<dyn GreetingProvider>`.

/// Registry ports for provider auto-registration
pub mod ports;
/// User session store
pub mod session;
/// Greeting use cases
pub mod use_cases;

pub use session::UserSessionManager;
pub use use_cases::{
    GetCasualGreetingUseCase, GetContextualGreetingUseCase, GetFormalGreetingUseCase,
    GetGreetingUseCase,
};
