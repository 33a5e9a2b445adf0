//! Greeting Use Cases
//!
//! Thin orchestration layer between consumers and greeting providers.
//! Each use case is bound to its provider(s) at construction; the
//! binding is fixed for the lifetime of the use case instance.

/// Greeting use case implementations
pub mod greeting;

pub use greeting::{
    GetCasualGreetingUseCase, GetContextualGreetingUseCase, GetFormalGreetingUseCase,
    GetGreetingUseCase,
};
