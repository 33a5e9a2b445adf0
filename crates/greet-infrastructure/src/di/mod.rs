//! Dependency Injection System
//!
//! Composition for the greet library, combining two binding mechanisms
//! the way the rest of the stack expects them:
//!
//! ```text
//! AppConfig ──► resolve_providers() ──► ResolvedGreetingProviders
//!                      │                        │
//!                 linkme registry          init_app()
//!                 (qualified slots)             │
//!                                               ▼
//! GreetingModuleImpl (shaku) ──────────► AppContext
//! (unqualified default binding)          (use cases + sessions)
//! ```
//!
//! - The shaku [`modules`] bind the unqualified `dyn GreetingProvider`
//!   component, the counterpart of an unannotated container binding.
//! - The [`resolver`] turns the configured name of each qualifier slot
//!   (default/formal/casual) into a provider instance via the linkme
//!   registry.
//! - [`bootstrap`] builds the [`AppContext`] composition root once per
//!   process; every consumer shares those singleton instances.
//!
//! **ARCHITECTURE**: This module contains ONLY wiring logic. Business
//! logic lives in the domain and application crates.

pub mod bootstrap;
pub mod modules;
pub mod resolver;

pub use bootstrap::{AppContext, init_app};
pub use resolver::{ResolvedGreetingProviders, resolve_providers};
