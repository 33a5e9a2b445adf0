//! # Greet Domain
//!
//! Domain layer for the greet library. Contains the core value objects,
//! the provider port, and the domain error type.
//!
//! ## Architecture
//!
//! This crate has no knowledge of configuration, logging, or the DI
//! container. It defines WHAT a greeting is and the contract a greeting
//! provider must satisfy; everything else lives in the outer layers.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`value_objects`] | [`Greeting`], [`GreetingStyle`], [`UserSession`] |
//! | [`ports`] | [`GreetingProvider`] port trait |
//! | [`error`] | [`Error`] and the [`Result`] alias |
//!
//! [`Greeting`]: value_objects::Greeting
//! [`GreetingStyle`]: value_objects::GreetingStyle
//! [`UserSession`]: value_objects::UserSession
//! [`GreetingProvider`]: ports::providers::GreetingProvider
//! [`Error`]: error::Error
//! [`Result`]: error::Result

/// Error handling types
pub mod error;
/// Port traits implemented by the outer layers
pub mod ports;
/// Immutable domain value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::providers::GreetingProvider;
pub use value_objects::{Greeting, GreetingStyle, UserSession};
