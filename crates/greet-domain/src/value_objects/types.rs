//! Type definitions for dynamic domain concepts
//!
//! Symbolic tags that select between multiple bindings of the same port.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Value Object: Greeting Style Tag
///
/// Distinguishes the available provider bindings of the
/// [`GreetingProvider`](crate::ports::providers::GreetingProvider) port.
/// This is the explicit enumeration form of a DI qualifier: consumers
/// resolve a style to a provider instance once, at composition time,
/// instead of looking it up through an implicit container.
///
/// The string form of each style doubles as its provider registry name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GreetingStyle {
    /// Plain greeting, the unqualified binding
    Default,
    /// Professional, formal greeting
    Formal,
    /// Friendly, informal greeting
    Casual,
}

impl GreetingStyle {
    /// All styles, in registry order
    pub const ALL: [GreetingStyle; 3] = [
        GreetingStyle::Default,
        GreetingStyle::Formal,
        GreetingStyle::Casual,
    ];

    /// Canonical string form, used as the provider registry name
    pub fn as_str(&self) -> &'static str {
        match self {
            GreetingStyle::Default => "default",
            GreetingStyle::Formal => "formal",
            GreetingStyle::Casual => "casual",
        }
    }
}

impl std::fmt::Display for GreetingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GreetingStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(GreetingStyle::Default),
            "formal" => Ok(GreetingStyle::Formal),
            "casual" => Ok(GreetingStyle::Casual),
            other => Err(Error::invalid_argument(format!(
                "Unknown greeting style: '{other}'. Use default, formal, or casual"
            ))),
        }
    }
}
