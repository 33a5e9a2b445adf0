//! Configuration types

use greet_domain::value_objects::GreetingStyle;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Greeting provider bindings per qualifier slot
    pub providers: GreetingBindings,
}

/// Greeting provider bindings
///
/// Maps each qualifier slot to the registry name of the provider that
/// satisfies it. The defaults bind every slot to its namesake provider;
/// overriding a slot (e.g., `GREET_PROVIDERS_DEFAULT=casual`) rebinds it
/// for the whole process, since bindings are resolved once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingBindings {
    /// Provider bound to the unqualified (default) slot
    pub default: String,

    /// Provider bound to the formal slot
    pub formal: String,

    /// Provider bound to the casual slot
    pub casual: String,
}

impl GreetingBindings {
    /// Registry name bound to the given qualifier slot
    pub fn for_style(&self, style: GreetingStyle) -> &str {
        match style {
            GreetingStyle::Default => &self.default,
            GreetingStyle::Formal => &self.formal,
            GreetingStyle::Casual => &self.casual,
        }
    }
}

impl Default for GreetingBindings {
    fn default() -> Self {
        Self {
            default: GreetingStyle::Default.as_str().to_string(),
            formal: GreetingStyle::Formal.as_str().to_string(),
            casual: GreetingStyle::Casual.as_str().to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}
