//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "GREET";

/// Environment variable consulted for log filter overrides
pub const LOG_FILTER_ENV: &str = "GREET_LOG";

/// Default configuration file name looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "greet.toml";

/// Default log level when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";
