//! Request-handling configuration
//!
//! ```rust
//! use readingledger_api::config::ApiConfig;
//!
//! let config = ApiConfig::new()
//!     .url_prefix("/v1/")
//!     .debug(true);
//!
//! assert_eq!(config.url_prefix, "/v1");
//! assert!(config.debug);
//! ```

use std::env;

/// Environment variable overriding [`ApiConfig::url_prefix`]
pub const URL_PREFIX_ENV: &str = "READINGLEDGER_URL_PREFIX";

/// Environment variable overriding [`ApiConfig::debug`]
pub const DEBUG_ENV: &str = "READINGLEDGER_DEBUG";

/// Prefix every route is mounted under unless configured otherwise
pub const DEFAULT_URL_PREFIX: &str = "/api";

/// API configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Path prefix for all routes, leading slash and no trailing slash
    pub url_prefix: String,
    /// Expose internal fault details in error envelopes
    pub debug: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiConfig {
    /// Create configuration with default prefix and debug off
    pub fn new() -> Self {
        Self {
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
            debug: false,
        }
    }

    /// Defaults, overridden by `READINGLEDGER_URL_PREFIX` and `READINGLEDGER_DEBUG`
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(prefix) = env::var(URL_PREFIX_ENV) {
            config = config.url_prefix(prefix);
        }
        if let Ok(flag) = env::var(DEBUG_ENV) {
            config = config.debug(parse_flag(&flag));
        }

        config
    }

    /// Set the route prefix
    ///
    /// Normalised to a single leading slash with no trailing slash; an empty
    /// or `/` prefix mounts routes at the root.
    pub fn url_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let trimmed = prefix.trim().trim_matches('/');
        self.url_prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        self
    }

    /// Enable or disable debug error details
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.url_prefix, "/api");
        assert!(!config.debug);
        assert_eq!(config, ApiConfig::new());
    }

    #[test]
    fn test_config_builder() {
        let config = ApiConfig::new().url_prefix("service/v2").debug(true);
        assert_eq!(config.url_prefix, "/service/v2");
        assert!(config.debug);
    }

    #[test]
    fn test_prefix_normalisation() {
        assert_eq!(ApiConfig::new().url_prefix("/api/").url_prefix, "/api");
        assert_eq!(ApiConfig::new().url_prefix("//api").url_prefix, "/api");
        assert_eq!(ApiConfig::new().url_prefix("/").url_prefix, "");
        assert_eq!(ApiConfig::new().url_prefix("").url_prefix, "");
    }

    #[test]
    fn test_flag_parsing() {
        for on in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(parse_flag(on), "{on}");
        }
        for off in ["0", "false", "", "nope"] {
            assert!(!parse_flag(off), "{off}");
        }
    }
}
