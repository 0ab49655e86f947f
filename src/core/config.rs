//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::waitlist::WaitlistConfig;

/// Default cap on entries held by the local waitlist endpoint
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint the waitlist form posts to
    /// Example: https://formspree.io/f/abcdwxyz
    pub waitlist_endpoint: Option<String>,

    /// Maximum number of sign-ups the local endpoint keeps in memory
    pub max_entries: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            waitlist_endpoint: std::env::var("WAITLIST_ENDPOINT").ok(),
            max_entries: parse_max_entries(std::env::var("WAITLIST_MAX_ENTRIES").ok().as_deref()),
        }
    }

    /// Waitlist form configuration resolved from `waitlist_endpoint`
    pub fn waitlist(&self) -> WaitlistConfig {
        WaitlistConfig::from_optional(self.waitlist_endpoint.as_deref())
    }

    /// Check if an explicit endpoint is configured
    pub fn has_waitlist_endpoint(&self) -> bool {
        self.waitlist_endpoint
            .as_deref()
            .is_some_and(|e| !e.trim().is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_max_entries(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_ENTRIES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::waitlist::{DEFAULT_ENDPOINT, EndpointKind};

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_formspree_endpoint() {
        let config = Config {
            waitlist_endpoint: Some("https://formspree.io/f/abcdwxyz".to_string()),
            max_entries: 10,
        };

        assert!(config.has_waitlist_endpoint());
        assert_eq!(config.waitlist().kind, EndpointKind::Formspree);
    }

    #[test]
    fn test_config_without_endpoint_uses_local() {
        let config = Config {
            waitlist_endpoint: None,
            max_entries: DEFAULT_MAX_ENTRIES,
        };

        assert!(!config.has_waitlist_endpoint());
        assert_eq!(config.waitlist().endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.waitlist().kind, EndpointKind::Json);
    }

    #[test]
    fn test_config_with_empty_endpoint() {
        // Empty strings count as unset
        let config = Config {
            waitlist_endpoint: Some("".to_string()),
            max_entries: DEFAULT_MAX_ENTRIES,
        };

        assert!(!config.has_waitlist_endpoint());
        assert_eq!(config.waitlist().endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_parse_max_entries() {
        assert_eq!(parse_max_entries(None), DEFAULT_MAX_ENTRIES);
        assert_eq!(parse_max_entries(Some("250")), 250);
        assert_eq!(parse_max_entries(Some(" 42 ")), 42);
        assert_eq!(parse_max_entries(Some("0")), DEFAULT_MAX_ENTRIES);
        assert_eq!(parse_max_entries(Some("-1")), DEFAULT_MAX_ENTRIES);
        assert_eq!(parse_max_entries(Some("lots")), DEFAULT_MAX_ENTRIES);
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();

        assert!(config.max_entries > 0);
        let _ = config.has_waitlist_endpoint();
    }

    #[test]
    fn test_config_debug() {
        let config = Config {
            waitlist_endpoint: Some("/api/waitlist".to_string()),
            max_entries: 5,
        };

        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("waitlist_endpoint"));
        assert!(debug_str.contains("max_entries"));
    }
}
