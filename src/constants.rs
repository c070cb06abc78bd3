//! Application-wide constants and configuration values
//!
//! This module centralizes the request budget, header names and other magic
//! numbers so they are defined in exactly one place.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds, applied to both sources
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 5;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Request budget for the rate-limited external source
pub mod rate_limit {
    /// Maximum number of external dispatches per minute
    pub const MAX_REQUESTS_PER_MINUTE: u64 = 10;

    /// Minimum spacing between consecutive external dispatches, derived from
    /// the per-minute budget (6000 ms at 10 requests per minute).
    pub const DISPATCH_INTERVAL_MS: u64 = 60_000 / MAX_REQUESTS_PER_MINUTE;
}

/// Identifying header required by the external source
pub mod external_api {
    /// Header name the external provider uses to identify callers
    pub const REQUESTED_BY_HEADER: &str = "X-Requested-By";

    /// Default caller identifier sent in the header
    pub const REQUESTED_BY_VALUE: &str = "FahimaApp128";

    /// Default base URL of the external provider
    pub const DEFAULT_DOMAIN: &str = "https://api.snooker.org";
}

/// Default base URL of the primary (internal) backend
pub const DEFAULT_PRIMARY_DOMAIN: &str = "http://127.0.0.1:8000/oneFourSeven";

/// Placeholder shown when a player cannot be resolved from any source
pub const UNKNOWN_PLAYER: &str = "Unknown Player";

/// Placeholder shown when an event name cannot be resolved
pub const UNKNOWN_TOUR: &str = "Unknown Tour";

/// Environment variable names
pub mod env_vars {
    /// Override for the primary backend base URL
    pub const PRIMARY_DOMAIN: &str = "MAX_BREAK_PRIMARY_DOMAIN";

    /// Override for the external provider base URL
    pub const EXTERNAL_DOMAIN: &str = "MAX_BREAK_EXTERNAL_DOMAIN";

    /// Override for the log file path
    pub const LOG_FILE: &str = "MAX_BREAK_LOG_FILE";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "MAX_BREAK_HTTP_TIMEOUT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_interval_matches_budget() {
        // 10 requests per minute means one dispatch every 6 seconds
        assert_eq!(rate_limit::MAX_REQUESTS_PER_MINUTE, 10);
        assert_eq!(rate_limit::DISPATCH_INTERVAL_MS, 6000);

        // The interval must always cover the full minute
        assert!(rate_limit::DISPATCH_INTERVAL_MS * rate_limit::MAX_REQUESTS_PER_MINUTE >= 60_000);
    }

    #[test]
    fn test_external_api_constants_are_not_empty() {
        assert!(!external_api::REQUESTED_BY_HEADER.is_empty());
        assert!(!external_api::REQUESTED_BY_VALUE.is_empty());
        assert!(external_api::DEFAULT_DOMAIN.starts_with("https://"));
    }

    #[test]
    fn test_env_var_names_are_not_empty() {
        assert!(!env_vars::PRIMARY_DOMAIN.is_empty());
        assert!(!env_vars::EXTERNAL_DOMAIN.is_empty());
        assert!(!env_vars::LOG_FILE.is_empty());
        assert!(!env_vars::HTTP_TIMEOUT.is_empty());
    }
}
