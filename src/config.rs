use crate::constants::{DEFAULT_BASE_URL, DEFAULT_CACHE_TTL_SECS, DEFAULT_TIMEOUT_SECS, USER_AGENT};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the envelope API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the in-memory response cache
pub struct CacheConfig {
    /// Default time-to-live in seconds for cached response bodies
    pub default_ttl_secs: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the envelope API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Response cache configuration
    pub cache: CacheConfig,
    /// User agent string sent with every request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration instance from environment variables
    ///
    /// Loads a `.env` file when present, then reads `API_BASE_URL`,
    /// `API_TIMEOUT`, `CACHE_TTL_SECS` and `API_USER_AGENT`, falling back to
    /// the crate defaults for anything missing.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("API_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("API_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            cache: CacheConfig {
                default_ttl_secs: get_env_or_default("CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS),
            },
            user_agent: get_env_or_default("API_USER_AGENT", String::from(USER_AGENT)),
        }
    }

    /// Creates a configuration pointing at the given base URL
    ///
    /// Everything else takes the crate defaults. Handy for tests and for
    /// embedding applications that resolve the endpoint themselves.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            cache: CacheConfig {
                default_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            },
            user_agent: String::from(USER_AGENT),
        }
    }
}
