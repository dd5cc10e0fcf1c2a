//! Configuration for the ETL pipeline
//!
//! An explicit config struct passed to components at construction; no
//! process-wide connection singleton. Values come from defaults overridden
//! by environment variables.

use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration Constants
// ============================================================================

/// Default SQLite database URL when not specified via environment variable.
/// `mode=rwc` creates the database file on first run.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://dogstats.db?mode=rwc";

/// Default base URL of the breed reference API.
pub const DEFAULT_API_URL: &str = "https://api.thedogapi.com/v1";

/// Default timeout for breed API requests in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// ETL pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database URL
    pub database_url: String,

    /// Base URL of the breed reference API
    pub api_base_url: String,

    /// Timeout for API requests in seconds
    pub api_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            api_base_url: DEFAULT_API_URL.to_string(),
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load config from environment variables, falling back to defaults
    ///
    /// Environment variables:
    /// - `DOGSTATS_DATABASE_URL`: SQLite database URL
    /// - `DOGSTATS_API_URL`: Breed API base URL
    /// - `DOGSTATS_API_TIMEOUT_SECS`: API request timeout in seconds
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("DOGSTATS_DATABASE_URL") {
            config.database_url = url;
        }

        if let Ok(url) = std::env::var("DOGSTATS_API_URL") {
            config.api_base_url = url;
        }

        if let Ok(timeout) = std::env::var("DOGSTATS_API_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                config.api_timeout_secs = secs;
            }
        }

        config
    }
}
