//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CLEMENTINE_DATA_DIR` - Directory for the persisted key-value store
//!   (default: `./data`)
//! - `CLEMENTINE_PLACEMENT_DELAY_MS` - Simulated order placement latency in
//!   milliseconds (default: 2000)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default directory for persisted state.
const DEFAULT_DATA_DIR: &str = "data";

/// Default simulated latency for order placement, in milliseconds.
const DEFAULT_PLACEMENT_DELAY_MS: u64 = 2000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the persisted key-value store.
    pub data_dir: PathBuf,
    /// Simulated latency of the order placement call.
    pub placement_delay: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("CLEMENTINE_DATA_DIR", DEFAULT_DATA_DIR));

        let placement_delay_ms = match std::env::var("CLEMENTINE_PLACEMENT_DELAY_MS") {
            Ok(value) => value.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "CLEMENTINE_PLACEMENT_DELAY_MS".to_string(),
                    e.to_string(),
                )
            })?,
            Err(_) => DEFAULT_PLACEMENT_DELAY_MS,
        };

        Ok(Self {
            data_dir,
            placement_delay: Duration::from_millis(placement_delay_ms),
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            placement_delay: Duration::from_millis(DEFAULT_PLACEMENT_DELAY_MS),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
