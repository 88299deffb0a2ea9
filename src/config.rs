//! Application configuration.
//!
//! Compile-time constants live here. Deployment-specific values (data URLs,
//! the submission form, log level) come from `assets/site.toml`, embedded at
//! compile time and parsed into [`SiteConfig`].

use serde::Deserialize;

use crate::error::ConfigError;

// =============================================================================
// Site Configuration
// =============================================================================

/// Embedded `assets/site.toml`.
pub const SITE_CONFIG: &str = include_str!("../assets/site.toml");

/// Log level used until (or unless) the site configuration parses.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Deployment settings. Missing keys take their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// JSON array of network records.
    pub networks_url: String,
    /// JSON array of food-resource records.
    pub food_resources_url: String,
    /// Form for submitting new networks and resources.
    pub submit_form_url: String,
    /// `tracing` filter directive, e.g. `info` or `aidmap_core=debug`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            networks_url: "/data/networks.json".to_string(),
            food_resources_url: "/data/food-resources.json".to_string(),
            submit_form_url: String::new(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the footer.
pub const APP_NAME: &str = "Mutual Aid Hub";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Session cache entry version. Entries written under another version are
/// ignored.
pub const CACHE_VERSION: u32 = 1;
