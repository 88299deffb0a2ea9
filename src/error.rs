//! Error types for the browser front end.
//!
//! - [`FetchError`] - network/fetch failures while loading record sets
//! - [`ConfigError`] - site configuration parsing failures

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Non-2xx response.
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
}

/// Site configuration errors.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(String),
}
