//! Error types for the layout shell and its environment seams.
//!
//! - [`CapabilityError`] - mapping-engine support check failures
//! - [`ViewportError`] - viewport measurement and resize listener failures
//! - [`ShellError`] - shell lifecycle misuse and initialization failures

use thiserror::Error;

/// Failure while lookup whether the mapping engine is supported.
///
/// Never surfaced to the user: the shell treats any error as "unsupported".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// The mapping engine is not loaded at all.
    #[error("mapping engine not available")]
    Unavailable,
    /// The check ran but threw or returned something unexpected.
    #[error("capability check failed: {0}")]
    CheckFailed(String),
}

/// Viewport access errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewportError {
    #[error("browser window not available")]
    NoWindow,
    #[error("failed to register window listener: {0}")]
    ListenerRegistration(String),
}

/// Shell lifecycle errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("shell already initialized")]
    AlreadyInitialized,
    #[error("shell has been disposed")]
    Disposed,
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}
