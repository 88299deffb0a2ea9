//! Browser utilities.
//!
//! - [`fetch_records`] - record-set fetching with timeout and session cache
//! - [`platform`] - browser viewport and mapping-engine check
//! - [`logging`] - console `tracing` subscriber
//! - [`dom`] - window, location and history helpers

pub mod cache;
pub mod dom;
mod fetch;
pub mod logging;
pub mod platform;

pub use fetch::{Dataset, fetch_records};
