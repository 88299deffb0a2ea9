//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Current viewport width in logical pixels, if a window is available.
pub fn inner_width() -> Option<f64> {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current location pathname (`/about`), or `/` without a window.
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push `path` onto the session history without reloading.
pub fn push_path(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
    }
}
