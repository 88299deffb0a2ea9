//! Viewport measurement and the mobile breakpoint.

use std::rc::Rc;

use crate::error::ViewportError;
use crate::listener::ListenerGuard;

/// Widths at or below this many logical pixels count as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Returns `true` for mobile-sized viewports (`width <= 768`).
#[inline]
pub fn is_mobile(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT
}

/// Resize notification callback, called with the new width.
pub type ResizeCallback = dyn Fn(f64);

/// Source of viewport width and resize notifications.
pub trait Viewport {
    /// Current width, available synchronously.
    fn width(&self) -> f64;

    /// Call `callback` on every resize until the guard is dropped.
    fn subscribe_resize(&self, callback: Rc<ResizeCallback>)
    -> Result<ListenerGuard, ViewportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_inclusive() {
        assert!(is_mobile(320.0));
        assert!(is_mobile(767.5));
        assert!(is_mobile(768.0));
        assert!(!is_mobile(768.5));
        assert!(!is_mobile(1280.0));
    }
}
