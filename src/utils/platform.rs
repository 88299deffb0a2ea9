//! Browser implementations of the layout shell's environment seams.

use std::rc::Rc;

use aidmap_core::viewport::ResizeCallback;
use aidmap_core::{CapabilityCheck, CapabilityError, ListenerGuard, Viewport, ViewportError};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::dom;

/// `window.innerWidth` plus `resize` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn width(&self) -> f64 {
        // No window means no layout to adapt; treat as desktop.
        dom::inner_width().unwrap_or(f64::INFINITY)
    }

    fn subscribe_resize(
        &self,
        callback: Rc<ResizeCallback>,
    ) -> Result<ListenerGuard, ViewportError> {
        listen_window("resize", move || {
            if let Some(width) = dom::inner_width() {
                callback(width);
            }
        })
    }
}

/// Add `handler` as a `window` listener for `event`.
///
/// Dropping the guard removes the listener and frees the closure.
pub fn listen_window(
    event: &'static str,
    handler: impl Fn() + 'static,
) -> Result<ListenerGuard, ViewportError> {
    let window = dom::window().ok_or(ViewportError::NoWindow)?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn()>);

    window
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| ViewportError::ListenerRegistration(format!("{e:?}")))?;

    Ok(ListenerGuard::new(move || {
        let _ = window.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }))
}

/// Calls `window.mapboxgl.supported()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MapboxSupport;

impl CapabilityCheck for MapboxSupport {
    fn supported(&self) -> Result<bool, CapabilityError> {
        let window = dom::window().ok_or(CapabilityError::Unavailable)?;

        let mapbox = js_sys::Reflect::get(&window, &JsValue::from_str("mapboxgl"))
            .map_err(|e| CapabilityError::CheckFailed(format!("{e:?}")))?;
        if mapbox.is_undefined() || mapbox.is_null() {
            return Err(CapabilityError::Unavailable);
        }

        let check: js_sys::Function = js_sys::Reflect::get(&mapbox, &JsValue::from_str("supported"))
            .map_err(|e| CapabilityError::CheckFailed(format!("{e:?}")))?
            .dyn_into()
            .map_err(|_| {
                CapabilityError::CheckFailed("mapboxgl.supported is not a function".to_string())
            })?;

        let result = check
            .call0(&mapbox)
            .map_err(|e| CapabilityError::CheckFailed(format!("{e:?}")))?;

        Ok(result.as_bool().unwrap_or(false))
    }
}
