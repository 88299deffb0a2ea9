//! In-memory stand-ins for the browser seams, for tests.
//!
//! Enabled with the `mock` feature.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{CapabilityError, ViewportError};
use crate::layout::CapabilityCheck;
use crate::listener::ListenerGuard;
use crate::scroll::ListHandle;
use crate::viewport::{ResizeCallback, Viewport};

#[derive(Default)]
struct ViewportInner {
    width: Cell<f64>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Rc<ResizeCallback>)>>,
}

/// Viewport whose width the test controls. Clones share state.
#[derive(Clone, Default)]
pub struct FakeViewport {
    inner: Rc<ViewportInner>,
}

impl FakeViewport {
    pub fn new(width: f64) -> Self {
        let viewport = Self::default();
        viewport.inner.width.set(width);
        viewport
    }

    /// Change the width and notify every registered listener.
    pub fn resize(&self, width: f64) {
        self.inner.width.set(width);
        let listeners: Vec<_> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for listener in listeners {
            listener(width);
        }
    }

    /// Registered resize listeners. Non-zero after disposal means a leak.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl Viewport for FakeViewport {
    fn width(&self) -> f64 {
        self.inner.width.get()
    }

    fn subscribe_resize(
        &self,
        callback: Rc<ResizeCallback>,
    ) -> Result<ListenerGuard, ViewportError> {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, callback));

        let inner = Rc::downgrade(&self.inner);
        Ok(ListenerGuard::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            }
        }))
    }
}

/// Check with a fixed answer.
#[derive(Clone, Debug)]
pub struct StaticSupport(pub Result<bool, CapabilityError>);

impl CapabilityCheck for StaticSupport {
    fn supported(&self) -> Result<bool, CapabilityError> {
        self.0.clone()
    }
}

/// List handle that counts scrolls. Clones share the counter.
#[derive(Clone, Default)]
pub struct RecordingList {
    scrolls: Rc<Cell<usize>>,
}

impl RecordingList {
    pub fn scrolls(&self) -> usize {
        self.scrolls.get()
    }
}

impl ListHandle for RecordingList {
    fn scroll_into_view(&self) -> bool {
        self.scrolls.set(self.scrolls.get() + 1);
        true
    }
}
