//! Scoped listener registrations.

use std::fmt;

/// Keeps a listener registered for as long as it lives.
///
/// Dropping the guard (or calling [`ListenerGuard::release`]) runs the
/// deregistration exactly once.
#[must_use = "dropping the guard deregisters the listener immediately"]
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    /// Guard that runs `release` when dropped.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Deregister now.
    pub fn release(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_drop_releases_once() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let guard = ListenerGuard::new(move || counter.set(counter.get() + 1));
        assert_eq!(released.get(), 0);
        drop(guard);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_explicit_release() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        ListenerGuard::new(move || counter.set(counter.get() + 1)).release();
        assert_eq!(released.get(), 1);
    }
}
