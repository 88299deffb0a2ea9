//! Layout shell lifecycle.
//!
//! [`Shell`] owns the navigation state and the two listener registrations
//! (viewport resize, store changes). Call order:
//!
//! 1. [`Shell::initialize`] - dispatches `RequestNetworks` then
//!    `RequestFoodResources`, measures the viewport, then subscribes to
//!    store changes and resize events. Fetches are not awaited. If the
//!    resize subscription fails, the fetches and the store subscription
//!    stay in place and a later call only retries the resize subscription.
//! 2. Any number of [`Shell::toggle_menu`], [`Shell::handle_nav`],
//!    [`Shell::render`], [`Shell::after_render`] and
//!    [`Shell::on_state_changed`] calls, driven by the event loop. The store
//!    subscription records card changes; `after_render` scrolls for them.
//! 3. [`Shell::dispose`] - releases both listeners. Dropping the shell does
//!    the same.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::action::Action;
use crate::error::ShellError;
use crate::layout::{self, CapabilityCheck, LayoutView};
use crate::listener::ListenerGuard;
use crate::nav::NavState;
use crate::props::ShellProps;
use crate::route::Route;
use crate::scroll::{ListHandle, ScrollSync};
use crate::state::StoreState;
use crate::store::StoreAccess;
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Created,
    Initialized,
    Disposed,
}

/// Navigation state shared with the resize callback.
#[derive(Default)]
struct NavCell {
    state: Cell<NavState>,
    observer: RefCell<Option<Box<dyn Fn(NavState)>>>,
}

impl NavCell {
    fn update(&self, f: impl FnOnce(&mut NavState)) {
        let before = self.state.get();
        let mut after = before;
        f(&mut after);
        if after == before {
            return;
        }
        self.state.set(after);
        tracing::debug!(
            is_mobile = after.is_mobile,
            collapsed = after.collapsed,
            "navigation state changed"
        );
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(after);
        }
    }
}

/// Root layout controller.
pub struct Shell<S, V, P>
where
    S: StoreAccess,
    V: Viewport,
    P: CapabilityCheck,
{
    store: S,
    viewport: V,
    check: P,
    nav: Rc<NavCell>,
    scroll: Rc<ScrollSync>,
    resize_guard: Option<ListenerGuard>,
    store_guard: Option<ListenerGuard>,
    fetches_requested: bool,
    phase: Phase,
}

impl<S, V, P> Shell<S, V, P>
where
    S: StoreAccess,
    V: Viewport,
    P: CapabilityCheck,
{
    pub fn new(store: S, viewport: V, check: P) -> Self {
        Self {
            store,
            viewport,
            check,
            nav: Rc::new(NavCell::default()),
            scroll: Rc::new(ScrollSync::new()),
            resize_guard: None,
            store_guard: None,
            fetches_requested: false,
            phase: Phase::Created,
        }
    }

    /// Call `observer` after every navigation state change.
    pub fn on_nav_change(self, observer: impl Fn(NavState) + 'static) -> Self {
        *self.nav.observer.borrow_mut() = Some(Box::new(observer));
        self
    }

    pub fn initialize(&mut self) -> Result<(), ShellError> {
        match self.phase {
            Phase::Created => {}
            Phase::Initialized => return Err(ShellError::AlreadyInitialized),
            Phase::Disposed => return Err(ShellError::Disposed),
        }

        if !self.fetches_requested {
            self.store.dispatch(Action::RequestNetworks);
            self.store.dispatch(Action::RequestFoodResources);
            self.fetches_requested = true;
        }

        let width = self.viewport.width();
        self.nav.update(|nav| nav.resize(width));

        if self.store_guard.is_none() {
            let scroll = self.scroll.clone();
            self.store_guard = Some(self.store.subscribe(Rc::new(
                move |prev: &StoreState, next: &StoreState| {
                    scroll.note_change(prev, next);
                },
            )));
        }

        let nav = self.nav.clone();
        self.resize_guard = Some(
            self.viewport
                .subscribe_resize(Rc::new(move |width| nav.update(|n| n.resize(width))))?,
        );

        self.phase = Phase::Initialized;
        tracing::debug!(width, "shell initialized");
        Ok(())
    }

    pub fn nav(&self) -> NavState {
        self.nav.state.get()
    }

    /// Header tap on the collapsed mobile menu.
    pub fn toggle_menu(&self) {
        self.nav.update(NavState::toggle_menu);
    }

    /// A menu item was chosen.
    pub fn handle_nav(&self) {
        self.nav.update(NavState::collapse_for_navigation);
        self.store.dispatch(Action::ResetToDefaultView);
    }

    pub fn attach_list(&self, handle: impl ListHandle + 'static) {
        self.scroll.attach(Box::new(handle));
    }

    pub fn detach_list(&self) {
        self.scroll.detach();
    }

    /// Post-update hook for hosts that render synchronously. Returns whether
    /// the list was scrolled.
    pub fn on_state_changed(&self, prev: &StoreState, next: &StoreState) -> bool {
        self.scroll.on_state_changed(prev, next)
    }

    /// Scroll for card changes recorded since the last render. Call once the
    /// latest state is on screen. Returns whether the list was scrolled.
    pub fn after_render(&self) -> bool {
        self.scroll.flush()
    }

    /// Render against the store's current state.
    pub fn render(&self, route: Route) -> LayoutView {
        self.store
            .with_state(|state| self.render_state(state, route))
    }

    /// Render against an explicit state snapshot.
    pub fn render_state(&self, state: &StoreState, route: Route) -> LayoutView {
        let props = ShellProps::from_state(state);
        layout::render(&props, self.nav(), route, &self.check)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_listening(&self) -> bool {
        self.resize_guard.is_some() || self.store_guard.is_some()
    }

    /// Release the resize and store listeners. Idempotent.
    pub fn dispose(&mut self) {
        if self.phase == Phase::Disposed {
            return;
        }
        self.resize_guard.take();
        self.store_guard.take();
        self.scroll.detach();
        self.phase = Phase::Disposed;
        tracing::debug!("shell disposed");
    }
}

impl<S, V, P> Drop for Shell<S, V, P>
where
    S: StoreAccess,
    V: Viewport,
    P: CapabilityCheck,
{
    fn drop(&mut self) {
        self.dispose();
    }
}
