//! Client state container.
//!
//! [`Store`] owns the [`StoreState`], applies [`Action`]s through the
//! reducer, notifies subscribers with `(previous, current)` snapshots, and
//! hands requested [`Effect`]s to the host's effect handler.
//!
//! # Dispatch semantics
//!
//! `dispatch` only enqueues. If no dispatch is in progress the queue is
//! drained immediately in FIFO order; actions dispatched from a listener or
//! an effect handler are processed after the current action has finished
//! notifying everyone. Each action therefore runs to completion.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::action::{Action, Effect};
use crate::listener::ListenerGuard;
use crate::reducer::reduce;
use crate::state::StoreState;

/// Subscriber callback, called with `(previous, current)` state.
pub type StateListener = dyn Fn(&StoreState, &StoreState);

/// Executes reducer side effects (fetches) on behalf of the store.
pub type EffectHandler = dyn Fn(Effect);

// ============================================================================
// Traits
// ============================================================================

/// Write side of the store.
pub trait Dispatch {
    /// Enqueue `action`. Never blocks on the outcome.
    fn dispatch(&self, action: Action);
}

impl<T: Dispatch + ?Sized> Dispatch for &T {
    fn dispatch(&self, action: Action) {
        (**self).dispatch(action);
    }
}

impl<T: Dispatch + ?Sized> Dispatch for Rc<T> {
    fn dispatch(&self, action: Action) {
        (**self).dispatch(action);
    }
}

/// Everything the layout shell needs from a store.
pub trait StoreAccess: Dispatch {
    /// Run `f` against the current state.
    fn with_state<R>(&self, f: impl FnOnce(&StoreState) -> R) -> R;

    /// Register `listener` for state changes until the guard is dropped.
    fn subscribe(&self, listener: Rc<StateListener>) -> ListenerGuard;
}

// ============================================================================
// Store
// ============================================================================

struct Inner {
    state: RefCell<StoreState>,
    queue: RefCell<VecDeque<Action>>,
    draining: Cell<bool>,
    listeners: RefCell<Vec<(u64, Rc<StateListener>)>>,
    next_listener_id: Cell<u64>,
    effects: RefCell<Option<Rc<EffectHandler>>>,
}

/// Shared handle to the application store. Cloning is cheap.
#[derive(Clone)]
pub struct Store {
    inner: Rc<Inner>,
}

/// Non-owning store handle, for effect handlers that must not keep the store alive.
#[derive(Clone)]
pub struct WeakStore(Weak<Inner>);

impl WeakStore {
    pub fn upgrade(&self) -> Option<Store> {
        self.0.upgrade().map(|inner| Store { inner })
    }
}

impl Store {
    pub fn new(state: StoreState) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                queue: RefCell::new(VecDeque::new()),
                draining: Cell::new(false),
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(0),
                effects: RefCell::new(None),
            }),
        }
    }

    /// Install the handler that performs fetches. Replaces any previous one.
    ///
    /// Without a handler, effects are dropped with a debug log.
    pub fn set_effect_handler(&self, handler: impl Fn(Effect) + 'static) {
        *self.inner.effects.borrow_mut() = Some(Rc::new(handler));
    }

    pub fn downgrade(&self) -> WeakStore {
        WeakStore(Rc::downgrade(&self.inner))
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.inner.state.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn drain(&self) {
        if self.inner.draining.replace(true) {
            return;
        }
        loop {
            let next = self.inner.queue.borrow_mut().pop_front();
            let Some(action) = next else { break };
            self.process(action);
        }
        self.inner.draining.set(false);
    }

    fn process(&self, action: Action) {
        tracing::debug!(action = action.name(), "dispatch");

        let previous = self.inner.state.borrow().clone();
        let effects = reduce(&mut self.inner.state.borrow_mut(), action);

        {
            let current = self.inner.state.borrow();
            if *current != previous {
                let listeners: Vec<Rc<StateListener>> = self
                    .inner
                    .listeners
                    .borrow()
                    .iter()
                    .map(|(_, listener)| listener.clone())
                    .collect();
                for listener in listeners {
                    listener(&previous, &current);
                }
            }
        }

        if effects.is_empty() {
            return;
        }
        let handler = self.inner.effects.borrow().clone();
        match handler {
            Some(handler) => effects.into_iter().for_each(|effect| handler(effect)),
            None => tracing::debug!(?effects, "no effect handler installed"),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreState::default())
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        self.inner.queue.borrow_mut().push_back(action);
        self.drain();
    }
}

impl StoreAccess for Store {
    fn with_state<R>(&self, f: impl FnOnce(&StoreState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    fn subscribe(&self, listener: Rc<StateListener>) -> ListenerGuard {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, listener));

        let weak = Rc::downgrade(&self.inner);
        ListenerGuard::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SiteLanguage, ViewState};

    #[test]
    fn test_listener_sees_previous_and_current() {
        let store = Store::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _guard = store.subscribe(Rc::new(move |prev: &StoreState, next: &StoreState| {
            sink.borrow_mut().push((
                prev.selections.site_language,
                next.selections.site_language,
            ));
        }));

        store.dispatch(Action::SetSiteLanguage(SiteLanguage::Es));

        assert_eq!(*seen.borrow(), vec![(SiteLanguage::En, SiteLanguage::Es)]);
    }

    #[test]
    fn test_unchanged_state_does_not_notify() {
        let store = Store::default();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let _guard = store.subscribe(Rc::new(move |_: &StoreState, _: &StoreState| {
            counter.set(counter.get() + 1)
        }));

        store.dispatch(Action::ResetToDefaultView);

        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_dropping_guard_unsubscribes() {
        let store = Store::default();
        let guard = store.subscribe(Rc::new(|_: &StoreState, _: &StoreState| {}));
        assert_eq!(store.listener_count(), 1);
        drop(guard);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_effects_reach_handler_in_order() {
        let store = Store::default();
        let effects = Rc::new(RefCell::new(Vec::new()));
        let sink = effects.clone();
        store.set_effect_handler(move |effect| sink.borrow_mut().push(effect));

        store.dispatch(Action::RequestNetworks);
        store.dispatch(Action::RequestFoodResources);

        assert_eq!(
            *effects.borrow(),
            vec![Effect::FetchNetworks, Effect::FetchFoodResources]
        );
    }

    #[test]
    fn test_dispatch_from_listener_runs_after_current_action() {
        let store = Store::default();
        let order = Rc::new(RefCell::new(Vec::new()));

        let reentrant = store.downgrade();
        let first = order.clone();
        let _a = store.subscribe(Rc::new(move |_: &StoreState, next: &StoreState| {
            first.borrow_mut().push(("a", next.selections.view_state));
            if next.selections.view_state == ViewState::List
                && let Some(store) = reentrant.upgrade()
            {
                store.dispatch(Action::ResetToDefaultView);
            }
        }));
        let second = order.clone();
        let _b = store.subscribe(Rc::new(move |_: &StoreState, next: &StoreState| {
            second.borrow_mut().push(("b", next.selections.view_state));
        }));

        store.dispatch(Action::SetUsState("NY".to_string()));

        assert_eq!(
            *order.borrow(),
            vec![
                ("a", ViewState::List),
                ("b", ViewState::List),
                ("a", ViewState::Default),
                ("b", ViewState::Default),
            ]
        );
    }

    #[test]
    fn test_effect_handler_can_dispatch_results() {
        let store = Store::default();
        let weak = store.downgrade();
        store.set_effect_handler(move |effect| {
            if effect == Effect::FetchNetworks
                && let Some(store) = weak.upgrade()
            {
                store.dispatch(Action::ReceiveNetworks(Vec::new()));
            }
        });

        store.dispatch(Action::RequestNetworks);

        assert_eq!(
            store.snapshot().networks.status,
            crate::model::LoadStatus::Loaded
        );
    }
}
