//! Scroll the list into view when the visible cards change.
//!
//! A change is recorded when the store updates ([`ScrollSync::note_change`])
//! and performed once the new state is on screen ([`ScrollSync::flush`]).
//! Hosts that render synchronously can call [`ScrollSync::on_state_changed`],
//! which does both.

use std::cell::{Cell, RefCell};

use crate::selectors::get_visible_cards;
use crate::state::StoreState;

/// Handle to the rendered list container.
pub trait ListHandle {
    /// Scroll the container into view. Returns `false` when it is not
    /// attached to the document.
    fn scroll_into_view(&self) -> bool;
}

/// Compares visible cards by value across store updates.
#[derive(Default)]
pub struct ScrollSync {
    list: RefCell<Option<Box<dyn ListHandle>>>,
    pending: Cell<bool>,
}

impl ScrollSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, handle: Box<dyn ListHandle>) {
        *self.list.borrow_mut() = Some(handle);
    }

    pub fn detach(&self) {
        self.list.borrow_mut().take();
    }

    /// Record a pending scroll when `get_visible_cards` differs structurally
    /// between the two states. Returns whether a scroll is pending.
    pub fn note_change(&self, prev: &StoreState, next: &StoreState) -> bool {
        if get_visible_cards(prev) != get_visible_cards(next) {
            self.pending.set(true);
        }
        self.pending.get()
    }

    /// Perform the pending scroll, if any. The pending flag is cleared even
    /// when no list is mounted. Returns whether a scroll happened.
    pub fn flush(&self) -> bool {
        if !self.pending.replace(false) {
            return false;
        }
        match self.list.borrow().as_ref() {
            Some(list) => {
                let scrolled = list.scroll_into_view();
                tracing::debug!(scrolled, "visible cards changed");
                scrolled
            }
            None => false,
        }
    }

    /// [`note_change`](Self::note_change) then [`flush`](Self::flush).
    pub fn on_state_changed(&self, prev: &StoreState, next: &StoreState) -> bool {
        self.note_change(prev, next);
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::model::{Category, Network};

    struct CountingList {
        scrolls: Rc<Cell<usize>>,
        mounted: bool,
    }

    impl ListHandle for CountingList {
        fn scroll_into_view(&self) -> bool {
            if self.mounted {
                self.scrolls.set(self.scrolls.get() + 1);
            }
            self.mounted
        }
    }

    fn card(id: &str) -> Network {
        Network {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: Category::Other,
            city: None,
            us_state: None,
            lat: 0.0,
            lng: 0.0,
            website: None,
            languages: Vec::new(),
        }
    }

    fn with_cards(ids: &[&str]) -> StoreState {
        StoreState::with_records(ids.iter().map(|id| card(id)).collect(), Vec::new())
    }

    fn attached(mounted: bool) -> (ScrollSync, Rc<Cell<usize>>) {
        let scrolls = Rc::new(Cell::new(0));
        let sync = ScrollSync::new();
        sync.attach(Box::new(CountingList {
            scrolls: scrolls.clone(),
            mounted,
        }));
        (sync, scrolls)
    }

    #[test]
    fn test_equal_contents_do_not_scroll() {
        let (sync, scrolls) = attached(true);
        assert!(!sync.on_state_changed(&with_cards(&["a", "b"]), &with_cards(&["a", "b"])));
        assert_eq!(scrolls.get(), 0);
    }

    #[test]
    fn test_changed_contents_scroll_once() {
        let (sync, scrolls) = attached(true);
        assert!(sync.on_state_changed(&with_cards(&["a", "b"]), &with_cards(&["a", "c"])));
        assert_eq!(scrolls.get(), 1);
    }

    #[test]
    fn test_unrelated_change_does_not_scroll() {
        let (sync, scrolls) = attached(true);
        let prev = with_cards(&["a"]);
        let mut next = prev.clone();
        next.selections.hovered_point_id = Some("a".to_string());
        assert!(!sync.on_state_changed(&prev, &next));
        assert_eq!(scrolls.get(), 0);
    }

    #[test]
    fn test_missing_or_detached_list_is_skipped() {
        let sync = ScrollSync::new();
        assert!(!sync.on_state_changed(&with_cards(&["a"]), &with_cards(&["b"])));

        let (sync, scrolls) = attached(false);
        assert!(!sync.on_state_changed(&with_cards(&["a"]), &with_cards(&["b"])));
        assert_eq!(scrolls.get(), 0);

        let (sync, scrolls) = attached(true);
        sync.detach();
        assert!(!sync.on_state_changed(&with_cards(&["a"]), &with_cards(&["b"])));
        assert_eq!(scrolls.get(), 0);
    }

    #[test]
    fn test_noted_change_scrolls_on_flush() {
        let (sync, scrolls) = attached(true);
        assert!(sync.note_change(&with_cards(&[]), &with_cards(&["a"])));
        // Later updates with unchanged cards keep the scroll pending.
        assert!(sync.note_change(&with_cards(&["a"]), &with_cards(&["a"])));
        assert_eq!(scrolls.get(), 0);

        assert!(sync.flush());
        assert_eq!(scrolls.get(), 1);
        assert!(!sync.flush());
        assert_eq!(scrolls.get(), 1);
    }

    #[test]
    fn test_flush_without_list_drops_pending_scroll() {
        let sync = ScrollSync::new();
        sync.note_change(&with_cards(&["a"]), &with_cards(&["b"]));
        assert!(!sync.flush());

        let scrolls = Rc::new(Cell::new(0));
        sync.attach(Box::new(CountingList {
            scrolls: scrolls.clone(),
            mounted: true,
        }));
        assert!(!sync.flush());
        assert_eq!(scrolls.get(), 0);
    }
}
