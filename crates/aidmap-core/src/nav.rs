//! Responsive navigation state machine.
//!
//! | `is_mobile` | `collapsed` | Presentation |
//! |-------------|-------------|--------------|
//! | false | any | [`HeaderPresentation::HorizontalMenu`] |
//! | true | true | [`HeaderPresentation::CollapsedIcon`] |
//! | true | false | [`HeaderPresentation::InlineSidebar`] |

use crate::viewport::is_mobile;

/// Which header the layout renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderPresentation {
    /// Desktop: full horizontal menu.
    HorizontalMenu,
    /// Mobile, menu closed: a tappable menu icon.
    CollapsedIcon,
    /// Mobile, menu open: inline sidebar menu.
    InlineSidebar,
}

/// Viewport mode plus mobile menu collapse flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub is_mobile: bool,
    pub collapsed: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            is_mobile: false,
            collapsed: true,
        }
    }
}

impl NavState {
    pub fn presentation(&self) -> HeaderPresentation {
        match (self.is_mobile, self.collapsed) {
            (false, _) => HeaderPresentation::HorizontalMenu,
            (true, true) => HeaderPresentation::CollapsedIcon,
            (true, false) => HeaderPresentation::InlineSidebar,
        }
    }

    /// Recompute `is_mobile` from a new viewport width.
    pub fn resize(&mut self, width: f64) {
        self.is_mobile = is_mobile(width);
    }

    /// Header tap: flip the collapse flag.
    pub fn toggle_menu(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// A menu item was chosen: close the mobile menu.
    pub fn collapse_for_navigation(&mut self) {
        if self.is_mobile {
            self.collapsed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mobile(collapsed: bool) -> NavState {
        NavState {
            is_mobile: true,
            collapsed,
        }
    }

    #[test]
    fn test_initial_state() {
        let nav = NavState::default();
        assert!(nav.collapsed);
        assert_eq!(nav.presentation(), HeaderPresentation::HorizontalMenu);
    }

    #[test]
    fn test_desktop_ignores_collapse_flag() {
        for collapsed in [true, false] {
            let nav = NavState {
                is_mobile: false,
                collapsed,
            };
            assert_eq!(nav.presentation(), HeaderPresentation::HorizontalMenu);
        }
    }

    #[test]
    fn test_tap_expands_collapsed_menu() {
        let mut nav = mobile(true);
        assert_eq!(nav.presentation(), HeaderPresentation::CollapsedIcon);
        nav.toggle_menu();
        assert!(!nav.collapsed);
        assert!(nav.is_mobile);
        assert_eq!(nav.presentation(), HeaderPresentation::InlineSidebar);
    }

    #[test]
    fn test_navigation_always_collapses_on_mobile() {
        for collapsed in [true, false] {
            let mut nav = mobile(collapsed);
            nav.collapse_for_navigation();
            assert!(nav.collapsed);
        }
    }

    #[test]
    fn test_navigation_on_desktop_leaves_flag() {
        let mut nav = NavState {
            is_mobile: false,
            collapsed: false,
        };
        nav.collapse_for_navigation();
        assert!(!nav.collapsed);
    }

    #[test]
    fn test_resize_overrides_menu_state() {
        let mut nav = mobile(false);
        nav.resize(1024.0);
        assert_eq!(nav.presentation(), HeaderPresentation::HorizontalMenu);
        nav.resize(768.0);
        assert_eq!(nav.presentation(), HeaderPresentation::InlineSidebar);
    }
}
