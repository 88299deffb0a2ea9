//! Core of the aidmap layout shell.
//!
//! Framework-free: the front end supplies the browser seams
//! ([`Viewport`], [`CapabilityCheck`], [`ListHandle`]) and renders the
//! [`LayoutView`] this crate computes.
//!
//! - [`store`] - state container, dispatch queue and subscriptions
//! - [`selectors`] - read accessors over [`StoreState`]
//! - [`nav`] - responsive navigation state machine
//! - [`route`] - top-level route matching
//! - [`props`] - store-to-props and callback-to-action tables
//! - [`layout`] - pure render description
//! - [`scroll`] - list scroll synchronization
//! - [`shell`] - lifecycle (`initialize` / `on_state_changed` / `dispose`)

pub mod action;
pub mod error;
pub mod i18n;
pub mod layout;
pub mod listener;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;
pub mod nav;
pub mod props;
mod reducer;
pub mod route;
pub mod scroll;
pub mod selectors;
pub mod shell;
pub mod state;
pub mod store;
pub mod viewport;

pub use action::{Action, Effect};
pub use error::{CapabilityError, ShellError, ViewportError};
pub use layout::{CapabilityCheck, ContentKind, ContentView, HeaderView, LayoutView};
pub use listener::ListenerGuard;
pub use nav::{HeaderPresentation, NavState};
pub use reducer::reduce;
pub use route::Route;
pub use scroll::ListHandle;
pub use shell::Shell;
pub use state::StoreState;
pub use store::{Dispatch, Store, StoreAccess};
pub use viewport::{MOBILE_BREAKPOINT, Viewport, is_mobile};
