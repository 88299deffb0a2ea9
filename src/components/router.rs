//! Application router component.
//!
//! Path-based routing on the History API. The pathname is the source of
//! truth: [`Route::match_path`] maps it to exactly one content subtree,
//! `popstate` keeps it in sync with back/forward, and [`RouteContext::navigate`]
//! pushes new entries.

use aidmap_core::Route;
use leptos::prelude::*;

use crate::components::layout::DefaultLayout;
use crate::utils::dom;
use crate::utils::platform::listen_window;

/// Current route, readable from any component.
#[derive(Clone, Copy)]
pub struct RouteContext(pub RwSignal<Route>);

impl RouteContext {
    pub fn get(&self) -> Route {
        self.0.get()
    }

    /// Push `route` onto history and switch to it.
    pub fn navigate(&self, route: Route) {
        if self.0.get_untracked() != route {
            dom::push_path(route.path());
        }
        self.0.set(route);
    }
}

/// Main application router.
///
/// - `/table-view` → networks table
/// - `/about`, `/resources`, `/press`, `/site-information` → informational pages
/// - anything else → map and list
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(Route::match_path(&dom::pathname()));
    provide_context(RouteContext(route));

    // Back/forward buttons. The guard lives as long as the router.
    match listen_window("popstate", move || {
        route.set(Route::match_path(&dom::pathname()));
    }) {
        Ok(guard) => {
            let _ = StoredValue::new_local(guard);
        }
        Err(err) => tracing::warn!(error = %err, "back/forward navigation not tracked"),
    }

    Effect::new(move || {
        tracing::debug!(route = ?route.get(), "route changed");
    });

    view! { <DefaultLayout /> }
}
