//! Root application module.
//!
//! Contains the App component, the AppContext definition and the wiring
//! between the [`Store`] and Leptos signals.

use aidmap_core::model::{FoodResource, Network};
use aidmap_core::store::WeakStore;
use aidmap_core::{Action, Dispatch, Effect, Store, StoreAccess, StoreState};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::config::SiteConfig;
use crate::utils::{Dataset, fetch_records};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context, provided at the root of the component tree.
///
/// The [`Store`] is the source of truth. `state` mirrors it as a signal so
/// views re-render on change; components never write to `state` directly,
/// they dispatch through `store`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Latest store state, updated after every dispatched change.
    pub state: RwSignal<StoreState>,
    /// The store itself (not `Send`, hence local storage).
    pub store: StoredValue<Store, LocalStorage>,
    /// Deployment settings.
    pub config: StoredValue<SiteConfig>,
}

impl AppContext {
    /// Creates the store, hooks up fetching and the state mirror.
    pub fn new(config: SiteConfig) -> Self {
        let store = Store::default();
        install_effect_handler(&store, config.clone());

        let state = RwSignal::new(store.snapshot());
        let mirror = store.subscribe(std::rc::Rc::new(move |_: &StoreState, next: &StoreState| {
            state.set(next.clone());
        }));
        // Dropped with the owner, i.e. when the app unmounts.
        let _ = StoredValue::new_local(mirror);

        Self {
            state,
            store: StoredValue::new_local(store),
            config: StoredValue::new(config),
        }
    }
}

// ============================================================================
// Effects
// ============================================================================

/// Perform the store's fetch requests in the background.
///
/// Outcomes come back as actions; a failure is recorded on the store and
/// logged, never retried.
fn install_effect_handler(store: &Store, config: SiteConfig) {
    let weak = store.downgrade();
    store.set_effect_handler(move |effect| {
        let weak = weak.clone();
        let config = config.clone();
        spawn_local(async move {
            let action = match effect {
                Effect::FetchNetworks => {
                    match fetch_records::<Network>(Dataset::Networks, &config).await {
                        Ok(networks) => {
                            tracing::info!(count = networks.len(), "networks loaded");
                            Action::ReceiveNetworks(networks)
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "failed to load networks");
                            Action::NetworksFailed(err.to_string())
                        }
                    }
                }
                Effect::FetchFoodResources => {
                    match fetch_records::<FoodResource>(Dataset::FoodResources, &config).await {
                        Ok(resources) => {
                            tracing::info!(count = resources.len(), "food resources loaded");
                            Action::ReceiveFoodResources(resources)
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "failed to load food resources");
                            Action::FoodResourcesFailed(err.to_string())
                        }
                    }
                }
            };
            deliver(&weak, action);
        });
    });
}

fn deliver(store: &WeakStore, action: Action) {
    match store.upgrade() {
        Some(store) => store.dispatch(action),
        None => tracing::debug!(action = action.name(), "store gone, dropping result"),
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component.
///
/// Creates and provides the global [`AppContext`], then renders the router,
/// which renders the layout.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx);

    view! { <AppRouter /> }
}
