//! Root layout component.
//!
//! Drives an [`aidmap_core::Shell`] with the browser seams and renders the
//! [`LayoutView`] it computes:
//!
//! - header: horizontal menu, collapsed menu icon, or inline sidebar
//! - content: exactly one route subtree
//! - footer
//!
//! The view is split into memos per region, so a store change only
//! re-renders the regions whose props changed. The route subtree is
//! remounted only when its [`ContentKind`] changes.
//!
//! Store values only reach child components through the prop structs in
//! [`LayoutView`]; child callbacks only reach the store through [`ViewCallbacks`].

use aidmap_core::layout::HomeExtras;
use aidmap_core::model::{Category, LatLng, SiteLanguage, ViewState};
use aidmap_core::props::Callbacks;
use aidmap_core::{
    ContentKind, ContentView, HeaderView, LayoutView, ListHandle, NavState, Route, Shell, Store,
};
use leptos::html::Div;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::filters::Filters;
use crate::components::icons as ic;
use crate::components::list_view::ListView;
use crate::components::map::MapView;
use crate::components::nav_menu::NavMenu;
use crate::components::pages::{
    About, Banner, NoWebGl, PageFooter, Press, PrivacyPolicy, Resources, SubmitButton,
};
use crate::components::router::RouteContext;
use crate::components::table::NetworksTable;
use crate::config::SiteConfig;
use crate::utils::platform::{BrowserViewport, MapboxSupport};

stylance::import_crate_style!(css, "src/components/layout.module.css");

type BrowserShell = Shell<Store, BrowserViewport, MapboxSupport>;

// ============================================================================
// Seams
// ============================================================================

/// The list container, once mounted and attached to the document.
struct ListElement(NodeRef<Div>);

impl ListHandle for ListElement {
    fn scroll_into_view(&self) -> bool {
        match self.0.get_untracked() {
            Some(el) if el.is_connected() => {
                el.scroll_into_view();
                true
            }
            _ => false,
        }
    }
}

/// Child callbacks bound to store actions.
#[derive(Clone, Copy)]
pub struct ViewCallbacks {
    pub set_filters: Callback<Vec<Category>>,
    pub set_lat_lng: Callback<LatLng>,
    pub set_hovered_point: Callback<Option<String>>,
    pub set_site_language: Callback<SiteLanguage>,
    pub set_us_state: Callback<String>,
    pub reset_to_default_view: Callback<()>,
}

impl ViewCallbacks {
    fn new(store: StoredValue<Store, LocalStorage>) -> Self {
        Self {
            set_filters: Callback::new(move |categories| {
                store.with_value(|s| Callbacks::new(s).set_filters(categories))
            }),
            set_lat_lng: Callback::new(move |location| {
                store.with_value(|s| Callbacks::new(s).set_lat_lng(location))
            }),
            set_hovered_point: Callback::new(move |id| {
                store.with_value(|s| Callbacks::new(s).set_hovered_point(id))
            }),
            set_site_language: Callback::new(move |language| {
                store.with_value(|s| Callbacks::new(s).set_site_language(language))
            }),
            set_us_state: Callback::new(move |us_state| {
                store.with_value(|s| Callbacks::new(s).set_us_state(us_state))
            }),
            reset_to_default_view: Callback::new(move |_: ()| {
                store.with_value(|s| Callbacks::new(s).reset_to_default_view())
            }),
        }
    }
}

// ============================================================================
// DefaultLayout
// ============================================================================

/// Responsive page shell around the routed content.
///
/// Renders nothing until the network records have arrived.
#[component]
pub fn DefaultLayout() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let nav = RwSignal::new(NavState::default());
    let list_ref = NodeRef::<Div>::new();

    let shell: StoredValue<BrowserShell, LocalStorage> = StoredValue::new_local(
        Shell::new(ctx.store.get_value(), BrowserViewport, MapboxSupport)
            .on_nav_change(move |state| nav.set(state)),
    );
    shell.update_value(|shell| {
        shell.attach_list(ListElement(list_ref));
        if let Err(err) = shell.initialize() {
            tracing::warn!(error = %err, "layout shell initialization incomplete");
        }
    });
    on_cleanup(move || {
        shell.update_value(BrowserShell::dispose);
    });

    // The store listener only records that the cards changed; the scroll
    // happens once the new cards are in the document.
    Effect::new(move || {
        ctx.state.track();
        request_animation_frame(move || {
            shell.try_with_value(BrowserShell::after_render);
        });
    });

    let callbacks = ViewCallbacks::new(ctx.store);
    let on_toggle = Callback::new(move |_: ()| shell.with_value(BrowserShell::toggle_menu));
    let on_nav = Callback::new(move |route: Route| {
        route_ctx.navigate(route);
        shell.with_value(BrowserShell::handle_nav);
    });

    let layout = Memo::new(move |_| {
        nav.track();
        let route = route_ctx.get();
        ctx.state
            .with(|state| shell.try_with_value(|shell| shell.render_state(state, route)))
            .unwrap_or(LayoutView::Empty)
    });
    let page = Memo::new(move |_| layout.with(|view| *view != LayoutView::Empty));
    let header = Memo::new(move |_| layout.with(|view| view.header().cloned()));
    let content = Memo::new(move |_| layout.with(|view| view.content().cloned()));
    let kind = Memo::new(move |_| content.with(|view| view.as_ref().map(ContentView::kind)));
    let footer = Memo::new(move |_| layout.with(LayoutView::footer).unwrap_or_default());

    let config = ctx.config;

    view! {
        <Show when=move || page.get()>
            <div class=css::layout>
                {move || header.get().map(|header| render_header(header, on_toggle, on_nav, callbacks))}
                <div class=css::body>
                    <main class=css::content>
                        <div class=css::mainContainer>
                            {move || {
                                kind.get()
                                    .map(|kind| render_content(kind, content, callbacks, list_ref, config))
                            }}
                        </div>
                    </main>
                    {move || view! { <PageFooter site_language=footer.get().site_language /> }}
                </div>
            </div>
        </Show>
    }
}

fn render_header(
    header: HeaderView,
    on_toggle: Callback<()>,
    on_nav: Callback<Route>,
    callbacks: ViewCallbacks,
) -> AnyView {
    match header {
        HeaderView::Horizontal(props) => view! {
            <header class=css::header>
                <NavMenu props=props on_nav=on_nav on_language=callbacks.set_site_language />
            </header>
        }
        .into_any(),
        HeaderView::CollapsedIcon => view! {
            <header class=css::header on:click=move |_| on_toggle.run(())>
                <span class=css::menuButton aria-label="Open menu">
                    <Icon icon=ic::MENU />
                </span>
            </header>
        }
        .into_any(),
        HeaderView::Sidebar(props) => view! {
            <aside class=css::sider>
                <NavMenu props=props on_nav=on_nav on_language=callbacks.set_site_language />
            </aside>
        }
        .into_any(),
    }
}

/// Mount the subtree for `kind`. Values inside it follow `content`.
fn render_content(
    kind: ContentKind,
    content: Memo<Option<ContentView>>,
    callbacks: ViewCallbacks,
    list_ref: NodeRef<Div>,
    config: StoredValue<SiteConfig>,
) -> AnyView {
    match kind {
        ContentKind::Interactive => render_interactive(content, callbacks, list_ref, config),
        _ => view! { {move || content.get().map(|content| render_static(content, config))} }
            .into_any(),
    }
}

fn render_static(content: ContentView, config: StoredValue<SiteConfig>) -> AnyView {
    match content {
        ContentView::NetworksTable(props) => view! { <NetworksTable props=props /> }.into_any(),
        ContentView::About(props) => view! { <About site_language=props.site_language /> }.into_any(),
        ContentView::Resources(props) => {
            view! { <Resources site_language=props.site_language /> }.into_any()
        }
        ContentView::Press => view! { <Press /> }.into_any(),
        ContentView::SiteInformation => view! { <PrivacyPolicy /> }.into_any(),
        ContentView::Unsupported(extras) => view! {
            <NoWebGl site_language=extras.site_language />
            {render_home_extras(extras, config)}
        }
        .into_any(),
        ContentView::Interactive(_) => ().into_any(),
    }
}

/// Banner, filters, map and list, each fed by its own memo.
fn render_interactive(
    content: Memo<Option<ContentView>>,
    callbacks: ViewCallbacks,
    list_ref: NodeRef<Div>,
    config: StoredValue<SiteConfig>,
) -> AnyView {
    let interactive = Memo::new(move |_| {
        content.with(|view| {
            view.as_ref()
                .and_then(ContentView::interactive)
                .cloned()
                .unwrap_or_default()
        })
    });
    let filters = Memo::new(move |_| interactive.with(|view| view.filters.clone()));
    let map = Memo::new(move |_| interactive.with(|view| view.map.clone()));
    let list = Memo::new(move |_| interactive.with(|view| view.list.clone()));
    let extras = Memo::new(move |_| interactive.with(|view| view.extras.clone()));
    let container = Memo::new(move |_| match interactive.with(|view| view.view_state) {
        ViewState::Default => css::interactiveDefault,
        ViewState::List => css::interactiveList,
    });

    view! {
        {move || view! { <Banner site_language=extras.with(|e| e.site_language) /> }}
        <Filters props=filters on_change=callbacks.set_filters />
        <div class=move || container.get()>
            <MapView
                props=map
                set_lat_lng=callbacks.set_lat_lng
                set_hovered_point=callbacks.set_hovered_point
                set_us_state=callbacks.set_us_state
                reset_to_default_view=callbacks.reset_to_default_view
            />
            <ListView
                props=list
                list_ref=list_ref
                set_hovered_point=callbacks.set_hovered_point
                set_filters=callbacks.set_filters
            />
        </div>
        {move || render_home_extras(extras.get(), config)}
    }
    .into_any()
}

fn render_home_extras(extras: HomeExtras, config: StoredValue<SiteConfig>) -> impl IntoView {
    let submit_url = config.with_value(|c| c.submit_form_url.clone());
    view! {
        <div class=css::tagline>{extras.tagline}</div>
        <SubmitButton link=submit_url description=extras.submit_label />
    }
}
