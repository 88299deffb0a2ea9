//! Navigation menu, laid out horizontally on desktop or inline in the
//! mobile sidebar.

use aidmap_core::Route;
use aidmap_core::i18n::{Text, translate};
use aidmap_core::model::SiteLanguage;
use aidmap_core::props::{MenuMode, NavMenuProps as CoreNavMenuProps};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::router::RouteContext;

stylance::import_crate_style!(css, "src/components/nav_menu.module.css");

/// Menu entries in display order.
const MENU_ITEMS: [(Route, Text); 6] = [
    (Route::Home, Text::MenuMap),
    (Route::TableView, Text::MenuTable),
    (Route::About, Text::MenuAbout),
    (Route::Resources, Text::MenuResources),
    (Route::Press, Text::MenuPress),
    (Route::SiteInformation, Text::MenuSiteInformation),
];

#[component]
pub fn NavMenu(
    props: CoreNavMenuProps,
    on_nav: Callback<Route>,
    on_language: Callback<SiteLanguage>,
) -> impl IntoView {
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");
    let language = props.site_language;
    let menu_class = match props.mode {
        MenuMode::Horizontal => css::horizontal,
        MenuMode::Inline => css::inline,
    };

    let items = MENU_ITEMS
        .into_iter()
        .map(|(route, label)| {
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                on_nav.run(route);
            };
            view! {
                <li class=move || item_class(route_ctx.get() == route)>
                    <a href=route.path() on:click=on_click>
                        {translate(label, language)}
                    </a>
                </li>
            }
        })
        .collect_view();

    let languages = SiteLanguage::ALL
        .into_iter()
        .map(|option| {
            let class = if option == language {
                format!("{} {}", css::languageButton, css::languageActive)
            } else {
                css::languageButton.to_string()
            };
            view! {
                <button
                    class=class
                    lang=option.code()
                    on:click=move |_| on_language.run(option)
                >
                    {option.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=menu_class>
            <ul class=css::items>{items}</ul>
            <div class=css::languages>
                <span class=css::languageIcon>
                    <Icon icon=ic::LANGUAGE />
                </span>
                {languages}
            </div>
        </nav>
    }
}

fn item_class(active: bool) -> String {
    if active {
        format!("{} {}", css::item, css::itemActive)
    } else {
        css::item.to_string()
    }
}
