//! Network cards shown beside the map.

use aidmap_core::i18n::{Text, translate};
use aidmap_core::model::{Category, Network};
use aidmap_core::props::ListViewProps as CoreListViewProps;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::filters::toggle_category;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/list_view.module.css");

/// Category chips with counts, then one card per visible network.
///
/// Cards are keyed by network id, so a change in the visible set only
/// mounts or drops the cards that entered or left it. `list_ref` is the
/// scroll target the layout brings into view when the visible cards change.
#[component]
pub fn ListView(
    #[prop(into)] props: Signal<CoreListViewProps>,
    list_ref: NodeRef<Div>,
    set_hovered_point: Callback<Option<String>>,
    set_filters: Callback<Vec<Category>>,
) -> impl IntoView {
    let selected = Memo::new(move |_| props.with(|p| p.selected_categories.clone()));
    let counts = Memo::new(move |_| props.with(|p| p.filter_counts.clone()));
    let cards = Memo::new(move |_| props.with(|p| p.visible_cards.clone()));
    let site_language = Memo::new(move |_| props.with(|p| p.site_language));

    let chips = Category::ALL
        .into_iter()
        .map(|category| {
            let class = move || {
                if selected.with(|s| s.contains(&category)) {
                    format!("{} {}", css::chip, css::chipActive)
                } else {
                    css::chip.to_string()
                }
            };
            view! {
                <button
                    class=class
                    on:click=move |_| {
                        set_filters.run(selected.with_untracked(|s| toggle_category(s, category)))
                    }
                >
                    {category.label()}
                    <span class=css::count>{move || counts.with(|c| c.get(category))}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class=css::list node_ref=list_ref>
            <div class=css::chips>{chips}</div>
            <Show when=move || cards.with(Vec::is_empty)>
                <p class=css::empty>{move || translate(Text::ListEmpty, site_language.get())}</p>
            </Show>
            <For
                each=move || cards.get()
                key=|network| network.id.clone()
                children=move |network| render_card(network, set_hovered_point)
            />
        </div>
    }
}

fn render_card(network: Network, set_hovered_point: Callback<Option<String>>) -> impl IntoView {
    let id = network.id.clone();
    let place = match (&network.city, &network.us_state) {
        (Some(city), Some(us_state)) => format!("{city}, {us_state}"),
        (Some(city), None) => city.clone(),
        (None, Some(us_state)) => us_state.clone(),
        (None, None) => String::new(),
    };

    view! {
        <article
            class=css::card
            on:mouseenter=move |_| set_hovered_point.run(Some(id.clone()))
            on:mouseleave=move |_| set_hovered_point.run(None)
        >
            <h3 class=css::name>{network.name}</h3>
            <p class=css::meta>
                <span>{network.category.label()}</span>
                {(!place.is_empty()).then(|| view! { <span>{place}</span> })}
            </p>
            {(!network.languages.is_empty())
                .then(|| view! { <p class=css::meta>{network.languages.join(", ")}</p> })}
            {network.website.map(|url| view! {
                <a class=css::website href=url target="_blank" rel="noopener noreferrer">
                    <Icon icon=ic::EXTERNAL_LINK />
                </a>
            })}
        </article>
    }
}
