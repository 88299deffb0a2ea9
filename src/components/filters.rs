//! Category filter controls.

use aidmap_core::i18n::{Text, translate};
use aidmap_core::model::Category;
use aidmap_core::props::FiltersProps as CoreFiltersProps;
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/filters.module.css");

/// Checkbox list of categories. Renders nothing when not visible.
#[component]
pub fn Filters(
    #[prop(into)] props: Signal<CoreFiltersProps>,
    on_change: Callback<Vec<Category>>,
) -> impl IntoView {
    let visible = Memo::new(move |_| props.with(|p| p.visible));
    let selected = Memo::new(move |_| props.with(|p| p.selected_categories.clone()));
    let class = move || {
        if props.with(|p| p.absolute) {
            format!("{} {}", css::filters, css::absolute)
        } else {
            css::filters.to_string()
        }
    };
    let title = move || props.with(|p| translate(Text::FiltersTitle, p.site_language));

    view! {
        <Show when=move || visible.get()>
            <fieldset class=class>
                <legend class=css::title>{title}</legend>
                {render_options(selected, on_change)}
            </fieldset>
        </Show>
    }
}

fn render_options(selected: Memo<Vec<Category>>, on_change: Callback<Vec<Category>>) -> impl IntoView {
    Category::ALL
        .into_iter()
        .map(|category| {
            view! {
                <label class=css::option>
                    <input
                        type="checkbox"
                        prop:checked=move || selected.with(|s| s.contains(&category))
                        on:change=move |_| {
                            on_change.run(selected.with_untracked(|s| toggle_category(s, category)))
                        }
                    />
                    <span>{category.label()}</span>
                </label>
            }
        })
        .collect_view()
}

/// `selected` with `category` added or removed, in display order.
pub fn toggle_category(selected: &[Category], category: Category) -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|c| (*c == category) != selected.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_missing_category() {
        assert_eq!(
            toggle_category(&[Category::FoodBank], Category::MutualAid),
            vec![Category::MutualAid, Category::FoodBank]
        );
    }

    #[test]
    fn test_toggle_removes_selected_category() {
        assert_eq!(
            toggle_category(&[Category::MutualAid, Category::Other], Category::MutualAid),
            vec![Category::Other]
        );
    }
}
