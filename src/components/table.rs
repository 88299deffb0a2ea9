//! Networks table route.

use aidmap_core::i18n::{Text, translate};
use aidmap_core::props::NetworksTableProps as CoreNetworksTableProps;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/table.module.css");

const COLUMNS: [Text; 5] = [
    Text::ColumnName,
    Text::ColumnCategory,
    Text::ColumnLocation,
    Text::ColumnLanguages,
    Text::ColumnWebsite,
];

/// Every network, one row each, sorted by state then name.
#[component]
pub fn NetworksTable(props: CoreNetworksTableProps) -> impl IntoView {
    let CoreNetworksTableProps {
        mut networks,
        site_language,
    } = props;
    networks.sort_by(|a, b| (&a.us_state, &a.name).cmp(&(&b.us_state, &b.name)));

    let headers = COLUMNS
        .into_iter()
        .map(|column| view! { <th>{translate(column, site_language)}</th> })
        .collect_view();

    let rows = networks
        .into_iter()
        .map(|network| {
            let location = [network.city.as_deref(), network.us_state.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(", ");
            view! {
                <tr>
                    <td class=css::name>{network.name}</td>
                    <td>{network.category.label()}</td>
                    <td>{location}</td>
                    <td>{network.languages.join(", ")}</td>
                    <td>
                        {network.website.map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer">
                                <Icon icon=ic::EXTERNAL_LINK />
                            </a>
                        })}
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class=css::wrapper>
            <table class=css::table>
                <thead>
                    <tr>{headers}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
