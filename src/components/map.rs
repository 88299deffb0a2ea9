//! Network map.
//!
//! Markers are positioned by a linear projection of the filtered networks'
//! bounding box onto the container. Food resources are drawn as a second
//! layer from their GeoJSON.

use aidmap_core::model::{BoundingBox, LatLng, Network, ViewState};
use aidmap_core::props::MapProps;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/map.module.css");

/// Margin kept around the bounding box, in percent of the container.
const PADDING_PCT: f64 = 5.0;

#[component]
pub fn MapView(
    #[prop(into)] props: Signal<MapProps>,
    set_lat_lng: Callback<LatLng>,
    set_hovered_point: Callback<Option<String>>,
    set_us_state: Callback<String>,
    reset_to_default_view: Callback<()>,
) -> impl IntoView {
    let bbox = Memo::new(move |_| props.with(|p| p.bbox));
    let view_state = Memo::new(move |_| props.with(|p| p.view_state));
    let hovered = Memo::new(move |_| props.with(|p| p.hovered_point_id.clone()));
    let networks = Memo::new(move |_| props.with(|p| p.networks.clone()));
    let resources = Memo::new(move |_| props.with(|p| p.food_resource_geojson.features.clone()));
    let legend = Memo::new(move |_| props.with(|p| p.selected_categories.clone()));

    let position = move |lng: f64, lat: f64| {
        bbox.get()
            .map(|bbox| {
                let (x, y) = project(&bbox, lng, lat);
                format!("left: {x:.2}%; top: {y:.2}%")
            })
            .unwrap_or_default()
    };

    view! {
        <div class=css::map data-view=move || view_state.get().as_str()>
            <Show when=move || bbox.get().is_some()>
                <For
                    each=move || resources.get()
                    key=|feature| feature.properties.id.clone()
                    children=move |feature| {
                        let [lng, lat] = feature.geometry.coordinates;
                        let title = format!(
                            "{} ({})",
                            feature.properties.name,
                            feature.properties.resource_type,
                        );
                        view! {
                            <span class=css::resource style=move || position(lng, lat) title=title></span>
                        }
                    }
                />
                <For
                    each=move || networks.get()
                    key=|network| network.id.clone()
                    children=move |network| {
                        render_marker(
                            network,
                            hovered,
                            position,
                            set_lat_lng,
                            set_hovered_point,
                            set_us_state,
                        )
                    }
                />
                <ul class=css::legend>
                    {move || {
                        legend
                            .get()
                            .into_iter()
                            .map(|category| view! { <li>{category.label()}</li> })
                            .collect_view()
                    }}
                </ul>
                <Show when=move || view_state.get() == ViewState::List>
                    <button class=css::reset on:click=move |_| reset_to_default_view.run(())>
                        "Reset map"
                    </button>
                </Show>
            </Show>
        </div>
    }
}

fn render_marker(
    network: Network,
    hovered: Memo<Option<String>>,
    position: impl Fn(f64, f64) -> String + Copy + Send + Sync + 'static,
    set_lat_lng: Callback<LatLng>,
    set_hovered_point: Callback<Option<String>>,
    set_us_state: Callback<String>,
) -> impl IntoView {
    let Network {
        id,
        name,
        us_state,
        lat,
        lng,
        ..
    } = network;
    let class = {
        let id = id.clone();
        move || {
            if hovered.with(|h| h.as_deref() == Some(id.as_str())) {
                format!("{} {}", css::marker, css::markerHovered)
            } else {
                css::marker.to_string()
            }
        }
    };
    let location = LatLng { lat, lng };

    // Clicking narrows to the network's state when known, else searches
    // around the marker.
    let on_click = move |_: leptos::ev::MouseEvent| match us_state.clone() {
        Some(us_state) => set_us_state.run(us_state),
        None => set_lat_lng.run(location),
    };

    view! {
        <button
            class=class
            style=move || position(lng, lat)
            title=name
            on:mouseenter=move |_| set_hovered_point.run(Some(id.clone()))
            on:mouseleave=move |_| set_hovered_point.run(None)
            on:click=on_click
        >
            <Icon icon=ic::LOCATION />
        </button>
    }
}

/// Position of `(lng, lat)` inside `bbox` as `(left, top)` percentages.
///
/// Points outside the box are clamped to the padded edge. A box with no
/// extent on an axis centers on that axis.
pub fn project(bbox: &BoundingBox, lng: f64, lat: f64) -> (f64, f64) {
    let span = 100.0 - 2.0 * PADDING_PCT;
    let axis = |value: f64, min: f64, max: f64| {
        if max - min <= f64::EPSILON {
            return 0.5;
        }
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    };
    let x = PADDING_PCT + span * axis(lng, bbox.min_lng, bbox.max_lng);
    // Screen y grows downward, latitude upward.
    let y = PADDING_PCT + span * (1.0 - axis(lat, bbox.min_lat, bbox.max_lat));
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn continental() -> BoundingBox {
        BoundingBox {
            min_lng: -120.0,
            min_lat: 30.0,
            max_lng: -70.0,
            max_lat: 50.0,
        }
    }

    #[test]
    fn test_project_corners() {
        assert_eq!(project(&continental(), -120.0, 50.0), (5.0, 5.0));
        assert_eq!(project(&continental(), -70.0, 30.0), (95.0, 95.0));
    }

    #[test]
    fn test_project_clamps_outside_points() {
        assert_eq!(project(&continental(), -160.0, 20.0), (5.0, 95.0));
    }

    #[test]
    fn test_project_single_point_centers() {
        let bbox = BoundingBox {
            min_lng: -73.9,
            min_lat: 40.7,
            max_lng: -73.9,
            max_lat: 40.7,
        };
        assert_eq!(project(&bbox, -73.9, 40.7), (50.0, 50.0));
    }
}
