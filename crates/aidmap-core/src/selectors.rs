//! Read accessors over [`StoreState`].
//!
//! Each selector is a pure function of the whole state and is cheap enough
//! to call on every render.

use crate::model::{
    BoundingBox, Category, Feature, FeatureCollection, FilterCounts, FoodResource, LatLng, Network,
    SiteLanguage, ViewState,
};
use crate::state::StoreState;

pub fn get_all_networks(state: &StoreState) -> &[Network] {
    &state.networks.items
}

pub fn get_all_food_resources(state: &StoreState) -> &[FoodResource] {
    &state.food_resources.items
}

pub fn get_selected_categories(state: &StoreState) -> &[Category] {
    &state.selections.categories
}

pub fn get_view_state(state: &StoreState) -> ViewState {
    state.selections.view_state
}

pub fn get_search_location(state: &StoreState) -> Option<LatLng> {
    state.selections.search_location
}

pub fn get_hovered_point_id(state: &StoreState) -> Option<&str> {
    state.selections.hovered_point_id.as_deref()
}

pub fn get_site_language(state: &StoreState) -> SiteLanguage {
    state.selections.site_language
}

/// Networks in the selected categories; all networks when none are selected.
pub fn get_filtered_networks(state: &StoreState) -> Vec<Network> {
    let categories = get_selected_categories(state);
    get_all_networks(state)
        .iter()
        .filter(|n| categories.is_empty() || categories.contains(&n.category))
        .cloned()
        .collect()
}

/// Filtered networks narrowed to the focused US state, if any.
///
/// These are the cards the list view shows.
pub fn get_visible_cards(state: &StoreState) -> Vec<Network> {
    let mut cards = get_filtered_networks(state);
    if let Some(us_state) = state.selections.us_state.as_deref() {
        cards.retain(|n| in_us_state(n, us_state));
    }
    cards
}

/// Per-category counts over all networks in the focused US state.
///
/// Category filters are not applied, so every filter option shows how many
/// networks it would add.
pub fn get_filter_counts(state: &StoreState) -> FilterCounts {
    let us_state = state.selections.us_state.as_deref();
    let mut counts = FilterCounts::default();
    for category in Category::ALL {
        counts.0.insert(category, 0);
    }
    for network in get_all_networks(state) {
        if us_state.is_none_or(|s| in_us_state(network, s)) {
            *counts.0.entry(network.category).or_insert(0) += 1;
        }
    }
    counts
}

/// Box around the filtered networks, or `None` when nothing passes the filters.
pub fn get_bounding_box(state: &StoreState) -> Option<BoundingBox> {
    BoundingBox::around(get_filtered_networks(state).iter().map(|n| (n.lng, n.lat)))
}

pub fn get_food_resources_geojson(state: &StoreState) -> FeatureCollection {
    FeatureCollection::new(
        get_all_food_resources(state)
            .iter()
            .map(Feature::from)
            .collect(),
    )
}

fn in_us_state(network: &Network, us_state: &str) -> bool {
    network
        .us_state
        .as_deref()
        .is_some_and(|s| s.eq_ignore_ascii_case(us_state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category::{CommunityFridge, FoodBank, MutualAid};

    fn network(id: &str, category: Category, us_state: &str, lng: f64, lat: f64) -> Network {
        Network {
            id: id.to_string(),
            name: format!("Network {id}"),
            category,
            city: None,
            us_state: Some(us_state.to_string()),
            lat,
            lng,
            website: None,
            languages: Vec::new(),
        }
    }

    fn state() -> StoreState {
        StoreState::with_records(
            vec![
                network("a", MutualAid, "NY", -73.9, 40.7),
                network("b", FoodBank, "NY", -74.0, 40.6),
                network("c", MutualAid, "CA", -122.4, 37.7),
            ],
            Vec::new(),
        )
    }

    fn ids(networks: &[Network]) -> Vec<&str> {
        networks.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_no_category_filter_passes_everything() {
        assert_eq!(ids(&get_filtered_networks(&state())), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_category_filter() {
        let mut state = state();
        state.selections.categories = vec![FoodBank];
        assert_eq!(ids(&get_filtered_networks(&state)), vec!["b"]);
        assert_eq!(ids(get_all_networks(&state)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_visible_cards_follow_us_state() {
        let mut state = state();
        state.selections.us_state = Some("ny".to_string());
        assert_eq!(ids(&get_visible_cards(&state)), vec!["a", "b"]);

        state.selections.categories = vec![MutualAid];
        assert_eq!(ids(&get_visible_cards(&state)), vec!["a"]);
    }

    #[test]
    fn test_filter_counts_ignore_category_selection() {
        let mut state = state();
        state.selections.categories = vec![FoodBank];
        let counts = get_filter_counts(&state);
        assert_eq!(counts.get(MutualAid), 2);
        assert_eq!(counts.get(FoodBank), 1);
        assert_eq!(counts.get(CommunityFridge), 0);

        state.selections.us_state = Some("CA".to_string());
        assert_eq!(get_filter_counts(&state).get(MutualAid), 1);
    }

    #[test]
    fn test_bounding_box_tracks_filters() {
        let mut state = state();
        state.selections.categories = vec![FoodBank];
        let bbox = get_bounding_box(&state).unwrap();
        assert_eq!((bbox.min_lng, bbox.min_lat), (-74.0, 40.6));
        assert_eq!((bbox.max_lng, bbox.max_lat), (-74.0, 40.6));

        state.selections.categories = vec![CommunityFridge];
        assert_eq!(get_bounding_box(&state), None);
    }

    #[test]
    fn test_geojson_has_one_feature_per_resource() {
        let state = StoreState::with_records(
            Vec::new(),
            vec![FoodResource {
                id: "f1".to_string(),
                name: "Pantry".to_string(),
                address: Some("1 Main St".to_string()),
                resource_type: "pantry".to_string(),
                lat: 40.0,
                lng: -75.0,
            }],
        );
        let geojson = get_food_resources_geojson(&state);
        assert_eq!(geojson.kind, "FeatureCollection");
        assert_eq!(geojson.features.len(), 1);
        assert_eq!(geojson.features[0].properties.id, "f1");
    }
}
