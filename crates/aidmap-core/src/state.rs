//! Store state: fetched record sets plus the user's current selections.

use crate::model::{Category, FoodResource, LatLng, Network, Resource, SiteLanguage, ViewState};

/// Everything the user has picked or hovered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selections {
    /// Empty means "no category filter".
    pub categories: Vec<Category>,
    pub view_state: ViewState,
    pub search_location: Option<LatLng>,
    pub us_state: Option<String>,
    pub hovered_point_id: Option<String>,
    pub site_language: SiteLanguage,
}

/// Whole store state. Read it through [`crate::selectors`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreState {
    pub networks: Resource<Network>,
    pub food_resources: Resource<FoodResource>,
    pub selections: Selections,
}

impl StoreState {
    /// State with both record sets already loaded.
    pub fn with_records(networks: Vec<Network>, food_resources: Vec<FoodResource>) -> Self {
        let mut state = Self::default();
        state.networks.items = networks;
        state.networks.status = crate::model::LoadStatus::Loaded;
        state.food_resources.items = food_resources;
        state.food_resources.status = crate::model::LoadStatus::Loaded;
        state
    }
}
