//! Store write operations and the side effects they request.

use crate::model::{Category, FoodResource, LatLng, Network, SiteLanguage};

/// A request to change store state. Dispatched through [`crate::store::Dispatch`].
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Start fetching network records.
    RequestNetworks,
    /// Start fetching food-resource records.
    RequestFoodResources,
    ReceiveNetworks(Vec<Network>),
    NetworksFailed(String),
    ReceiveFoodResources(Vec<FoodResource>),
    FoodResourcesFailed(String),
    SetCategoryFilters(Vec<Category>),
    /// Focus the list on a searched location.
    SetLatLng(LatLng),
    SetHoveredPoint(Option<String>),
    SetSiteLanguage(SiteLanguage),
    /// Focus the list on a US state picked on the map.
    SetUsState(String),
    /// Back to the map-centric layout with no location focus.
    ResetToDefaultView,
}

impl Action {
    /// Short name for logging; payloads can be large.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RequestNetworks => "request_networks",
            Self::RequestFoodResources => "request_food_resources",
            Self::ReceiveNetworks(_) => "receive_networks",
            Self::NetworksFailed(_) => "networks_failed",
            Self::ReceiveFoodResources(_) => "receive_food_resources",
            Self::FoodResourcesFailed(_) => "food_resources_failed",
            Self::SetCategoryFilters(_) => "set_category_filters",
            Self::SetLatLng(_) => "set_lat_lng",
            Self::SetHoveredPoint(_) => "set_hovered_point",
            Self::SetSiteLanguage(_) => "set_site_language",
            Self::SetUsState(_) => "set_us_state",
            Self::ResetToDefaultView => "reset_to_default_view",
        }
    }
}

/// Side effect the reducer asks the host runtime to perform.
///
/// The host reports the outcome by dispatching the matching receive or
/// failure action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    FetchNetworks,
    FetchFoodResources,
}
