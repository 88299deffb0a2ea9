//! Prop distribution between the store and the view components.
//!
//! Read side: [`ShellProps::from_state`] pulls every value a child needs
//! from exactly one selector. Child prop structs are cut from
//! [`ShellProps`] only, so no view component reads the store.
//!
//! Write side: [`Callbacks`] forwards each child callback argument,
//! unchanged, to exactly one [`Action`].

use serde::Serialize;

use crate::action::Action;
use crate::model::{
    BoundingBox, Category, FeatureCollection, FilterCounts, FoodResource, LatLng, Network,
    SiteLanguage, ViewState,
};
use crate::selectors;
use crate::state::StoreState;
use crate::store::Dispatch;

// ============================================================================
// Read side
// ============================================================================

/// Store values distributed by the layout, one field per selector.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellProps {
    pub filtered_networks: Vec<Network>,
    pub selected_categories: Vec<Category>,
    pub food_resource_geojson: FeatureCollection,
    pub view_state: ViewState,
    pub search_location: Option<LatLng>,
    pub visible_cards: Vec<Network>,
    pub all_networks: Vec<Network>,
    pub hovered_point_id: Option<String>,
    pub master_bbox: Option<BoundingBox>,
    pub all_food_resources: Vec<FoodResource>,
    pub filter_counts: FilterCounts,
    pub site_language: SiteLanguage,
}

impl ShellProps {
    pub fn from_state(state: &StoreState) -> Self {
        Self {
            filtered_networks: selectors::get_filtered_networks(state),
            selected_categories: selectors::get_selected_categories(state).to_vec(),
            food_resource_geojson: selectors::get_food_resources_geojson(state),
            view_state: selectors::get_view_state(state),
            search_location: selectors::get_search_location(state),
            visible_cards: selectors::get_visible_cards(state),
            all_networks: selectors::get_all_networks(state).to_vec(),
            hovered_point_id: selectors::get_hovered_point_id(state).map(str::to_string),
            master_bbox: selectors::get_bounding_box(state),
            all_food_resources: selectors::get_all_food_resources(state).to_vec(),
            filter_counts: selectors::get_filter_counts(state),
            site_language: selectors::get_site_language(state),
        }
    }

    pub fn nav_menu(&self, mode: MenuMode) -> NavMenuProps {
        NavMenuProps {
            mode,
            site_language: self.site_language,
        }
    }

    pub fn filters(&self) -> FiltersProps {
        FiltersProps {
            selected_categories: self.selected_categories.clone(),
            absolute: true,
            visible: self.view_state == ViewState::Default,
            site_language: self.site_language,
        }
    }

    pub fn map(&self) -> MapProps {
        MapProps {
            networks: self.filtered_networks.clone(),
            view_state: self.view_state,
            selected_categories: self.selected_categories.clone(),
            hovered_point_id: self.hovered_point_id.clone(),
            bbox: self.master_bbox,
            food_resource_geojson: self.food_resource_geojson.clone(),
        }
    }

    pub fn list_view(&self) -> ListViewProps {
        ListViewProps {
            filter_counts: self.filter_counts.clone(),
            visible_cards: self.visible_cards.clone(),
            selected_categories: self.selected_categories.clone(),
            site_language: self.site_language,
        }
    }

    pub fn networks_table(&self) -> NetworksTableProps {
        NetworksTableProps {
            networks: self.all_networks.clone(),
            site_language: self.site_language,
        }
    }

    pub fn language(&self) -> LanguageProps {
        LanguageProps {
            site_language: self.site_language,
        }
    }
}

// ============================================================================
// Child props
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuMode {
    Horizontal,
    Inline,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavMenuProps {
    pub mode: MenuMode,
    pub site_language: SiteLanguage,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FiltersProps {
    pub selected_categories: Vec<Category>,
    /// Float over the map instead of taking layout space.
    pub absolute: bool,
    /// Only shown in the map-centric layout.
    pub visible: bool,
    pub site_language: SiteLanguage,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapProps {
    pub networks: Vec<Network>,
    pub view_state: ViewState,
    pub selected_categories: Vec<Category>,
    pub hovered_point_id: Option<String>,
    pub bbox: Option<BoundingBox>,
    pub food_resource_geojson: FeatureCollection,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListViewProps {
    pub filter_counts: FilterCounts,
    pub visible_cards: Vec<Network>,
    pub selected_categories: Vec<Category>,
    pub site_language: SiteLanguage,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworksTableProps {
    pub networks: Vec<Network>,
    pub site_language: SiteLanguage,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LanguageProps {
    pub site_language: SiteLanguage,
}

// ============================================================================
// Write side
// ============================================================================

/// Child callbacks, each bound to one store action.
pub struct Callbacks<'a, D: Dispatch + ?Sized> {
    dispatch: &'a D,
}

impl<'a, D: Dispatch + ?Sized> Callbacks<'a, D> {
    pub fn new(dispatch: &'a D) -> Self {
        Self { dispatch }
    }

    pub fn request_networks(&self) {
        self.dispatch.dispatch(Action::RequestNetworks);
    }

    pub fn request_food_resources(&self) {
        self.dispatch.dispatch(Action::RequestFoodResources);
    }

    pub fn set_filters(&self, categories: Vec<Category>) {
        self.dispatch.dispatch(Action::SetCategoryFilters(categories));
    }

    pub fn set_lat_lng(&self, location: LatLng) {
        self.dispatch.dispatch(Action::SetLatLng(location));
    }

    pub fn set_hovered_point(&self, id: Option<String>) {
        self.dispatch.dispatch(Action::SetHoveredPoint(id));
    }

    pub fn set_site_language(&self, language: SiteLanguage) {
        self.dispatch.dispatch(Action::SetSiteLanguage(language));
    }

    pub fn set_us_state(&self, us_state: String) {
        self.dispatch.dispatch(Action::SetUsState(us_state));
    }

    pub fn reset_to_default_view(&self) {
        self.dispatch.dispatch(Action::ResetToDefaultView);
    }
}
