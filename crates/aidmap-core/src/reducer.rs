//! Pure state transitions for [`Action`]s.

use crate::action::{Action, Effect};
use crate::model::{LoadStatus, ViewState};
use crate::state::StoreState;

/// Apply `action` to `state`, returning the side effects it requests.
pub fn reduce(state: &mut StoreState, action: Action) -> Vec<Effect> {
    match action {
        Action::RequestNetworks => {
            state.networks.status = LoadStatus::Loading;
            vec![Effect::FetchNetworks]
        }
        Action::RequestFoodResources => {
            state.food_resources.status = LoadStatus::Loading;
            vec![Effect::FetchFoodResources]
        }
        Action::ReceiveNetworks(items) => {
            state.networks.items = items;
            state.networks.status = LoadStatus::Loaded;
            Vec::new()
        }
        Action::NetworksFailed(message) => {
            state.networks.status = LoadStatus::Failed(message);
            Vec::new()
        }
        Action::ReceiveFoodResources(items) => {
            state.food_resources.items = items;
            state.food_resources.status = LoadStatus::Loaded;
            Vec::new()
        }
        Action::FoodResourcesFailed(message) => {
            state.food_resources.status = LoadStatus::Failed(message);
            Vec::new()
        }
        Action::SetCategoryFilters(categories) => {
            state.selections.categories = categories;
            Vec::new()
        }
        Action::SetLatLng(location) => {
            state.selections.search_location = Some(location);
            state.selections.view_state = ViewState::List;
            Vec::new()
        }
        Action::SetHoveredPoint(id) => {
            state.selections.hovered_point_id = id;
            Vec::new()
        }
        Action::SetSiteLanguage(language) => {
            state.selections.site_language = language;
            Vec::new()
        }
        Action::SetUsState(us_state) => {
            state.selections.us_state = Some(us_state);
            state.selections.view_state = ViewState::List;
            Vec::new()
        }
        Action::ResetToDefaultView => {
            let selections = &mut state.selections;
            selections.view_state = ViewState::Default;
            selections.search_location = None;
            selections.us_state = None;
            selections.hovered_point_id = None;
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, LatLng, SiteLanguage};

    #[test]
    fn test_requests_emit_fetch_effects() {
        let mut state = StoreState::default();
        assert_eq!(
            reduce(&mut state, Action::RequestNetworks),
            vec![Effect::FetchNetworks]
        );
        assert_eq!(state.networks.status, LoadStatus::Loading);
        assert_eq!(
            reduce(&mut state, Action::RequestFoodResources),
            vec![Effect::FetchFoodResources]
        );
        assert_eq!(state.food_resources.status, LoadStatus::Loading);
    }

    #[test]
    fn test_selection_changes_emit_no_effects() {
        let mut state = StoreState::default();
        assert!(reduce(&mut state, Action::SetHoveredPoint(Some("n1".to_string()))).is_empty());
        assert!(reduce(&mut state, Action::ReceiveNetworks(Vec::new())).is_empty());
        assert!(reduce(&mut state, Action::SetUsState("NY".to_string())).is_empty());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_items() {
        let mut state = StoreState::default();
        reduce(&mut state, Action::ReceiveFoodResources(Vec::new()));
        reduce(&mut state, Action::NetworksFailed("HTTP error: 500".to_string()));
        assert!(state.networks.items.is_empty());
        assert_eq!(
            state.networks.status,
            LoadStatus::Failed("HTTP error: 500".to_string())
        );
        assert_eq!(state.food_resources.status, LoadStatus::Loaded);
    }

    #[test]
    fn test_location_focus_switches_to_list() {
        let mut state = StoreState::default();
        reduce(&mut state, Action::SetLatLng(LatLng { lat: 1.0, lng: 2.0 }));
        assert_eq!(state.selections.view_state, ViewState::List);

        let mut state = StoreState::default();
        reduce(&mut state, Action::SetUsState("NY".to_string()));
        assert_eq!(state.selections.view_state, ViewState::List);
        assert_eq!(state.selections.us_state.as_deref(), Some("NY"));
    }

    #[test]
    fn test_reset_keeps_filters_and_language() {
        let mut state = StoreState::default();
        reduce(&mut state, Action::SetCategoryFilters(vec![Category::FoodBank]));
        reduce(&mut state, Action::SetSiteLanguage(SiteLanguage::Es));
        reduce(&mut state, Action::SetUsState("CA".to_string()));
        reduce(&mut state, Action::SetHoveredPoint(Some("n1".to_string())));

        let effects = reduce(&mut state, Action::ResetToDefaultView);

        assert!(effects.is_empty());
        assert_eq!(state.selections.view_state, ViewState::Default);
        assert_eq!(state.selections.us_state, None);
        assert_eq!(state.selections.hovered_point_id, None);
        assert_eq!(state.selections.categories, vec![Category::FoodBank]);
        assert_eq!(state.selections.site_language, SiteLanguage::Es);
    }
}
