//! Domain records and selection values held by the store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Records
// ============================================================================

/// Kind of organization a [`Network`] represents. Used for category filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MutualAid,
    FoodBank,
    CommunityFridge,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::MutualAid,
        Category::FoodBank,
        Category::CommunityFridge,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::MutualAid => "Mutual aid network",
            Self::FoodBank => "Food bank",
            Self::CommunityFridge => "Community fridge",
            Self::Other => "Other",
        }
    }
}

/// A mutual-aid network shown on the map, in the list and in the table view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub city: Option<String>,
    /// Two-letter US state code, if known.
    #[serde(default)]
    pub us_state: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// A food resource (pantry, fridge, meal site) rendered as a map layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodResource {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub resource_type: String,
    pub lat: f64,
    pub lng: f64,
}

// ============================================================================
// Geometry
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Axis-aligned box around a set of points, in `[west, south, east, north]` order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Smallest box containing every `(lng, lat)` point, or `None` for no points.
    pub fn around(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        points.into_iter().fold(None, |acc, (lng, lat)| {
            Some(match acc {
                None => Self {
                    min_lng: lng,
                    min_lat: lat,
                    max_lng: lng,
                    max_lat: lat,
                },
                Some(b) => Self {
                    min_lng: b.min_lng.min(lng),
                    min_lat: b.min_lat.min(lat),
                    max_lng: b.max_lng.max(lng),
                    max_lat: b.max_lat.max(lat),
                },
            })
        })
    }
}

/// GeoJSON `FeatureCollection` of point features.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            features,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: PointGeometry,
    pub properties: FeatureProperties,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[lng, lat]`
    pub coordinates: [f64; 2],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub id: String,
    pub name: String,
    pub resource_type: String,
}

impl From<&FoodResource> for Feature {
    fn from(resource: &FoodResource) -> Self {
        Self {
            kind: "Feature".to_string(),
            geometry: PointGeometry {
                kind: "Point".to_string(),
                coordinates: [resource.lng, resource.lat],
            },
            properties: FeatureProperties {
                id: resource.id.clone(),
                name: resource.name.clone(),
                resource_type: resource.resource_type.clone(),
            },
        }
    }
}

/// Number of networks per category, used as badges on the filter controls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterCounts(pub BTreeMap<Category, usize>);

impl FilterCounts {
    pub fn get(&self, category: Category) -> usize {
        self.0.get(&category).copied().unwrap_or(0)
    }
}

// ============================================================================
// Selection values
// ============================================================================

/// Whether the map/list pair is laid out map-first or list-first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    #[default]
    Default,
    List,
}

impl ViewState {
    /// CSS-friendly name (`default` / `list`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::List => "list",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteLanguage {
    #[default]
    En,
    Es,
}

impl SiteLanguage {
    pub const ALL: [SiteLanguage; 2] = [SiteLanguage::En, SiteLanguage::Es];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Name of the language in that language, for the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
        }
    }
}

// ============================================================================
// Fetched resources
// ============================================================================

/// Progress of a fetch the store has requested.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Record set plus the status of the fetch that produced it.
///
/// A failed refetch keeps the previously loaded items.
#[derive(Clone, Debug, PartialEq)]
pub struct Resource<T> {
    pub items: Vec<T>,
    pub status: LoadStatus,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: LoadStatus::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_around_points() {
        let bbox = BoundingBox::around([(-73.9, 40.7), (-122.4, 37.7), (-87.6, 41.8)]).unwrap();
        assert_eq!(bbox.min_lng, -122.4);
        assert_eq!(bbox.max_lng, -73.9);
        assert_eq!(bbox.min_lat, 37.7);
        assert_eq!(bbox.max_lat, 41.8);
    }

    #[test]
    fn test_bounding_box_empty() {
        assert_eq!(BoundingBox::around(Vec::new()), None);
    }

    #[test]
    fn test_network_deserialize_defaults() {
        let json = r#"{"id":"n1","name":"Bed-Stuy Strong","category":"mutual_aid","lat":40.68,"lng":-73.94}"#;
        let network: Network = serde_json::from_str(json).unwrap();
        assert_eq!(network.category, Category::MutualAid);
        assert_eq!(network.us_state, None);
        assert!(network.languages.is_empty());
    }

    #[test]
    fn test_feature_from_food_resource() {
        let resource = FoodResource {
            id: "f1".to_string(),
            name: "Corner Fridge".to_string(),
            address: None,
            resource_type: "fridge".to_string(),
            lat: 40.0,
            lng: -75.0,
        };
        let feature = Feature::from(&resource);
        assert_eq!(feature.geometry.coordinates, [-75.0, 40.0]);
        let json = serde_json::to_value(FeatureCollection::new(vec![feature])).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"][0]["geometry"]["type"], "Point");
    }

    #[test]
    fn test_view_state_names() {
        assert_eq!(ViewState::Default.as_str(), "default");
        assert_eq!(ViewState::List.as_str(), "list");
    }
}
