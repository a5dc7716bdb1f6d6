use super::{Category, Place};
use serde::Serialize;
use std::collections::BTreeMap;

/// one row of a [`RegistryListing`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlaceEntry {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<&Place> for PlaceEntry {
    fn from(place: &Place) -> Self {
        PlaceEntry {
            name: place.name.clone(),
            lat: place.lat(),
            lon: place.lon(),
        }
    }
}

/// full dump of the registry, grouped by category. only categories holding
/// at least one place appear.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RegistryListing {
    pub categories: BTreeMap<String, Vec<PlaceEntry>>,
    pub total: usize,
}

impl From<BTreeMap<Category, Vec<Place>>> for RegistryListing {
    fn from(value: BTreeMap<Category, Vec<Place>>) -> Self {
        let total = value.values().map(|places| places.len()).sum();
        let categories = value
            .into_iter()
            .filter(|(_, places)| !places.is_empty())
            .map(|(category, places)| {
                let entries = places.iter().map(PlaceEntry::from).collect();
                (category.as_str().to_string(), entries)
            })
            .collect();
        RegistryListing { categories, total }
    }
}
