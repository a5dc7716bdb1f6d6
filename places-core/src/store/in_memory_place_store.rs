use super::{CategoryIndex, PlaceStore, PlaceStoreError};
use crate::model::{Category, Coordinate, Place};
use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// an in-process [`PlaceStore`] holding one [`CategoryIndex`] per category
/// behind a read/write lock. writers are serialized, so concurrent inserts
/// under the same name resolve as last writer wins, and readers never see a
/// half-applied insert.
#[derive(Default)]
pub struct InMemoryPlaceStore {
    categories: RwLock<HashMap<Category, CategoryIndex>>,
}

impl InMemoryPlaceStore {
    pub fn new() -> InMemoryPlaceStore {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<Category, CategoryIndex>>, PlaceStoreError> {
        self.categories.read().map_err(|e| {
            PlaceStoreError::Unavailable(format!("failure acquiring read lock: {e}"))
        })
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<Category, CategoryIndex>>, PlaceStoreError> {
        self.categories.write().map_err(|e| {
            PlaceStoreError::Unavailable(format!("failure acquiring write lock: {e}"))
        })
    }
}

impl PlaceStore for InMemoryPlaceStore {
    fn insert(&self, place: Place) -> Result<(), PlaceStoreError> {
        let mut categories = self.write()?;
        let index = categories.entry(place.category.clone()).or_default();
        if index.upsert(&place.name, place.coordinate).is_some() {
            log::debug!("replaced '{}' in category '{}'", place.name, place.category);
        }
        Ok(())
    }

    fn query_radius(
        &self,
        category: &Category,
        center: &Coordinate,
        radius_km: f64,
    ) -> Result<Vec<Place>, PlaceStoreError> {
        let categories = self.read()?;
        let result = match categories.get(category) {
            None => vec![],
            Some(index) => index
                .within(center, radius_km)
                .into_iter()
                .map(|(name, coordinate)| Place::new(name, category.clone(), coordinate))
                .collect(),
        };
        Ok(result)
    }

    fn lookup(&self, category: &Category, name: &str) -> Result<Option<Place>, PlaceStoreError> {
        let categories = self.read()?;
        let place = categories
            .get(category)
            .and_then(|index| index.get(name))
            .map(|coordinate| Place::new(name.to_string(), category.clone(), coordinate));
        Ok(place)
    }

    fn list_all(&self) -> Result<BTreeMap<Category, Vec<Place>>, PlaceStoreError> {
        let categories = self.read()?;
        let result = categories
            .iter()
            .filter(|(_, index)| !index.is_empty())
            .map(|(category, index)| {
                let places = index
                    .entries()
                    .into_iter()
                    .map(|(name, coordinate)| Place::new(name, category.clone(), coordinate))
                    .collect();
                (category.clone(), places)
            })
            .collect();
        Ok(result)
    }

    fn ping(&self) -> Result<(), PlaceStoreError> {
        self.read().map(|_| ())
    }
}
