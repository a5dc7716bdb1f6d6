use super::{RegistryConfig, RegistryError};
use crate::model::{DistanceResult, NearbyPlace, Place, RegistryListing};
use crate::store::{InMemoryPlaceStore, PlaceStore};
use crate::util::geo_utils;
use crate::validation;
use std::sync::Arc;

/// entry point for the registry use cases. every request is validated in
/// full (category, name, coordinate) before the store is touched, so a
/// rejected request never mutates state.
///
/// the service holds no per-request state and may be shared across threads;
/// concurrency guarantees come from the injected [`PlaceStore`].
pub struct RegistryService {
    store: Arc<dyn PlaceStore>,
    config: RegistryConfig,
}

impl RegistryService {
    pub fn new(
        store: Arc<dyn PlaceStore>,
        config: RegistryConfig,
    ) -> Result<RegistryService, RegistryError> {
        let config = config.validated()?;
        log::info!(
            "registry configured with categories [{}] and search radius {} km",
            config.categories.join(", "),
            config.search_radius_km
        );
        Ok(RegistryService { store, config })
    }

    /// a service backed by a fresh [`InMemoryPlaceStore`].
    pub fn in_memory(config: RegistryConfig) -> Result<RegistryService, RegistryError> {
        Self::new(Arc::new(InMemoryPlaceStore::new()), config)
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// validates and stores a place, replacing any place of the same name in
    /// the same category.
    ///
    /// # Arguments
    ///
    /// * `category` - raw category identifier, checked against the allow-list
    /// * `name` - place name, trimmed; must not be blank
    /// * `lat`, `lon` - coordinate in decimal degrees
    ///
    /// # Returns
    ///
    /// * the stored place
    pub fn add_place(
        &self,
        category: &str,
        name: &str,
        lat: f64,
        lon: f64,
    ) -> Result<Place, RegistryError> {
        let category = self.config.category(category)?;
        let name = validate_name(name)?;
        let coordinate = validation::validate(lat, lon)?;

        let place = Place::new(name.to_string(), category, coordinate);
        self.store.insert(place.clone())?;
        log::debug!(
            "stored '{}' in '{}' at ({}, {})",
            place.name,
            place.category,
            place.lat(),
            place.lon()
        );
        Ok(place)
    }

    /// finds every place of the category within the configured search
    /// radius of (lat, lon), nearest first. an empty result is not an error.
    pub fn find_nearby(
        &self,
        category: &str,
        lat: f64,
        lon: f64,
    ) -> Result<Vec<NearbyPlace>, RegistryError> {
        let category = self.config.category(category)?;
        let center = validation::validate(lat, lon)?;

        let places = self
            .store
            .query_radius(&category, &center, self.config.search_radius_km)?;
        let mut nearby: Vec<NearbyPlace> = places
            .into_iter()
            .map(|place| {
                let distance_km = geo_utils::haversine_km(&center, &place.coordinate);
                NearbyPlace { place, distance_km }
            })
            .collect();
        nearby.sort_by(|a, b| {
            a.distance_km
                .total_cmp(&b.distance_km)
                .then_with(|| a.place.name.cmp(&b.place.name))
        });
        log::debug!(
            "found {} place(s) of '{}' within {} km of ({}, {})",
            nearby.len(),
            category,
            self.config.search_radius_km,
            lat,
            lon
        );
        Ok(nearby)
    }

    /// great-circle distance from (lat, lon) to the named place.
    pub fn compute_distance(
        &self,
        category: &str,
        name: &str,
        lat: f64,
        lon: f64,
    ) -> Result<DistanceResult, RegistryError> {
        let category = self.config.category(category)?;
        let name = validate_name(name)?;
        let origin = validation::validate(lat, lon)?;

        let place = self
            .store
            .lookup(&category, name)?
            .ok_or_else(|| RegistryError::PlaceNotFound {
                category: category.to_string(),
                name: name.to_string(),
            })?;
        let distance_km = geo_utils::haversine_km(&origin, &place.coordinate);
        Ok(DistanceResult {
            name: place.name,
            category: place.category,
            coordinate: place.coordinate,
            distance_km,
        })
    }

    /// every stored place grouped by category.
    pub fn list_all(&self) -> Result<RegistryListing, RegistryError> {
        let all = self.store.list_all()?;
        Ok(RegistryListing::from(all))
    }

    /// reports whether the backing store can serve requests.
    pub fn ping(&self) -> Result<(), RegistryError> {
        self.store.ping().map_err(RegistryError::from)
    }
}

fn validate_name(name: &str) -> Result<&str, RegistryError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(RegistryError::EmptyName)
    } else {
        Ok(trimmed)
    }
}
