use super::PlaceStoreError;
use crate::model::{Category, Coordinate, Place};
use std::collections::BTreeMap;

/// a categorized geospatial index of places. implementations must make a
/// single insert atomic with respect to concurrent readers and must let a
/// caller observe its own completed writes.
pub trait PlaceStore: Send + Sync {
    /// upserts a place keyed by (category, name).
    fn insert(&self, place: Place) -> Result<(), PlaceStoreError>;

    /// every place of the category within `radius_km` (inclusive) of
    /// `center`, in no particular order.
    fn query_radius(
        &self,
        category: &Category,
        center: &Coordinate,
        radius_km: f64,
    ) -> Result<Vec<Place>, PlaceStoreError>;

    /// exact-name lookup within a category.
    fn lookup(&self, category: &Category, name: &str) -> Result<Option<Place>, PlaceStoreError>;

    /// all places grouped by category, each group ordered by name.
    fn list_all(&self) -> Result<BTreeMap<Category, Vec<Place>>, PlaceStoreError>;

    /// confirms the store can serve requests.
    fn ping(&self) -> Result<(), PlaceStoreError>;
}
