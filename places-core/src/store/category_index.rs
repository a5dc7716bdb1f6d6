use super::place_spatial_row::EnvelopeSelection;
use super::PlaceSpatialRow;
use crate::model::Coordinate;
use crate::util::geo_utils;
use itertools::Itertools;
use rstar::RTree;
use std::collections::HashMap;

/// spatial index over the places of a single category. the R-tree answers
/// envelope queries while the name map keeps the authoritative coordinate
/// for each name.
pub struct CategoryIndex {
    tree: RTree<PlaceSpatialRow>,
    points: HashMap<String, Coordinate>,
}

impl Default for CategoryIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryIndex {
    pub fn new() -> CategoryIndex {
        CategoryIndex {
            tree: RTree::new(),
            points: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// inserts or replaces the point stored under `name`.
    ///
    /// # Returns
    ///
    /// * the coordinate that was replaced, if any
    pub fn upsert(&mut self, name: &str, coordinate: Coordinate) -> Option<Coordinate> {
        let previous = self.points.insert(name.to_string(), coordinate);
        if let Some(prev) = previous {
            let stale = PlaceSpatialRow::new(name.to_string(), &prev);
            if self.tree.remove(&stale).is_none() {
                log::warn!("spatial index was missing an entry for '{name}'");
            }
        }
        self.tree
            .insert(PlaceSpatialRow::new(name.to_string(), &coordinate));
        previous
    }

    pub fn get(&self, name: &str) -> Option<Coordinate> {
        self.points.get(name).copied()
    }

    /// every (name, coordinate) within `radius_km` of `center`, boundary
    /// inclusive. candidates come from the R-tree envelopes and are then
    /// confirmed by haversine distance.
    pub fn within(&self, center: &Coordinate, radius_km: f64) -> Vec<(String, Coordinate)> {
        geo_utils::radius_envelopes(center, radius_km)
            .into_iter()
            .flat_map(|envelope| {
                self.tree
                    .locate_with_selection_function(EnvelopeSelection(envelope))
            })
            .filter_map(|row| {
                let coordinate = self.points.get(&row.name)?;
                let distance = geo_utils::haversine_km(center, coordinate);
                (distance <= radius_km).then(|| (row.name.clone(), *coordinate))
            })
            .unique_by(|(name, _)| name.clone())
            .collect()
    }

    /// all entries ordered by name.
    pub fn entries(&self) -> Vec<(String, Coordinate)> {
        self.points
            .iter()
            .map(|(name, coordinate)| (name.clone(), *coordinate))
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .collect()
    }
}
