use super::{Category, Coordinate};
use serde::Serialize;

/// the distance from a query coordinate to one named place.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DistanceResult {
    pub name: String,
    pub category: Category,
    /// stored coordinate of the named place
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub distance_km: f64,
}
