use super::Place;
use serde::Serialize;

/// a place returned by a radius search along with its great-circle distance
/// from the query coordinate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NearbyPlace {
    #[serde(flatten)]
    pub place: Place,
    pub distance_km: f64,
}
