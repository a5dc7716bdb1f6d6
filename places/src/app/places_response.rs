use places_core::model::{DistanceResult, NearbyPlace};
use serde::Serialize;

/// rounds a distance to meters for display.
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 1000.0).round() / 1000.0
}

#[derive(Debug, Serialize)]
pub struct NearbyEntry {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub distance_km: f64,
}

#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    pub count: usize,
    pub places: Vec<NearbyEntry>,
}

impl From<Vec<NearbyPlace>> for NearbyResponse {
    fn from(value: Vec<NearbyPlace>) -> Self {
        let places = value
            .into_iter()
            .map(|n| NearbyEntry {
                lat: n.place.lat(),
                lon: n.place.lon(),
                name: n.place.name,
                distance_km: round_km(n.distance_km),
            })
            .collect::<Vec<_>>();
        NearbyResponse {
            count: places.len(),
            places,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub distance_km: f64,
}

impl From<DistanceResult> for DistanceResponse {
    fn from(value: DistanceResult) -> Self {
        DistanceResponse {
            lat: value.coordinate.lat(),
            lon: value.coordinate.lon(),
            name: value.name,
            distance_km: round_km(value.distance_km),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub store_ok: bool,
}
