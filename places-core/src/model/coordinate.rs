use crate::validation::{self, CoordinateError};
use geo::Point;
use serde::Serialize;

/// a (latitude, longitude) pair in decimal degrees that has passed
/// coordinate validation. the only public constructor is [`Coordinate::try_new`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// validates and wraps a coordinate pair.
    pub fn try_new(lat: f64, lon: f64) -> Result<Coordinate, CoordinateError> {
        validation::validate(lat, lon)
    }

    pub(crate) fn new_unchecked(lat: f64, lon: f64) -> Coordinate {
        Coordinate { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// this coordinate as a geo [`Point`] with x = longitude and y = latitude.
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}
