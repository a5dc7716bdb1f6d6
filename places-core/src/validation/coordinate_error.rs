use serde::Serialize;
use std::fmt::Display;

/// which half of a coordinate pair an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateField {
    Latitude,
    Longitude,
}

impl Display for CoordinateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinateField::Latitude => write!(f, "latitude"),
            CoordinateField::Longitude => write!(f, "longitude"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("{field} is not a finite decimal number: '{value}'")]
    InvalidNumber {
        field: CoordinateField,
        value: String,
    },
    #[error("latitude {latitude} is outside of [-90, 90]")]
    LatitudeOutOfRange { latitude: f64 },
    #[error("longitude {longitude} is outside of [-180, 180]")]
    LongitudeOutOfRange { longitude: f64 },
    #[error("longitude at latitude {latitude} must be 0, found {longitude}")]
    InvalidPolarLongitude { latitude: f64, longitude: f64 },
}
