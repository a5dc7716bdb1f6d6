mod coordinate_error;
mod coordinate_validator;

pub use coordinate_error::{CoordinateError, CoordinateField};
pub use coordinate_validator::{
    parse, validate, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE, POLAR_LONGITUDE,
};
