use super::{CoordinateError, CoordinateField};
use crate::model::Coordinate;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// the only longitude accepted at either pole, where all meridians meet.
pub const POLAR_LONGITUDE: f64 = 0.0;

/// validates a coordinate pair. rules are checked in order and the first
/// failing rule is reported:
///
/// 1. both values are finite
/// 2. latitude in [-90, 90]
/// 3. longitude in [-180, 180]
/// 4. at latitude +-90, longitude is exactly 0
///
/// # Returns
///
/// * the validated [`Coordinate`], or the first rule violation
pub fn validate(lat: f64, lon: f64) -> Result<Coordinate, CoordinateError> {
    ensure_finite(lat, CoordinateField::Latitude)?;
    ensure_finite(lon, CoordinateField::Longitude)?;
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        return Err(CoordinateError::LatitudeOutOfRange { latitude: lat });
    }
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
        return Err(CoordinateError::LongitudeOutOfRange { longitude: lon });
    }
    let is_pole = lat == MAX_LATITUDE || lat == MIN_LATITUDE;
    if is_pole && lon != POLAR_LONGITUDE {
        return Err(CoordinateError::InvalidPolarLongitude {
            latitude: lat,
            longitude: lon,
        });
    }
    Ok(Coordinate::new_unchecked(lat, lon))
}

/// parses raw textual input (for example from a command line or form) and
/// validates the result with [`validate`]. missing, empty, non-numeric and
/// non-finite values all fail with [`CoordinateError::InvalidNumber`].
pub fn parse(lat: Option<&str>, lon: Option<&str>) -> Result<Coordinate, CoordinateError> {
    let lat = parse_field(lat, CoordinateField::Latitude)?;
    let lon = parse_field(lon, CoordinateField::Longitude)?;
    validate(lat, lon)
}

fn parse_field(raw: Option<&str>, field: CoordinateField) -> Result<f64, CoordinateError> {
    let raw = raw.unwrap_or_default();
    let invalid = || CoordinateError::InvalidNumber {
        field,
        value: raw.to_string(),
    };
    let value = raw.trim().parse::<f64>().map_err(|_| invalid())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid())
    }
}

fn ensure_finite(value: f64, field: CoordinateField) -> Result<(), CoordinateError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoordinateError::InvalidNumber {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_interior_grid_is_valid() {
        let mut lat = -89.5;
        while lat <= 89.5 {
            let mut lon = -180.0;
            while lon <= 180.0 {
                assert!(validate(lat, lon).is_ok(), "({lat}, {lon}) should be valid");
                lon += 7.5;
            }
            lat += 0.5;
        }
    }

    #[test]
    fn test_range_limits_are_inclusive() {
        assert!(validate(89.999999, 180.0).is_ok());
        assert!(validate(-89.999999, -180.0).is_ok());
    }

    #[test]
    fn test_poles_require_zero_longitude() {
        assert!(validate(90.0, 0.0).is_ok());
        assert!(validate(-90.0, 0.0).is_ok());
        assert_eq!(
            validate(90.0, 5.0),
            Err(CoordinateError::InvalidPolarLongitude {
                latitude: 90.0,
                longitude: 5.0
            })
        );
        assert!(matches!(
            validate(-90.0, -180.0),
            Err(CoordinateError::InvalidPolarLongitude { .. })
        ));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            validate(91.0, 0.0),
            Err(CoordinateError::LatitudeOutOfRange { latitude: 91.0 })
        );
        assert_eq!(
            validate(0.0, 181.0),
            Err(CoordinateError::LongitudeOutOfRange { longitude: 181.0 })
        );
        assert!(matches!(
            validate(-90.0001, 0.0),
            Err(CoordinateError::LatitudeOutOfRange { .. })
        ));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // both out of range: latitude reported first
        assert!(matches!(
            validate(100.0, 200.0),
            Err(CoordinateError::LatitudeOutOfRange { .. })
        ));
        // non-finite longitude beats out of range latitude
        assert!(matches!(
            validate(100.0, f64::NAN),
            Err(CoordinateError::InvalidNumber {
                field: CoordinateField::Longitude,
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_is_invalid_number() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                validate(bad, 0.0),
                Err(CoordinateError::InvalidNumber {
                    field: CoordinateField::Latitude,
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_parse() {
        let coord = parse(Some(" -34.6 "), Some("-58.4")).expect("should parse");
        assert_eq!(coord.lat(), -34.6);
        assert_eq!(coord.lon(), -58.4);

        assert_eq!(
            parse(Some("abc"), Some("1")),
            Err(CoordinateError::InvalidNumber {
                field: CoordinateField::Latitude,
                value: String::from("abc")
            })
        );
        assert_eq!(
            parse(Some("1"), None),
            Err(CoordinateError::InvalidNumber {
                field: CoordinateField::Longitude,
                value: String::new()
            })
        );
        assert!(matches!(
            parse(Some("inf"), Some("0")),
            Err(CoordinateError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse(Some("90"), Some("5")),
            Err(CoordinateError::InvalidPolarLongitude { .. })
        ));
    }
}
