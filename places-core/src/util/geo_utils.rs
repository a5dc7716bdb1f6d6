use crate::model::Coordinate;
use geo::Point;
use rstar::AABB;
use std::f64::consts::PI;

/// mean radius of the earth used for all great-circle computations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// padding applied to search envelopes so that points sitting exactly on
/// the search radius are never dropped by the envelope pre-filter.
const ENVELOPE_PADDING_DEGREES: f64 = 1e-7;

/// computes the haversine great-circle distance in kilometers between two
/// coordinates given in decimal degrees.
///
/// the argument of `asin` is clamped to [0, 1] so that near-antipodal pairs
/// never produce NaN from floating point overshoot.
///
/// # Arguments
///
/// * `lat1`, `lon1` - first coordinate, in degrees
/// * `lat2`, `lon2` - second coordinate, in degrees
///
/// # Returns
///
/// * the distance in kilometers, always >= 0
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
    EARTH_RADIUS_KM * c
}

/// [`distance_km`] between two validated coordinates.
pub fn haversine_km(src: &Coordinate, dst: &Coordinate) -> f64 {
    distance_km(src.lat(), src.lon(), dst.lat(), dst.lon())
}

/// creates the envelopes in (lon, lat) degree space that together cover the
/// spherical cap of `radius_km` around `center`. the envelopes are a
/// pre-filter only; callers must still test candidates by exact distance.
///
/// - a cap that reaches a pole is covered by a band spanning all longitudes
/// - a cap crossing the antimeridian is split into two envelopes
/// - a negative or non-finite radius covers nothing
///
/// # Arguments
///
/// * `center` - center of the search
/// * `radius_km` - search radius in kilometers
///
/// # Returns
///
/// * zero, one or two envelopes to query against an R-tree
pub fn radius_envelopes(center: &Coordinate, radius_km: f64) -> Vec<AABB<Point<f64>>> {
    if !radius_km.is_finite() || radius_km < 0.0 {
        return vec![];
    }
    let angular = radius_km / EARTH_RADIUS_KM;
    if angular >= PI {
        return vec![envelope(-180.0, -90.0, 180.0, 90.0)];
    }

    let d_lat = angular.to_degrees() + ENVELOPE_PADDING_DEGREES;
    let lat_min = center.lat() - d_lat;
    let lat_max = center.lat() + d_lat;
    if lat_min <= -90.0 || lat_max >= 90.0 {
        return vec![envelope(-180.0, lat_min.max(-90.0), 180.0, lat_max.min(90.0))];
    }

    let ratio = angular.sin() / center.lat().to_radians().cos();
    if ratio >= 1.0 {
        return vec![envelope(-180.0, lat_min, 180.0, lat_max)];
    }
    let d_lon = ratio.asin().to_degrees() + ENVELOPE_PADDING_DEGREES;
    if d_lon >= 180.0 {
        return vec![envelope(-180.0, lat_min, 180.0, lat_max)];
    }

    let lon_min = center.lon() - d_lon;
    let lon_max = center.lon() + d_lon;
    if lon_min < -180.0 {
        vec![
            envelope(lon_min + 360.0, lat_min, 180.0, lat_max),
            envelope(-180.0, lat_min, lon_max, lat_max),
        ]
    } else if lon_max > 180.0 {
        vec![
            envelope(lon_min, lat_min, 180.0, lat_max),
            envelope(-180.0, lat_min, lon_max - 360.0, lat_max),
        ]
    } else {
        vec![envelope(lon_min, lat_min, lon_max, lat_max)]
    }
}

fn envelope(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> AABB<Point<f64>> {
    AABB::from_corners(Point::new(xmin, ymin), Point::new(xmax, ymax))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::validation::validate;
    use geo::{Distance, Haversine};
    use rstar::Envelope;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        validate(lat, lon).expect("test coordinate should be valid")
    }

    #[test]
    fn test_identical_points_have_zero_distance() {
        for (lat, lon) in [(0.0, 0.0), (-34.603722, -58.381592), (89.5, 179.9), (90.0, 0.0)] {
            assert_eq!(distance_km(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            ((-34.603722, -58.381592), (40.7128, -74.0060)),
            ((51.5074, -0.1278), (35.6762, 139.6503)),
            ((0.0, 179.9), (0.0, -179.9)),
            ((-90.0, 0.0), (12.5, 77.0)),
        ];
        for ((a, b), (c, d)) in pairs {
            let forward = distance_km(a, b, c, d);
            let backward = distance_km(c, d, a, b);
            assert!((forward - backward).abs() <= 1e-9 * forward.max(1.0));
        }
    }

    #[test]
    fn test_buenos_aires_to_new_york() {
        let d = distance_km(-34.603722, -58.381592, 40.7128, -74.0060);
        assert!((d - 8526.0).abs() <= 10.0, "distance was {d}");
    }

    #[test]
    fn test_antipodal_points_do_not_produce_nan() {
        let d = distance_km(0.0, 0.0, 0.0, 180.0);
        assert!(d.is_finite());
        assert!((d - PI * EARTH_RADIUS_KM).abs() < 1e-6);
        let d = distance_km(90.0, 0.0, -90.0, 0.0);
        assert!((d - PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_agrees_with_geo_haversine_up_to_radius() {
        // geo uses a mean radius of 6371.0088 km, so results differ only by
        // the ratio of the two radii.
        let src = Point::new(-58.381592, -34.603722);
        let dst = Point::new(-74.0060, 40.7128);
        let geo_km = Haversine.distance(src, dst) / 1000.0;
        let ours = distance_km(src.y(), src.x(), dst.y(), dst.x());
        assert!((ours / geo_km - 6371.0 / 6371.0088).abs() < 1e-9);
    }

    #[test]
    fn test_envelope_contains_cap() {
        let center = coord(-34.6, -58.4);
        let envelopes = radius_envelopes(&center, 5.0);
        assert_eq!(envelopes.len(), 1);
        // due north, south, east and west at exactly the radius
        let d_lat = (5.0 / EARTH_RADIUS_KM).to_degrees();
        let north = Point::new(-58.4, -34.6 + d_lat);
        let south = Point::new(-58.4, -34.6 - d_lat);
        assert!(envelopes[0].contains_point(&north));
        assert!(envelopes[0].contains_point(&south));
        let east = Point::new(-58.4 + d_lat / (-34.6_f64).to_radians().cos(), -34.6);
        assert!(envelopes[0].contains_point(&east));
    }

    #[test]
    fn test_envelope_splits_at_antimeridian() {
        let center = coord(0.0, 179.99);
        let envelopes = radius_envelopes(&center, 5.0);
        assert_eq!(envelopes.len(), 2);
        assert!(envelopes
            .iter()
            .any(|e| e.contains_point(&Point::new(-179.99, 0.0))));
        assert!(envelopes
            .iter()
            .any(|e| e.contains_point(&Point::new(179.98, 0.0))));
    }

    #[test]
    fn test_envelope_at_pole_spans_all_longitudes() {
        let center = coord(90.0, 0.0);
        let envelopes = radius_envelopes(&center, 5.0);
        assert_eq!(envelopes.len(), 1);
        assert!(envelopes[0].contains_point(&Point::new(-180.0, 89.99)));
        assert!(envelopes[0].contains_point(&Point::new(135.0, 89.99)));
    }

    #[test]
    fn test_negative_radius_covers_nothing() {
        let center = coord(10.0, 10.0);
        assert!(radius_envelopes(&center, -1.0).is_empty());
        assert!(radius_envelopes(&center, f64::NAN).is_empty());
    }
}
