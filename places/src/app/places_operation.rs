use super::{DistanceResponse, NearbyResponse, PingResponse, PlacesAppError};
use clap::Subcommand;
use places_core::service::{RegistryError, RegistryService};
use places_core::validation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum PlacesOperation {
    /// register a place, replacing any place of the same name in the category
    Add {
        #[arg(long)]
        category: String,
        #[arg(long)]
        name: String,
        /// latitude in decimal degrees, [-90, 90]
        #[arg(long, allow_hyphen_values = true)]
        lat: String,
        /// longitude in decimal degrees, [-180, 180]
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
    },
    /// list places of a category within the search radius, nearest first
    Nearby {
        #[arg(long)]
        category: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: String,
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
    },
    /// great-circle distance from a location to a named place
    Distance {
        #[arg(long)]
        category: String,
        #[arg(long)]
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: String,
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
    },
    /// dump every place grouped by category
    List,
    /// check that the place store is reachable
    Ping,
}

impl PlacesOperation {
    /// true if running this operation changes the registry contents.
    pub fn mutates(&self) -> bool {
        matches!(self, PlacesOperation::Add { .. })
    }

    /// runs the operation against the registry and returns the JSON response.
    pub fn run(&self, service: &RegistryService) -> Result<serde_json::Value, PlacesAppError> {
        match self {
            PlacesOperation::Add {
                category,
                name,
                lat,
                lon,
            } => {
                let coordinate = validation::parse(Some(lat.as_str()), Some(lon.as_str()))
                    .map_err(RegistryError::from)?;
                let place = service.add_place(category, name, coordinate.lat(), coordinate.lon())?;
                Ok(serde_json::json!({
                    "message": "place added",
                    "place": place,
                }))
            }
            PlacesOperation::Nearby { category, lat, lon } => {
                let coordinate = validation::parse(Some(lat.as_str()), Some(lon.as_str()))
                    .map_err(RegistryError::from)?;
                let nearby = service.find_nearby(category, coordinate.lat(), coordinate.lon())?;
                Ok(serde_json::to_value(NearbyResponse::from(nearby))?)
            }
            PlacesOperation::Distance {
                category,
                name,
                lat,
                lon,
            } => {
                let coordinate = validation::parse(Some(lat.as_str()), Some(lon.as_str()))
                    .map_err(RegistryError::from)?;
                let result =
                    service.compute_distance(category, name, coordinate.lat(), coordinate.lon())?;
                Ok(serde_json::to_value(DistanceResponse::from(result))?)
            }
            PlacesOperation::List => Ok(serde_json::to_value(service.list_all()?)?),
            PlacesOperation::Ping => {
                let store_ok = match service.ping() {
                    Ok(()) => true,
                    Err(e) => {
                        log::warn!("{e}");
                        false
                    }
                };
                Ok(serde_json::to_value(PingResponse { store_ok })?)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::app::round_km;
    use places_core::service::RegistryConfig;
    use places_core::validation::CoordinateError;

    fn add(name: &str, lat: &str, lon: &str) -> PlacesOperation {
        PlacesOperation::Add {
            category: String::from("breweries"),
            name: String::from(name),
            lat: String::from(lat),
            lon: String::from(lon),
        }
    }

    #[test]
    fn test_add_nearby_distance() {
        let service = RegistryService::in_memory(RegistryConfig::default()).expect("service");
        let added = add("antares", "-34.6037", "-58.3816")
            .run(&service)
            .expect("add");
        assert_eq!(added["place"]["name"], "antares");
        assert_eq!(added["place"]["category"], "breweries");

        let nearby = PlacesOperation::Nearby {
            category: String::from("breweries"),
            lat: String::from("-34.6"),
            lon: String::from("-58.38"),
        }
        .run(&service)
        .expect("nearby");
        assert_eq!(nearby["count"], 1);
        assert_eq!(nearby["places"][0]["name"], "antares");

        let distance = PlacesOperation::Distance {
            category: String::from("breweries"),
            name: String::from("antares"),
            lat: String::from("40.7128"),
            lon: String::from("-74.0060"),
        }
        .run(&service)
        .expect("distance");
        let km = distance["distance_km"].as_f64().expect("number");
        assert!((km - 8526.0).abs() < 10.0);
        assert_eq!(km, round_km(km));
    }

    #[test]
    fn test_non_numeric_input_is_invalid_number() {
        let service = RegistryService::in_memory(RegistryConfig::default()).expect("service");
        let result = add("x", "north", "0").run(&service);
        assert!(matches!(
            result,
            Err(PlacesAppError::RegistryError(RegistryError::InvalidCoordinate(
                CoordinateError::InvalidNumber { .. }
            )))
        ));
    }

    #[test]
    fn test_list_and_ping() {
        let service = RegistryService::in_memory(RegistryConfig::default()).expect("service");
        add("a", "1", "1").run(&service).expect("add");
        let listing = PlacesOperation::List.run(&service).expect("list");
        assert_eq!(listing["total"], 1);
        let ping = PlacesOperation::Ping.run(&service).expect("ping");
        assert_eq!(ping["store_ok"], true);
        assert!(add("a", "1", "1").mutates());
        assert!(!PlacesOperation::List.mutates());
    }
}
