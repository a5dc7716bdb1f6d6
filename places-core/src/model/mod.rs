mod category;
mod coordinate;
mod distance_result;
mod nearby_place;
mod place;
mod registry_listing;

pub use category::Category;
pub use coordinate::Coordinate;
pub use distance_result::DistanceResult;
pub use nearby_place::NearbyPlace;
pub use place::Place;
pub use registry_listing::{PlaceEntry, RegistryListing};
