mod places_app;
mod places_app_error;
mod places_operation;
mod places_response;
mod snapshot;

pub use places_app::PlacesApp;
pub use places_app_error::PlacesAppError;
pub use places_operation::PlacesOperation;
pub use places_response::{round_km, DistanceResponse, NearbyEntry, NearbyResponse, PingResponse};
pub use snapshot::{read_snapshot, write_snapshot, SnapshotRow, SnapshotSummary};
