use places_core::service::RegistryError;

#[derive(thiserror::Error, Debug)]
pub enum PlacesAppError {
    #[error(transparent)]
    RegistryError(#[from] RegistryError),
    #[error("failure reading or writing places snapshot: {0}")]
    SnapshotError(#[from] csv::Error),
    #[error("failure writing output: {0}")]
    OutputError(#[from] serde_json::Error),
    #[error("{0}")]
    IoError(#[from] std::io::Error),
}
