use crate::store::PlaceStoreError;
use crate::validation::CoordinateError;

#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    #[error(transparent)]
    InvalidCoordinate(#[from] CoordinateError),
    #[error("place name must not be blank")]
    EmptyName,
    #[error("unknown category '{category}'")]
    UnknownCategory { category: String },
    #[error("no place named '{name}' in category '{category}'")]
    PlaceNotFound { category: String, name: String },
    #[error("{0}")]
    StoreUnavailable(String),
    #[error("invalid registry configuration: {0}")]
    ConfigurationError(String),
}

impl From<PlaceStoreError> for RegistryError {
    fn from(value: PlaceStoreError) -> Self {
        RegistryError::StoreUnavailable(value.to_string())
    }
}
