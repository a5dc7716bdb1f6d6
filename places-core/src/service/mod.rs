mod registry_config;
mod registry_error;
mod registry_service;

pub use registry_config::{RegistryConfig, DEFAULT_CATEGORIES, DEFAULT_SEARCH_RADIUS_KM};
pub use registry_error::RegistryError;
pub use registry_service::RegistryService;
