//! # Store
//!
//! The [`PlaceStore`] trait is the seam between the registry service and
//! whatever engine indexes places. [`InMemoryPlaceStore`] is the in-process
//! implementation: one R-tree per category.

mod category_index;
mod in_memory_place_store;
mod place_spatial_row;
mod place_store;
mod place_store_error;

pub use category_index::CategoryIndex;
pub use in_memory_place_store::InMemoryPlaceStore;
pub use place_spatial_row::PlaceSpatialRow;
pub use place_store::PlaceStore;
pub use place_store_error::PlaceStoreError;
