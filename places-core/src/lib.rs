//! # places-core
//!
//! A registry of named points of interest grouped into categories. Places are
//! validated on the way in, indexed per category in an R-tree, and queried by
//! fixed-radius search or by great-circle distance to a single named place.
pub mod model;
pub mod service;
pub mod store;
pub mod util;
pub mod validation;
