use super::{Category, Coordinate};
use serde::Serialize;

/// a named point of interest. names are unique within a category; adding a
/// place under an existing name replaces the stored coordinate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Place {
    pub name: String,
    pub category: Category,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl Place {
    pub fn new(name: String, category: Category, coordinate: Coordinate) -> Place {
        Place {
            name,
            category,
            coordinate,
        }
    }

    pub fn lat(&self) -> f64 {
        self.coordinate.lat()
    }

    pub fn lon(&self) -> f64 {
        self.coordinate.lon()
    }
}
