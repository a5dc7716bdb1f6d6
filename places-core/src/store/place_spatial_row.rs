use crate::model::Coordinate;
use geo::Point;
use rstar::{Envelope, RTreeObject, SelectionFunction, AABB};

/// an entry in a category's spatial index. the point is stored in
/// (lon, lat) degree space and the row is identified by place name.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceSpatialRow {
    pub name: String,
    pub point: Point<f64>,
}

impl PlaceSpatialRow {
    pub fn new(name: String, coordinate: &Coordinate) -> PlaceSpatialRow {
        PlaceSpatialRow {
            name,
            point: coordinate.to_point(),
        }
    }
}

impl RTreeObject for PlaceSpatialRow {
    type Envelope = AABB<Point<f64>>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

/// selects rows whose point lies inside an envelope, pruning subtrees that
/// do not intersect it.
pub struct EnvelopeSelection(pub AABB<Point<f64>>);

impl SelectionFunction<PlaceSpatialRow> for EnvelopeSelection {
    fn should_unpack_parent(&self, envelope: &AABB<Point<f64>>) -> bool {
        self.0.intersects(envelope)
    }

    fn should_unpack_leaf(&self, leaf: &PlaceSpatialRow) -> bool {
        self.0.contains_point(&leaf.point)
    }
}
