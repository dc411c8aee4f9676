pub mod cycle;
pub mod edge;
pub mod point;
pub mod point_set;

pub use cycle::Cycle;
pub use edge::{CrossTarget, Edge};
pub use point::{PointData, PointId};
pub use point_set::PointSet;

use crate::error::TopologyError;
use crate::math::Point2;
use slotmap::SlotMap;

/// Central arena that owns every point.
///
/// Edges, cycles and sets refer to points via typed IDs (generational
/// indices), so membership tests compare identities rather than coordinates.
#[derive(Debug, Default)]
pub struct PointStore {
    points: SlotMap<PointId, PointData>,
}

impl PointStore {
    /// Creates a new, empty point store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a point and returns its ID.
    pub fn add_point(&mut self, position: Point2) -> PointId {
        self.points.insert(PointData::new(position))
    }

    /// Inserts one point per coordinate pair, in order, and returns them as a set.
    ///
    /// Equal coordinate pairs still produce distinct points.
    pub fn import<I>(&mut self, coords: I) -> PointSet
    where
        I: IntoIterator<Item = Point2>,
    {
        let ids: Vec<PointId> = coords.into_iter().map(|p| self.add_point(p)).collect();
        PointSet::from_ids(ids)
    }

    /// Returns a reference to the point data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn point(&self, id: PointId) -> Result<&PointData, TopologyError> {
        self.points
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("point".into()))
    }

    /// Returns the position of a point.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn position(&self, id: PointId) -> Result<Point2, TopologyError> {
        self.point(id).map(|p| p.position)
    }

    /// Number of stored points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the store holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// An ordered collection of point identities.
///
/// Implemented by [`PointSet`] and [`Cycle`] so set operations accept either.
pub trait PointCollection {
    /// The point identities, in collection order.
    fn point_ids(&self) -> &[PointId];
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn equal_coordinates_are_distinct_points() {
        let mut store = PointStore::new();
        let a = store.add_point(Point2::new(1.0, 2.0));
        let b = store.add_point(Point2::new(1.0, 2.0));
        assert_ne!(a, b);
        assert_eq!(store.position(a).unwrap(), store.position(b).unwrap());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn import_keeps_input_order() {
        let mut store = PointStore::new();
        let set = store.import([
            Point2::new(-4.0, 8.0),
            Point2::new(-1.0, -7.0),
            Point2::new(-2.0, 9.0),
        ]);
        assert_eq!(set.len(), 3);
        let first = store.position(set.point_ids()[0]).unwrap();
        let last = store.position(set.point_ids()[2]).unwrap();
        assert_eq!(first, Point2::new(-4.0, 8.0));
        assert_eq!(last, Point2::new(-2.0, 9.0));
    }

    #[test]
    fn unknown_id_is_reported() {
        let mut other = PointStore::new();
        let foreign = other.add_point(Point2::origin());
        let store = PointStore::new();
        assert!(store.is_empty());
        assert!(matches!(
            store.position(foreign),
            Err(TopologyError::EntityNotFound(_))
        ));
    }
}
