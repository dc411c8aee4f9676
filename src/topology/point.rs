use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a point in the point store.
    ///
    /// Identity, not position, decides equality: two points created from the
    /// same coordinates get different ids.
    pub struct PointId;
}

/// Data associated with a stored point.
#[derive(Debug, Clone)]
pub struct PointData {
    /// The 2D position of the point.
    pub position: Point2,
}

impl PointData {
    /// Creates point data at the given position.
    #[must_use]
    pub fn new(position: Point2) -> Self {
        Self { position }
    }
}
