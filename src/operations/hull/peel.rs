use crate::error::Result;
use crate::topology::{Cycle, PointSet, PointStore};

/// Peels nested convex hulls off a point set, outermost first.
///
/// Each layer is the convex hull of the points left after removing all
/// previous layers, so the layers are disjoint and together cover the set.
#[derive(Debug)]
pub struct PeelHulls {
    points: PointSet,
}

impl PeelHulls {
    /// Creates a new hull peeling operation.
    #[must_use]
    pub fn new(points: PointSet) -> Self {
        Self { points }
    }

    /// Executes the peeling, returning the hull layers from outer to inner.
    ///
    /// An empty set yields no layers.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateBasis` if a layer is degenerate
    /// (coincident or collinear points), or an error if a point is missing
    /// from `store`.
    pub fn execute(&self, store: &PointStore) -> Result<Vec<Cycle>> {
        let mut layers = Vec::new();
        let mut remaining = self.points.clone();
        while !remaining.is_empty() {
            let hull = remaining.convex_hull(store)?;
            if hull.is_empty() {
                break;
            }
            remaining = remaining.subtract(&hull);
            tracing::debug!(
                layer = layers.len(),
                vertices = hull.len(),
                remaining = remaining.len(),
                "peeled hull layer"
            );
            layers.push(hull);
        }
        Ok(layers)
    }
}
