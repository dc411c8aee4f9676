use std::collections::HashSet;

use super::cycle::Cycle;
use super::edge::Edge;
use super::point::PointId;
use super::{PointCollection, PointStore};
use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::is_collinear;
use crate::math::vector_2d::perpendicular;
use crate::math::{LinearMap, Point2, TOLERANCE};

/// An unordered collection of distinct point identities.
///
/// Iteration order is the insertion order, which decides ties in
/// [`PointSet::extreme_by`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<PointId>,
}

impl PointSet {
    /// Creates a set from `ids`, dropping repeated identities (first one wins).
    #[must_use]
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = PointId>,
    {
        let mut seen = HashSet::new();
        let points = ids.into_iter().filter(|id| seen.insert(*id)).collect();
        Self { points }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point maximising `f` over the positions, or `None` for an
    /// empty set. The first point in iteration order wins ties.
    ///
    /// # Errors
    ///
    /// Returns an error if a point is missing from `store`.
    pub fn extreme_by<F>(&self, store: &PointStore, mut f: F) -> Result<Option<PointId>>
    where
        F: FnMut(&Point2) -> f64,
    {
        let mut best: Option<(PointId, f64)> = None;
        for &id in &self.points {
            let value = f(&store.position(id)?);
            match best {
                Some((_, b)) if value <= b => {}
                _ => best = Some((id, value)),
            }
        }
        Ok(best.map(|(id, _)| id))
    }

    /// Computes the convex hull as a cycle of hull vertices.
    ///
    /// Sets of at most three points are returned as-is. Otherwise the cycle is
    /// seeded with the leftmost and rightmost points and grown edge by edge:
    /// whenever some point lies outside an edge, the farthest such point is
    /// spliced into that edge and the scan restarts. The resulting order is
    /// counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateBasis` if the hull boundary is not
    /// well defined: an edge of the growing hull has zero length, a point
    /// other than its endpoints lies on the line of a finished hull edge, or
    /// three points are collinear. Returns an error if a point is missing
    /// from `store`.
    pub fn convex_hull(&self, store: &PointStore) -> Result<Cycle> {
        if let &[a, b, c] = self.points.as_slice() {
            let (pa, pb, pc) = (store.position(a)?, store.position(b)?, store.position(c)?);
            if is_collinear(&pa, &pb, &pc) {
                let (u, v) = (pb - pa, pc - pa);
                return Err(GeometryError::DegenerateBasis {
                    ux: u.x,
                    uy: u.y,
                    vx: v.x,
                    vy: v.y,
                }
                .into());
            }
        }
        if self.points.len() <= 3 {
            return Ok(Cycle::new(self.points.clone()));
        }

        let (Some(left), Some(right)) = (
            self.extreme_by(store, |p| -p.x)?,
            self.extreme_by(store, |p| p.x)?,
        ) else {
            return Ok(Cycle::default());
        };

        let mut hull = Cycle::new(vec![left, right]);
        'refine: loop {
            for edge in hull.edges() {
                let Some(far) = self.farthest_outside(store, &edge)? else {
                    continue;
                };
                if hull.contains(far) {
                    continue;
                }
                tracing::trace!(hull_len = hull.len(), "hull vertex added");
                hull = hull.insert(&edge, far)?;
                continue 'refine;
            }
            return Ok(hull);
        }
    }

    /// Finds the point farthest to the outer side of `edge`, measured as the
    /// second coordinate in the basis `{u - v, perpendicular(u - v)}`.
    ///
    /// Returns `None` once nothing lies outside by more than `TOLERANCE`. The
    /// edge is then final, and any other point on its line would sit on the
    /// hull boundary; that is reported as a degenerate basis.
    fn farthest_outside(&self, store: &PointStore, edge: &Edge) -> Result<Option<PointId>> {
        let (u, v) = (store.position(edge.u)?, store.position(edge.v)?);
        let axis = u - v;
        let to_edge_frame = LinearMap::from_columns(axis, perpendicular(&axis)).invert()?;
        let offset = |p: &Point2| to_edge_frame.apply(&(p - v)).y;

        if let Some(far) = self.extreme_by(store, offset)? {
            if far != edge.u && far != edge.v && offset(&store.position(far)?) > TOLERANCE {
                return Ok(Some(far));
            }
        }
        for &id in &self.points {
            if id == edge.u || id == edge.v {
                continue;
            }
            let p = store.position(id)?;
            if offset(&p).abs() <= TOLERANCE {
                let along = p - v;
                return Err(GeometryError::DegenerateBasis {
                    ux: axis.x,
                    uy: axis.y,
                    vx: along.x,
                    vy: along.y,
                }
                .into());
            }
        }
        Ok(None)
    }

    /// Returns the points of this set whose identity does not occur in `other`.
    #[must_use]
    pub fn subtract<C>(&self, other: &C) -> Self
    where
        C: PointCollection + ?Sized,
    {
        let removed: HashSet<PointId> = other.point_ids().iter().copied().collect();
        Self {
            points: self
                .points
                .iter()
                .copied()
                .filter(|id| !removed.contains(id))
                .collect(),
        }
    }
}

impl PointCollection for PointSet {
    fn point_ids(&self) -> &[PointId] {
        &self.points
    }
}

impl From<&Cycle> for PointSet {
    fn from(cycle: &Cycle) -> Self {
        Self::from_ids(cycle.vertices().iter().copied())
    }
}
