use super::cycle::Cycle;
use super::point::PointId;
use super::point_set::PointSet;
use super::PointStore;
use crate::error::Result;
use crate::math::polygon_2d::{is_collinear, orientation};
use crate::math::Point2;

/// A directed segment between two stored points.
///
/// Derived equality is directed; use [`Edge::same_undirected`] to compare
/// edges regardless of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Start point.
    pub u: PointId,
    /// End point.
    pub v: PointId,
}

impl Edge {
    /// Creates the directed edge `u -> v`.
    #[must_use]
    pub fn new(u: PointId, v: PointId) -> Self {
        Self { u, v }
    }

    /// Returns the edge traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.v, self.u)
    }

    /// Returns `true` if both edges join the same two points.
    #[must_use]
    pub fn same_undirected(&self, other: &Edge) -> bool {
        (self.u == other.u && self.v == other.v) || (self.u == other.v && self.v == other.u)
    }

    /// The same segment, directed from the smaller id to the larger.
    fn canonical(self) -> Self {
        if self.u <= self.v {
            self
        } else {
            self.reversed()
        }
    }

    /// Tests whether this edge crosses `other`, an edge or a whole cycle.
    ///
    /// Segments that only meet at a shared endpoint do not cross. Any other
    /// contact does: an endpoint resting on the other segment, or two
    /// collinear segments that overlap. The result does not depend on the
    /// order or direction of the two edges.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is missing from `store`.
    pub fn crosses<T>(&self, other: &T, store: &PointStore) -> Result<bool>
    where
        T: CrossTarget + ?Sized,
    {
        other.is_crossed_by(self, store)
    }
}

/// Something an [`Edge`] can cross.
pub trait CrossTarget {
    /// Returns `true` if `edge` crosses `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry cannot be evaluated.
    fn is_crossed_by(&self, edge: &Edge, store: &PointStore) -> Result<bool>;
}

impl CrossTarget for Edge {
    /// Both edges are brought into a canonical order first. In general
    /// position the hull of the four endpoints is a quadrilateral, and the
    /// segments cross unless one of them is a hull edge. When three endpoints
    /// are collinear the hull is ambiguous, so contact is decided directly.
    fn is_crossed_by(&self, edge: &Edge, store: &PointStore) -> Result<bool> {
        let (a, b) = canonical_pair(edge, self);
        if a.same_undirected(&b) {
            return Ok(false);
        }
        if let Some((shared, x, y)) = shared_corner(&a, &b) {
            let (s, x, y) = (
                store.position(shared)?,
                store.position(x)?,
                store.position(y)?,
            );
            // Only a fold back along the same line overlaps.
            return Ok(is_collinear(&s, &x, &y) && (x - s).dot(&(y - s)) > 0.0);
        }

        let (p1, p2) = (store.position(a.u)?, store.position(a.v)?);
        let (q1, q2) = (store.position(b.u)?, store.position(b.v)?);
        let turns = [
            turn(&p1, &p2, &q1),
            turn(&p1, &p2, &q2),
            turn(&q1, &q2, &p1),
            turn(&q1, &q2, &p2),
        ];
        if turns.contains(&0) {
            return Ok((turns[0] == 0 && on_segment(&p1, &p2, &q1))
                || (turns[1] == 0 && on_segment(&p1, &p2, &q2))
                || (turns[2] == 0 && on_segment(&q1, &q2, &p1))
                || (turns[3] == 0 && on_segment(&q1, &q2, &p2)));
        }

        let corners = PointSet::from_ids([a.u, a.v, b.u, b.v]);
        let hull = corners.convex_hull(store)?;
        Ok(!(hull.has_edge(&a) || hull.has_edge(&b)))
    }
}

impl CrossTarget for Cycle {
    fn is_crossed_by(&self, edge: &Edge, store: &PointStore) -> Result<bool> {
        for e in self.edges() {
            if e.is_crossed_by(edge, store)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn canonical_pair(a: &Edge, b: &Edge) -> (Edge, Edge) {
    let (a, b) = (a.canonical(), b.canonical());
    if (a.u, a.v) <= (b.u, b.v) {
        (a, b)
    } else {
        (b, a)
    }
}

/// Returns `(shared, other end of a, other end of b)` if the edges meet at
/// exactly one endpoint.
fn shared_corner(a: &Edge, b: &Edge) -> Option<(PointId, PointId, PointId)> {
    if a.u == b.u {
        Some((a.u, a.v, b.v))
    } else if a.u == b.v {
        Some((a.u, a.v, b.u))
    } else if a.v == b.u {
        Some((a.v, a.u, b.v))
    } else if a.v == b.v {
        Some((a.v, a.u, b.u))
    } else {
        None
    }
}

/// Sign of the turn `a -> b -> c`; collinear turns are zero.
fn turn(a: &Point2, b: &Point2, c: &Point2) -> i8 {
    if is_collinear(a, b, c) {
        0
    } else if orientation(a, b, c) > 0.0 {
        1
    } else {
        -1
    }
}

/// Whether `p`, known to be collinear with `a` and `b`, lies on the closed
/// segment between them.
fn on_segment(a: &Point2, b: &Point2, p: &Point2) -> bool {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 > 0.0 {
        let t = (p - a).dot(&ab);
        (0.0..=len2).contains(&t)
    } else {
        p == a
    }
}
