use super::edge::Edge;
use super::point::PointId;
use super::{PointCollection, PointStore};
use crate::error::{Result, TopologyError};
use crate::math::Point2;

/// A closed polygon given by its circular vertex order.
///
/// The last vertex connects back to the first. Edges are derived from the
/// current order on demand, never stored. Structural operations return a new
/// cycle and leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cycle {
    vertices: Vec<PointId>,
}

impl Cycle {
    /// Creates a cycle visiting `vertices` in order.
    #[must_use]
    pub fn new(vertices: Vec<PointId>) -> Self {
        Self { vertices }
    }

    /// The vertices in cyclic order.
    #[must_use]
    pub fn vertices(&self) -> &[PointId] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the cycle has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if `id` is one of the vertices.
    #[must_use]
    pub fn contains(&self, id: PointId) -> bool {
        self.vertices.contains(&id)
    }

    /// Edges `(v0, v1), (v1, v2), ..., (v_{n-1}, v0)`.
    ///
    /// A single vertex yields no edges (no self-loop); two vertices yield the
    /// same segment twice, once per direction.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let n = self.vertices.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Returns `true` if `edge`, in either direction, is an edge of this cycle.
    #[must_use]
    pub fn has_edge(&self, edge: &Edge) -> bool {
        self.edges().iter().any(|e| e.same_undirected(edge))
    }

    /// Returns the cycle traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.vertices.iter().rev().copied().collect())
    }

    /// Splits `edge` and routes the cycle through `point`: the result
    /// contains `edge.u -> point -> edge.v` in place of the edge.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if `edge` is not an edge of
    /// this cycle.
    pub fn insert(&self, edge: &Edge, point: PointId) -> Result<Self> {
        let mut vertices = self.open_at(edge)?;
        vertices.push(point);
        Ok(Self::new(vertices))
    }

    /// Merges this cycle and `other` by removing `edge` from this cycle and
    /// `other_edge` from `other`, then joining `edge.u` to `other_edge.v` and
    /// `other_edge.u` to `edge.v`.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if either edge is missing from
    /// its cycle.
    pub fn connect(&self, edge: &Edge, other: &Cycle, other_edge: &Edge) -> Result<Self> {
        let mut vertices = self.open_at(edge)?;
        vertices.extend(other.open_at(other_edge)?);
        Ok(Self::new(vertices))
    }

    /// Resolves the vertex order to coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex is missing from `store`.
    pub fn positions(&self, store: &PointStore) -> Result<Vec<Point2>> {
        self.vertices
            .iter()
            .map(|&id| store.position(id).map_err(Into::into))
            .collect()
    }

    /// Walks the cycle from `edge.v` to `edge.u` without using `edge`, in
    /// whichever direction the cycle actually stores it.
    fn open_at(&self, edge: &Edge) -> std::result::Result<Vec<PointId>, TopologyError> {
        let n = self.vertices.len();
        let position = |id: PointId| self.vertices.iter().position(|&v| v == id);
        let (Some(iu), Some(iv)) = (position(edge.u), position(edge.v)) else {
            return Err(TopologyError::InvalidTopology(
                "edge endpoint is not a vertex of the cycle".into(),
            ));
        };
        if (iu + 1) % n == iv {
            Ok((0..n).map(|k| self.vertices[(iv + k) % n]).collect())
        } else if (iv + 1) % n == iu {
            Ok((0..n).map(|k| self.vertices[(iv + n - k) % n]).collect())
        } else {
            Err(TopologyError::InvalidTopology(
                "edge endpoints are not adjacent in the cycle".into(),
            ))
        }
    }
}

impl PointCollection for Cycle {
    fn point_ids(&self) -> &[PointId] {
        &self.vertices
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::HullPathError;

    fn ids(n: usize) -> (PointStore, Vec<PointId>) {
        let mut store = PointStore::new();
        let ids = (0..n)
            .map(|i| store.add_point(Point2::new(i as f64, 0.0)))
            .collect();
        (store, ids)
    }

    #[test]
    fn two_vertices_give_two_edges() {
        let (_, p) = ids(2);
        let c = Cycle::new(vec![p[0], p[1]]);
        let edges = c.edges();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0], Edge::new(p[0], p[1]));
        assert_eq!(edges[1], Edge::new(p[1], p[0]));
    }

    #[test]
    fn single_vertex_has_no_self_loop() {
        let (_, p) = ids(1);
        assert!(Cycle::new(vec![p[0]]).edges().is_empty());
        assert!(Cycle::default().edges().is_empty());
    }

    #[test]
    fn insert_into_two_cycle() {
        let (_, p) = ids(3);
        let c = Cycle::new(vec![p[0], p[1]]);
        let c = c.insert(&c.edges()[0], p[2]).unwrap();
        assert_eq!(c.edges().len(), 3);
        assert!(c.has_edge(&Edge::new(p[0], p[2])));
        assert!(c.has_edge(&Edge::new(p[2], p[1])));
    }

    #[test]
    fn insert_splits_wraparound_edge() {
        let (_, p) = ids(4);
        let (a, b, c, d) = (p[0], p[1], p[2], p[3]);
        let cycle = Cycle::new(vec![a, b, d]);
        let split = cycle.edges()[2];
        assert_eq!(split, Edge::new(d, a));
        let cycle = cycle.insert(&split, c).unwrap();
        assert_eq!(cycle.vertices(), &[a, b, d, c]);
        assert_eq!(cycle.edges().len(), 4);
        assert!(!cycle.has_edge(&split));
    }

    #[test]
    fn insert_accepts_reversed_edge() {
        let (_, p) = ids(4);
        let cycle = Cycle::new(vec![p[0], p[1], p[2]]);
        let forward = cycle.insert(&Edge::new(p[0], p[1]), p[3]).unwrap();
        let backward = cycle.insert(&Edge::new(p[1], p[0]), p[3]).unwrap();
        for c in [&forward, &backward] {
            assert!(c.has_edge(&Edge::new(p[0], p[3])));
            assert!(c.has_edge(&Edge::new(p[3], p[1])));
            assert!(c.has_edge(&Edge::new(p[1], p[2])));
            assert!(c.has_edge(&Edge::new(p[2], p[0])));
            assert!(!c.has_edge(&Edge::new(p[0], p[1])));
        }
    }

    #[test]
    fn insert_on_missing_edge_fails() {
        let (_, p) = ids(5);
        let cycle = Cycle::new(vec![p[0], p[1], p[2], p[3]]);
        let err = cycle.insert(&Edge::new(p[0], p[2]), p[4]).unwrap_err();
        assert!(matches!(
            err,
            HullPathError::Topology(TopologyError::InvalidTopology(_))
        ));
        assert!(cycle.insert(&Edge::new(p[0], p[4]), p[4]).is_err());
    }

    #[test]
    fn connect_joins_broken_endpoints() {
        let (_, p) = ids(6);
        let outer = Cycle::new(vec![p[0], p[1], p[2]]);
        let inner = Cycle::new(vec![p[3], p[4], p[5]]);
        let e = Edge::new(p[0], p[1]);
        let f = Edge::new(p[3], p[4]);
        let merged = outer.connect(&e, &inner, &f).unwrap();
        assert_eq!(merged.len(), 6);
        assert_eq!(merged.vertices(), &[p[1], p[2], p[0], p[4], p[5], p[3]]);
        assert!(merged.has_edge(&Edge::new(p[0], p[4])));
        assert!(merged.has_edge(&Edge::new(p[3], p[1])));
        assert!(!merged.has_edge(&e));
        assert!(!merged.has_edge(&f));
    }

    #[test]
    fn connect_with_reversed_path_edge() {
        let (_, p) = ids(6);
        let outer = Cycle::new(vec![p[0], p[1], p[2]]);
        let inner = Cycle::new(vec![p[3], p[4], p[5]]);
        // Stored as 0 -> 1, requested as 1 -> 0.
        let e = Edge::new(p[1], p[0]);
        let f = Edge::new(p[3], p[4]);
        let merged = outer.connect(&e, &inner, &f).unwrap();
        assert!(merged.has_edge(&Edge::new(p[1], p[4])));
        assert!(merged.has_edge(&Edge::new(p[3], p[0])));
        assert!(merged.has_edge(&Edge::new(p[1], p[2])));
        assert!(merged.has_edge(&Edge::new(p[2], p[0])));
        assert_eq!(merged.edges().len(), 6);
    }

    #[test]
    fn reversed_keeps_undirected_edges() {
        let (_, p) = ids(4);
        let c = Cycle::new(p.clone());
        let r = c.reversed();
        assert_eq!(r.vertices(), &[p[3], p[2], p[1], p[0]]);
        assert_eq!(c.vertices(), p.as_slice());
        for e in c.edges() {
            assert!(r.has_edge(&e));
            assert!(!r.edges().contains(&e));
        }
    }

    #[test]
    fn positions_follow_vertex_order() {
        let (store, p) = ids(3);
        let c = Cycle::new(vec![p[2], p[0], p[1]]);
        let pts = c.positions(&store).unwrap();
        assert_eq!(pts[0], Point2::new(2.0, 0.0));
        assert_eq!(pts[1], Point2::new(0.0, 0.0));
    }
}
