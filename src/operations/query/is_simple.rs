use std::collections::HashSet;

use crate::error::Result;
use crate::topology::{Cycle, PointCollection, PointStore};

/// Checks that a cycle is a simple Hamiltonian cycle of a point collection.
///
/// The cycle must visit every point of the collection exactly once and
/// contain no other points. No two edges may cross or touch, apart from
/// neighbouring edges meeting at their common vertex.
pub struct IsSimpleCycle<'a, C: PointCollection + ?Sized> {
    cycle: &'a Cycle,
    points: &'a C,
}

impl<'a, C: PointCollection + ?Sized> IsSimpleCycle<'a, C> {
    /// Creates a new `IsSimpleCycle` query.
    #[must_use]
    pub fn new(cycle: &'a Cycle, points: &'a C) -> Self {
        Self { cycle, points }
    }

    /// Executes the check.
    ///
    /// # Errors
    ///
    /// Returns an error if a crossing test cannot be evaluated.
    pub fn execute(&self, store: &PointStore) -> Result<bool> {
        let expected: HashSet<_> = self.points.point_ids().iter().copied().collect();
        let mut visited = HashSet::with_capacity(self.cycle.len());
        for &id in self.cycle.vertices() {
            if !expected.contains(&id) || !visited.insert(id) {
                return Ok(false);
            }
        }
        if visited.len() != expected.len() {
            return Ok(false);
        }

        let edges = self.cycle.edges();
        for (i, a) in edges.iter().enumerate() {
            for b in &edges[i + 1..] {
                if a.crosses(b, store)? {
                    tracing::debug!(?a, ?b, "cycle edges cross");
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}
