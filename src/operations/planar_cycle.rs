use crate::error::{OperationError, Result};
use crate::math::Point2;
use crate::operations::hull::{JoinHulls, PeelHulls};
use crate::operations::query::IsSimpleCycle;
use crate::topology::{Cycle, PointStore};

/// Builds a simple closed path through every input point.
///
/// The points are peeled into nested convex hulls, which are then spliced
/// together from the outside in. The path does not try to be short; it is
/// only guaranteed to visit each point once without crossing itself.
///
/// Inputs with collinear points on a hull boundary (lattices, points on a
/// line) are rejected with `GeometryError::DegenerateBasis` rather than
/// joined into an overlapping path.
#[derive(Debug)]
pub struct PlanarCycle {
    coords: Vec<Point2>,
    validate: bool,
}

/// The result of [`PlanarCycle::execute`].
#[derive(Debug, Default)]
pub struct HamiltonianCycle {
    /// Owns the points referenced by `layers` and `cycle`.
    pub store: PointStore,
    /// Nested convex hulls, outermost first.
    pub layers: Vec<Cycle>,
    /// The joined cycle through all points.
    pub cycle: Cycle,
}

impl PlanarCycle {
    /// Creates a new operation over `coords`. Every entry becomes its own
    /// point, even if its coordinates repeat another entry.
    ///
    /// The joined cycle is validated before it is returned.
    #[must_use]
    pub fn new(coords: Vec<Point2>) -> Self {
        Self {
            coords,
            validate: true,
        }
    }

    /// Toggles the final check that the joined cycle is simple and visits
    /// every point once. The check is quadratic in the number of points;
    /// turning it off trusts the join's own crossing tests.
    #[must_use]
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Executes the operation.
    ///
    /// Zero input points yield an empty result.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for non-finite coordinates,
    /// `GeometryError::DegenerateBasis` for degenerate layers,
    /// `OperationError::NoValidJoin` if a layer cannot be joined, and
    /// `OperationError::Failed` if validation rejects the cycle.
    pub fn execute(&self) -> Result<HamiltonianCycle> {
        if let Some(bad) = self
            .coords
            .iter()
            .find(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(OperationError::InvalidInput(format!(
                "non-finite coordinate ({}, {})",
                bad.x, bad.y
            ))
            .into());
        }
        if self.coords.is_empty() {
            return Ok(HamiltonianCycle::default());
        }

        let mut store = PointStore::new();
        let points = store.import(self.coords.iter().copied());

        let layers = PeelHulls::new(points.clone()).execute(&store)?;
        let cycle = JoinHulls::new(layers.clone()).execute(&store)?;
        tracing::debug!(
            points = points.len(),
            layers = layers.len(),
            "joined nested hulls"
        );

        if self.validate && !IsSimpleCycle::new(&cycle, &points).execute(&store)? {
            return Err(
                OperationError::Failed("joined cycle is not a simple Hamiltonian cycle".into())
                    .into(),
            );
        }

        Ok(HamiltonianCycle {
            store,
            layers,
            cycle,
        })
    }
}

impl HamiltonianCycle {
    /// The cycle's points in visiting order.
    ///
    /// # Errors
    ///
    /// Returns an error if the cycle references a point outside `store`.
    pub fn positions(&self) -> Result<Vec<Point2>> {
        self.cycle.positions(&self.store)
    }

    /// Each hull layer's points in cyclic order, outermost layer first.
    ///
    /// # Errors
    ///
    /// Returns an error if a layer references a point outside `store`.
    pub fn layer_positions(&self) -> Result<Vec<Vec<Point2>>> {
        self.layers
            .iter()
            .map(|layer| layer.positions(&self.store))
            .collect()
    }
}
