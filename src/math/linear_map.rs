use super::{Matrix2, Vector2};
use crate::error::{GeometryError, Result};

/// A 2x2 linear map whose columns are two basis vectors.
///
/// Applying the inverse of the map built from `{u, v}` expresses a vector in
/// that basis; this is how points are measured against a directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    matrix: Matrix2,
}

impl LinearMap {
    /// Creates the map with `u` as first column and `v` as second column.
    #[must_use]
    pub fn from_columns(u: Vector2, v: Vector2) -> Self {
        Self {
            matrix: Matrix2::from_columns(&[u, v]),
        }
    }

    /// Returns the `i`-th basis vector (column). `i` must be 0 or 1.
    #[must_use]
    pub fn column(&self, i: usize) -> Vector2 {
        self.matrix.column(i).into_owned()
    }

    /// Returns the determinant `u.x * v.y - u.y * v.x`.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        let (u, v) = (self.column(0), self.column(1));
        u.x * v.y - u.y * v.x
    }

    /// Returns the inverse map.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateBasis` if the determinant is zero.
    #[allow(clippy::float_cmp)]
    pub fn invert(&self) -> Result<Self> {
        let (u, v) = (self.column(0), self.column(1));
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(GeometryError::DegenerateBasis {
                ux: u.x,
                uy: u.y,
                vx: v.x,
                vy: v.y,
            }
            .into());
        }
        let inv = 1.0 / det;
        Ok(Self::from_columns(
            Vector2::new(inv * v.y, -inv * u.y),
            Vector2::new(-inv * v.x, inv * u.x),
        ))
    }

    /// Matrix-vector product.
    #[must_use]
    pub fn apply(&self, p: &Vector2) -> Vector2 {
        self.matrix * p
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn identity() -> LinearMap {
        LinearMap::from_columns(Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0))
    }

    #[test]
    fn identity_apply_is_noop() {
        let u = Vector2::new(-5.0, 7.0);
        assert_eq!(identity().apply(&u), u);
    }

    #[test]
    fn swapped_columns_flip_coordinates() {
        let m = LinearMap::from_columns(Vector2::new(0.0, 1.0), Vector2::new(1.0, 0.0));
        let r = m.apply(&Vector2::new(-5.0, 7.0));
        assert_relative_eq!(r.x, 7.0);
        assert_relative_eq!(r.y, -5.0);
    }

    #[test]
    fn identity_is_its_own_inverse() {
        let inv = identity().invert().unwrap();
        assert_eq!(inv.column(0), Vector2::new(1.0, 0.0));
        assert_eq!(inv.column(1), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn inverse_regression_value() {
        let m = LinearMap::from_columns(Vector2::new(8.0, -4.0), Vector2::new(2.0, -12.0));
        let inv = m.invert().unwrap();
        assert_relative_eq!(inv.column(0).x * 44.0, 6.0, epsilon = 1e-12);
        assert_relative_eq!(inv.column(0).y * 44.0, -2.0, epsilon = 1e-12);
        assert_relative_eq!(inv.column(1).x * 44.0, 1.0, epsilon = 1e-12);
        assert_relative_eq!(inv.column(1).y * 44.0, -4.0, epsilon = 1e-12);
    }

    #[test]
    fn unit_determinant_inverse() {
        let m = LinearMap::from_columns(Vector2::new(1.0, 2.0), Vector2::new(3.0, 7.0));
        let inv = m.invert().unwrap();
        assert_relative_eq!(inv.column(0).x, 7.0);
        assert_relative_eq!(inv.column(0).y, -2.0);
        assert_relative_eq!(inv.column(1).x, -3.0);
        assert_relative_eq!(inv.column(1).y, 1.0);
    }

    #[test]
    fn inverse_undoes_apply() {
        let m = LinearMap::from_columns(Vector2::new(2.0, 1.0), Vector2::new(-1.0, 3.0));
        let p = Vector2::new(0.25, -4.0);
        let back = m.invert().unwrap().apply(&m.apply(&p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-12);
    }

    #[test]
    fn collinear_basis_is_degenerate() {
        let m = LinearMap::from_columns(Vector2::new(2.0, 4.0), Vector2::new(1.0, 2.0));
        let err = m.invert().unwrap_err();
        assert!(matches!(
            err,
            crate::HullPathError::Geometry(GeometryError::DegenerateBasis { .. })
        ));
    }

    #[test]
    fn zero_column_is_degenerate() {
        let m = LinearMap::from_columns(Vector2::zeros(), Vector2::new(0.0, 1.0));
        assert!(m.invert().is_err());
    }
}
