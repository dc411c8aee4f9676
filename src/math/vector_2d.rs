use super::{LinearMap, Vector2};
use crate::error::Result;

/// Rotates a vector by 90 degrees counter-clockwise: `(x, y) -> (-y, x)`.
#[must_use]
pub fn perpendicular(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Returns the polar angle of `v`, `atan2(y, x)`, in `(-pi, pi]`.
#[must_use]
pub fn angle(v: &Vector2) -> f64 {
    v.y.atan2(v.x)
}

/// Expresses `p` in the basis `{u, v}`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateBasis` if `u` and `v` are collinear.
pub fn change_basis(p: &Vector2, u: Vector2, v: Vector2) -> Result<Vector2> {
    Ok(LinearMap::from_columns(u, v).invert()?.apply(p))
}
