use super::{Point2, TOLERANCE};

/// Twice the signed area of the triangle `a, b, c`.
///
/// Positive when `c` lies to the left of `a -> b`, negative to the right.
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b - a).perp(&(c - a))
}

/// Returns `true` if the three points lie on one line.
///
/// The triangle's doubled area is compared against `TOLERANCE` times the
/// squared length of its longest side, so the test does not depend on scale.
/// Coincident points are collinear.
#[must_use]
pub fn is_collinear(a: &Point2, b: &Point2, c: &Point2) -> bool {
    let longest = (b - a)
        .norm_squared()
        .max((c - b).norm_squared())
        .max((a - c).norm_squared());
    orientation(a, b, c).abs() <= TOLERANCE * longest
}

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[cfg(test)]
pub(crate) fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if every turn of the closed polygon has the same sign,
/// i.e. the vertices form a convex polygon in consistent cyclic order.
#[cfg(test)]
pub(crate) fn is_convex(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return true;
    }
    let mut sign: Option<bool> = None;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let turn = (b - a).perp(&(c - b));
        if turn.abs() < TOLERANCE {
            continue;
        }
        match sign {
            None => sign = Some(turn > 0.0),
            Some(ccw) if ccw != (turn > 0.0) => return false,
            Some(_) => {}
        }
    }
    true
}
