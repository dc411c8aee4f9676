pub mod linear_map;
pub mod polygon_2d;
pub mod vector_2d;

pub use linear_map::LinearMap;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2x2 matrix type.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// Relative tolerance for collinearity and hull offset comparisons.
pub const TOLERANCE: f64 = 1e-10;
