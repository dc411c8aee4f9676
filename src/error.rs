use thiserror::Error;

/// Top-level error type for hull peeling and cycle joining.
#[derive(Debug, Error)]
pub enum HullPathError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The two basis vectors are collinear (or one of them is zero), so the
    /// change of basis has no inverse.
    #[error("degenerate basis ({ux}, {uy}), ({vx}, {vy}): determinant is zero")]
    DegenerateBasis { ux: f64, uy: f64, vx: f64, vy: f64 },
}

/// Errors related to point identities and cycle structure.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to the peeling and joining operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("no planar join exists between hull layer {layer} and the path")]
    NoValidJoin { layer: usize },

    #[error("at least one point is required")]
    InsufficientPoints,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`HullPathError`].
pub type Result<T> = std::result::Result<T, HullPathError>;
