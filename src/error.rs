use thiserror::Error;

use crate::lattice::Axis;

/// Top-level error type for the Solidify mesher.
#[derive(Debug, Error)]
pub enum SolidifyError {
    #[error(transparent)]
    Lattice(#[from] LatticeError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Errors related to the spatial lattice.
#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("broken {axis:?} chain: walk ran off the end before reaching its target")]
    BrokenChain { axis: Axis },
}

/// Errors related to mesh building.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("tolerance must be positive, got {0}")]
    InvalidTolerance(f64),

    #[error("solid has a degenerate bounding box: min {min:?}, max {max:?}")]
    DegenerateBoundingBox { min: [f64; 3], max: [f64; 3] },
}

/// Convenience type alias for results using [`SolidifyError`].
pub type Result<T> = std::result::Result<T, SolidifyError>;
