use thiserror::Error;

use crate::math::Real;

/// Top-level error type for the Quimera math kernel.
#[derive(Debug, Error)]
pub enum QuimeraError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Errors related to geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to transformation matrices.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("matrix is singular (determinant = {determinant})")]
    Singular { determinant: Real },

    #[error("scale factor on axis {axis} is zero")]
    ZeroScale { axis: char },
}

/// Convenience type alias for results using [`QuimeraError`].
pub type Result<T> = std::result::Result<T, QuimeraError>;
