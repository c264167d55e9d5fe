use thiserror::Error;

/// Top-level error type for the geokern kernel.
#[derive(Debug, Error)]
pub enum GeokernError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Pca(#[from] PcaError),
}

/// Errors raised when a caller violates a precondition of a math operation.
///
/// These are *invalid usage* errors. Mathematical degeneracies (parallel
/// lines, a ray missing a sphere) are not errors; they are reported as
/// `None` or empty results by the operations concerned.
#[derive(Debug, Error)]
pub enum MathError {
    #[error("matrix is not invertible, determinant is zero")]
    NotInvertible,

    #[error("zero-length vector")]
    ZeroVector,

    #[error("vector must be unit length, |v| = {length}")]
    NotNormalized { length: f32 },

    #[error("ray parameter must be in [0, ∞), got {lambda}")]
    NegativeRayParameter { lambda: f32 },

    #[error("bound must be positive, got {bound}")]
    NonPositiveBound { bound: f32 },

    #[error("origin {origin} must be less than bound {bound}")]
    EmptyRange { origin: f32, bound: f32 },

    #[error("random source is already seeded and can not be re-seeded")]
    AlreadySeeded,
}

/// Errors related to principal component analysis.
#[derive(Debug, Error)]
pub enum PcaError {
    #[error("need at least 3 points for PCA, got {count}")]
    TooFewPoints { count: usize },
}

/// Convenience type alias for results using [`GeokernError`].
pub type Result<T> = std::result::Result<T, GeokernError>;
