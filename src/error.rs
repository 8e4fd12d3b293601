use thiserror::Error;

/// Top-level error type for the euclidean primitives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EuclideanError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

/// Errors raised by point and vector arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("the zero point has no dimension to combine with a scalar")]
    UnknownDimension,

    #[error("operation not defined: {0} must have a size and indexed components")]
    OperationNotDefined(String),
}

/// Errors raised when a value cannot stand in for a point or circle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("{0} can't be coerced into a Point")]
    CannotCoerce(String),

    #[error("{0} must be a Circle")]
    NotACircle(&'static str),
}

/// Errors raised by incomplete construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("a circle requires a radius or a diameter")]
    MissingRadius,

    #[error("a center point requires a size")]
    CenterWithoutSize,

    #[error("an origin point requires a size")]
    OriginWithoutSize,

    #[error("width and height must be given together")]
    IncompleteWidthHeight,

    #[error("both corners are required")]
    IncompleteCorners,

    #[error("a rectangle requires corners, a size, or a width and height")]
    MissingRectangleParameters,

    #[error("inset takes 1, 2 or 4 values, got {0}")]
    InsetArity(usize),
}

/// Convenience type alias for results using [`EuclideanError`].
pub type Result<T> = std::result::Result<T, EuclideanError>;
