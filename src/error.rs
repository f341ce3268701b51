use thiserror::Error;

/// Top-level error type for geomkit.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeomkitError {
    #[error(transparent)]
    Vector(#[from] VectorError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised by vector construction, access and coercion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("invalid component count for {expected}-dimensional vector: got {found}")]
    InvalidArity { expected: usize, found: usize },

    #[error("{type_name} index {index} out of range for length {len}")]
    IndexOutOfRange {
        type_name: &'static str,
        index: usize,
        len: usize,
    },

    #[error("'{type_name}' object does not support item assignment")]
    ImmutableMutation { type_name: &'static str },

    #[error("no vector with {0} components")]
    UnsupportedDimension(usize),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("could not rotate vector: quaternion was not pure (scalar part = {scalar})")]
    Rotation { scalar: f64 },
}

/// Convenience type alias for results using [`GeomkitError`].
pub type Result<T> = std::result::Result<T, GeomkitError>;
