//! Conversion of numeric sequences between vector dimensions.
//!
//! Mixed-dimension inputs are always up-cast: [`rectify_all`] coerces to the
//! largest dimension present, padding with zeros, so no component is lost.

use std::fmt;

use super::fuzzy::FuzzyEq;
use super::vector::{Vector, Vector2, Vector3, Vector4};
use crate::error::{GeomkitError, Result, VectorError};

/// A mutable vector whose dimension is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DynVector {
    Two(Vector2),
    Three(Vector3),
    Four(Vector4),
}

impl DynVector {
    /// Number of components.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.as_slice().len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::Two(v) => v.as_slice(),
            Self::Three(v) => v.as_slice(),
            Self::Four(v) => v.as_slice(),
        }
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        match self {
            Self::Two(v) => v.magnitude(),
            Self::Three(v) => v.magnitude(),
            Self::Four(v) => v.magnitude(),
        }
    }

    /// Unit vector in the same direction; NaN components for zero.
    #[must_use]
    pub fn normalize(&self) -> Self {
        match self {
            Self::Two(v) => Self::Two(v.normalize()),
            Self::Three(v) => Self::Three(v.normalize()),
            Self::Four(v) => Self::Four(v.normalize()),
        }
    }
}

impl AsRef<[f64]> for DynVector {
    fn as_ref(&self) -> &[f64] {
        self.as_slice()
    }
}

impl fmt::Display for DynVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Two(v) => fmt::Display::fmt(v, f),
            Self::Three(v) => fmt::Display::fmt(v, f),
            Self::Four(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl<R> FuzzyEq<R> for DynVector
where
    R: AsRef<[f64]> + ?Sized,
{
    fn fuzzy_eq(&self, other: &R, epsilon: f64) -> bool {
        self.as_slice().fuzzy_eq(other, epsilon)
    }
}

macro_rules! dyn_variant {
    ($variant:ident, $ty:ident) => {
        impl From<$ty> for DynVector {
            fn from(v: $ty) -> Self {
                Self::$variant(v)
            }
        }

        impl TryFrom<DynVector> for $ty {
            type Error = GeomkitError;

            fn try_from(v: DynVector) -> Result<Self> {
                match v {
                    DynVector::$variant(inner) => Ok(inner),
                    other => Err(VectorError::InvalidArity {
                        expected: <$ty as Vector>::DIM,
                        found: other.dim(),
                    }
                    .into()),
                }
            }
        }
    };
}

dyn_variant!(Two, Vector2);
dyn_variant!(Three, Vector3);
dyn_variant!(Four, Vector4);

/// Builds the vector type matching `components.len()`.
///
/// # Errors
///
/// Returns [`VectorError::UnsupportedDimension`] unless the length is 2, 3
/// or 4.
pub fn to_vector(components: &[f64]) -> Result<DynVector> {
    match components.len() {
        2 => Ok(DynVector::Two(Vector2::from_padded(components))),
        3 => Ok(DynVector::Three(Vector3::from_padded(components))),
        4 => Ok(DynVector::Four(Vector4::from_padded(components))),
        n => Err(VectorError::UnsupportedDimension(n).into()),
    }
}

/// Truncates `v` to its first `n` components, or pads it on the right with
/// zeros, returning a fresh vector of dimension `n`.
///
/// # Errors
///
/// Returns [`VectorError::UnsupportedDimension`] unless `n` is 2, 3 or 4.
pub fn change_dimension(v: &(impl AsRef<[f64]> + ?Sized), n: usize) -> Result<DynVector> {
    let v = v.as_ref();
    let components: Vec<f64> = (0..n).map(|i| v.get(i).copied().unwrap_or(0.0)).collect();
    to_vector(&components)
}

/// Coerces `v2` to the dimension of `v1`.
///
/// # Errors
///
/// Returns [`VectorError::UnsupportedDimension`] if `v1` has an unsupported
/// length.
pub fn rectify(v1: &(impl AsRef<[f64]> + ?Sized), v2: &(impl AsRef<[f64]> + ?Sized)) -> Result<DynVector> {
    change_dimension(v2, v1.as_ref().len())
}

/// Coerces every vector to the largest dimension among them.
///
/// # Errors
///
/// Returns [`VectorError::UnsupportedDimension`] if the largest length is not
/// 2, 3 or 4.
pub fn rectify_all<V: AsRef<[f64]>>(vectors: &[V]) -> Result<Vec<DynVector>> {
    let dim = vectors.iter().map(|v| v.as_ref().len()).max().unwrap_or(0);
    vectors.iter().map(|v| change_dimension(v, dim)).collect()
}
