//! Fixed-dimension vectors.
//!
//! Every dimension comes in a mutable flavor (`Vector2`, `Vector3`,
//! `Vector4`) and an immutable one (`ImmutableVector2`, ...). Both implement
//! the read-only [`Vector`] contract; only the mutable flavor implements
//! [`VectorMut`]. Arithmetic is scalar-only: there is no `Mul` between two
//! plain vectors.
//!
//! ```compile_fail
//! use geomkit::math::Vector2;
//!
//! let v = Vector2::new(1.0, 2.0);
//! let _ = v * v;
//! ```

use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use rand::Rng;

use super::backend::{ActiveLinAlg, LinAlg};
use super::fuzzy::{fuzzy_eq_numbers, FuzzyEq};
use super::AngleUnit;
use crate::error::{Result, VectorError};

/// Shared read-only contract of all fixed-dimension vectors.
pub trait Vector:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + FuzzyEq
    + AsRef<[f64]>
    + Index<usize, Output = f64>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// Number of components.
    const DIM: usize;

    /// Type name used in error messages.
    const TYPE_NAME: &'static str;

    /// Builds a vector whose `i`-th component is `f(i)`.
    fn from_fn(f: impl FnMut(usize) -> f64) -> Self;

    /// Components as a slice of length [`DIM`](Vector::DIM).
    fn as_slice(&self) -> &[f64];

    /// Attempts to assign component `index`.
    ///
    /// # Errors
    ///
    /// Immutable vectors always fail with [`VectorError::ImmutableMutation`];
    /// mutable ones behave like [`VectorMut::set`].
    fn try_set(&mut self, _index: usize, _value: f64) -> Result<()> {
        Err(VectorError::ImmutableMutation {
            type_name: Self::TYPE_NAME,
        }
        .into())
    }

    /// Builds a vector from exactly [`DIM`](Vector::DIM) values.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidArity`] for any other length.
    fn from_slice(components: &[f64]) -> Result<Self> {
        if components.len() != Self::DIM {
            return Err(VectorError::InvalidArity {
                expected: Self::DIM,
                found: components.len(),
            }
            .into());
        }
        Ok(Self::from_fn(|i| components[i]))
    }

    /// Builds a vector from the first [`DIM`](Vector::DIM) values,
    /// padding with zeros when fewer are given.
    #[must_use]
    fn from_padded(components: &[f64]) -> Self {
        Self::from_fn(|i| components.get(i).copied().unwrap_or(0.0))
    }

    /// The zero vector.
    #[must_use]
    fn zeros() -> Self {
        Self::from_fn(|_| 0.0)
    }

    /// Component `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] if `index >= DIM`.
    fn get(&self, index: usize) -> Result<f64> {
        self.as_slice().get(index).copied().ok_or_else(|| {
            VectorError::IndexOutOfRange {
                type_name: Self::TYPE_NAME,
                index,
                len: Self::DIM,
            }
            .into()
        })
    }

    /// Unary plus: returns `self` unchanged.
    #[must_use]
    fn positive(self) -> Self {
        self
    }

    /// Applies `f` to every component.
    #[must_use]
    fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        let c = self.as_slice();
        Self::from_fn(|i| f(c[i]))
    }

    #[must_use]
    fn dot(&self, other: &Self) -> f64 {
        ActiveLinAlg::dot(self.as_slice(), other.as_slice())
    }

    #[must_use]
    fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    #[must_use]
    fn magnitude(&self) -> f64 {
        ActiveLinAlg::norm(self.as_slice())
    }

    /// `self / |self|`. The zero vector yields NaN components.
    #[must_use]
    fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// Returns `true` if exactly one component is non-zero within `epsilon`,
    /// i.e. the vector is aligned with a coordinate axis.
    #[must_use]
    fn is_orthogonal(&self, epsilon: f64) -> bool {
        self.as_slice()
            .iter()
            .filter(|c| !fuzzy_eq_numbers(**c, 0.0, epsilon))
            .count()
            == 1
    }

    /// Angle between `self` and `other`, `acos(a·b / (|a||b|))`.
    #[must_use]
    fn angle_between(&self, other: &Self, unit: AngleUnit) -> f64 {
        let cos = self.dot(other) / (self.magnitude() * other.magnitude());
        unit.from_radians(cos.acos())
    }

    /// Vector projection of `self` onto `other`.
    #[must_use]
    fn project_onto(&self, other: &Self) -> Self {
        *other * (self.dot(other) / other.magnitude_squared())
    }

    /// Truncates every component toward zero.
    #[must_use]
    fn cast_to_ints(&self) -> Self {
        self.map(f64::trunc)
    }

    /// Vector with components drawn uniformly from `[0, 1)`.
    #[must_use]
    fn random() -> Self {
        let mut rng = rand::rng();
        Self::from_fn(|_| rng.random::<f64>())
    }

    /// Vector whose `i`-th component is drawn uniformly between
    /// `ranges[i].0` and `ranges[i].1`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidArity`] unless exactly one range per
    /// component is given.
    fn random_ranged(ranges: &[(f64, f64)]) -> Result<Self> {
        if ranges.len() != Self::DIM {
            return Err(VectorError::InvalidArity {
                expected: Self::DIM,
                found: ranges.len(),
            }
            .into());
        }
        let mut rng = rand::rng();
        Ok(Self::from_fn(|i| {
            let (lo, hi) = ranges[i];
            lo + (hi - lo) * rng.random::<f64>()
        }))
    }

    /// Random vector of unit length.
    #[must_use]
    fn random_unit() -> Self {
        Self::random().normalize()
    }
}

/// In-place mutation, implemented only by the mutable flavors.
pub trait VectorMut: Vector {
    /// Assigns component `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] if `index >= DIM`.
    fn set(&mut self, index: usize, value: f64) -> Result<()>;
}

/// Formats components as `<c0, c1, ...>`.
fn fmt_components(components: &[f64], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "<")?;
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{c}")?;
    }
    write!(f, ">")
}

/// Everything shared by both flavors of a vector type.
macro_rules! vector_type {
    (mut $name:ident, $dim:literal, [$($comp:ident = $idx:literal),+]) => {
        vector_type!(@impl $name, $dim, [$($comp = $idx),+], {
            fn try_set(&mut self, index: usize, value: f64) -> $crate::error::Result<()> {
                $crate::math::vector::VectorMut::set(self, index, value)
            }
        });
    };
    (@impl $name:ident, $dim:literal, [$($comp:ident = $idx:literal),+], {$($extra:tt)*}) => {
        impl $name {
            #[must_use]
            pub const fn new($($comp: f64),+) -> Self {
                Self { components: [$($comp),+] }
            }

            $(
                #[must_use]
                pub const fn $comp(&self) -> f64 {
                    self.components[$idx]
                }
            )+

            #[must_use]
            pub const fn to_array(self) -> [f64; $dim] {
                self.components
            }
        }

        impl $crate::math::vector::Vector for $name {
            const DIM: usize = $dim;
            const TYPE_NAME: &'static str = stringify!($name);

            fn from_fn(f: impl FnMut(usize) -> f64) -> Self {
                Self { components: std::array::from_fn(f) }
            }

            fn as_slice(&self) -> &[f64] {
                &self.components
            }

            $($extra)*
        }

        impl Default for $name {
            fn default() -> Self {
                Self { components: [0.0; $dim] }
            }
        }

        impl From<[f64; $dim]> for $name {
            fn from(components: [f64; $dim]) -> Self {
                Self { components }
            }
        }

        impl From<$name> for [f64; $dim] {
            fn from(v: $name) -> Self {
                v.components
            }
        }

        impl TryFrom<&[f64]> for $name {
            type Error = $crate::error::GeomkitError;

            fn try_from(components: &[f64]) -> $crate::error::Result<Self> {
                <Self as $crate::math::vector::Vector>::from_slice(components)
            }
        }

        impl AsRef<[f64]> for $name {
            fn as_ref(&self) -> &[f64] {
                &self.components
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = f64;

            fn index(&self, index: usize) -> &f64 {
                &self.components[index]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::math::vector::fmt_components(&self.components, f)
            }
        }

        impl<R> $crate::math::fuzzy::FuzzyEq<R> for $name
        where
            R: AsRef<[f64]> + ?Sized,
        {
            fn fuzzy_eq(&self, other: &R, epsilon: f64) -> bool {
                $crate::math::fuzzy::FuzzyEq::fuzzy_eq(&self.components[..], other, epsilon)
            }
        }

        impl std::ops::Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                self + rhs.components
            }
        }

        impl std::ops::Add<[f64; $dim]> for $name {
            type Output = Self;

            fn add(self, rhs: [f64; $dim]) -> Self {
                Self { components: std::array::from_fn(|i| self.components[i] + rhs[i]) }
            }
        }

        impl std::ops::Add<$name> for [f64; $dim] {
            type Output = $name;

            fn add(self, rhs: $name) -> $name {
                rhs + self
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                self - rhs.components
            }
        }

        impl std::ops::Sub<[f64; $dim]> for $name {
            type Output = Self;

            fn sub(self, rhs: [f64; $dim]) -> Self {
                Self { components: std::array::from_fn(|i| self.components[i] - rhs[i]) }
            }
        }

        impl std::ops::Sub<$name> for [f64; $dim] {
            type Output = $name;

            fn sub(self, rhs: $name) -> $name {
                $name { components: std::array::from_fn(|i| self[i] - rhs.components[i]) }
            }
        }

        impl std::ops::Mul<f64> for $name {
            type Output = Self;

            fn mul(self, k: f64) -> Self {
                Self { components: self.components.map(|c| c * k) }
            }
        }

        impl std::ops::Mul<$name> for f64 {
            type Output = $name;

            fn mul(self, v: $name) -> $name {
                v * self
            }
        }

        impl std::ops::Div<f64> for $name {
            type Output = Self;

            fn div(self, k: f64) -> Self {
                Self { components: self.components.map(|c| c / k) }
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            fn neg(self) -> Self {
                Self { components: self.components.map(|c| -c) }
            }
        }
    };
    ($name:ident, $dim:literal, [$($comp:ident = $idx:literal),+]) => {
        vector_type!(@impl $name, $dim, [$($comp = $idx),+], {});
    };
}

/// Mutation surface of the mutable flavor.
macro_rules! mutable_vector {
    ($name:ident, $dim:literal, [$($setter:ident = $idx:literal),+]) => {
        impl $name {
            $(
                pub fn $setter(&mut self, value: f64) {
                    self.components[$idx] = value;
                }
            )+
        }

        impl $crate::math::vector::VectorMut for $name {
            fn set(&mut self, index: usize, value: f64) -> $crate::error::Result<()> {
                match self.components.get_mut(index) {
                    Some(c) => {
                        *c = value;
                        Ok(())
                    }
                    None => Err($crate::error::VectorError::IndexOutOfRange {
                        type_name: stringify!($name),
                        index,
                        len: $dim,
                    }
                    .into()),
                }
            }
        }

        impl std::ops::IndexMut<usize> for $name {
            fn index_mut(&mut self, index: usize) -> &mut f64 {
                &mut self.components[index]
            }
        }

        impl std::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl std::ops::MulAssign<f64> for $name {
            fn mul_assign(&mut self, k: f64) {
                *self = *self * k;
            }
        }

        impl std::ops::DivAssign<f64> for $name {
            fn div_assign(&mut self, k: f64) {
                *self = *self / k;
            }
        }
    };
}

/// Conversions and mixed arithmetic between the two flavors of one
/// dimension. The left operand decides the result type.
macro_rules! vector_flavors {
    ($mutable:ident, $immutable:ident) => {
        impl From<$immutable> for $mutable {
            fn from(v: $immutable) -> Self {
                Self { components: v.components }
            }
        }

        impl From<$mutable> for $immutable {
            fn from(v: $mutable) -> Self {
                Self { components: v.components }
            }
        }

        impl std::ops::Add<$immutable> for $mutable {
            type Output = Self;

            fn add(self, rhs: $immutable) -> Self {
                self + rhs.components
            }
        }

        impl std::ops::Add<$mutable> for $immutable {
            type Output = Self;

            fn add(self, rhs: $mutable) -> Self {
                self + rhs.components
            }
        }

        impl std::ops::Sub<$immutable> for $mutable {
            type Output = Self;

            fn sub(self, rhs: $immutable) -> Self {
                self - rhs.components
            }
        }

        impl std::ops::Sub<$mutable> for $immutable {
            type Output = Self;

            fn sub(self, rhs: $mutable) -> Self {
                self - rhs.components
            }
        }
    };
}

mod quaternion;
mod vector2;
mod vector3;
mod vector4;

pub use quaternion::Quaternion;
pub use vector2::{ImmutableVector2, Vector2};
pub use vector3::{ImmutableVector3, Vector3};
pub use vector4::{ImmutableVector4, Vector4};
