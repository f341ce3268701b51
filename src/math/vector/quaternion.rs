use std::ops::{Div, Mul};

use super::{ImmutableVector3, ImmutableVector4, Vector};

/// Quaternion stored as an immutable 4-vector.
///
/// Component 0 (`x`) is the scalar part, components 1 to 3 (`y`, `z`, `w`)
/// the vector part. Multiplication is the non-commutative Hamilton product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    components: [f64; 4],
}

vector_type!(Quaternion, 4, [x = 0, y = 1, z = 2, w = 3]);

impl Quaternion {
    /// Builds `(scalar, vector)`.
    #[must_use]
    pub fn from_scalar_vector(scalar: f64, vector: impl Into<[f64; 3]>) -> Self {
        let [x, y, z] = vector.into();
        Self::new(scalar, x, y, z)
    }

    #[must_use]
    pub const fn i() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    #[must_use]
    pub const fn j() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    #[must_use]
    pub const fn k() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[must_use]
    pub const fn scalar(&self) -> f64 {
        self.components[0]
    }

    #[must_use]
    pub const fn vector(&self) -> ImmutableVector3 {
        let [_, x, y, z] = self.components;
        ImmutableVector3::new(x, y, z)
    }

    #[must_use]
    pub const fn as_ordered_pair(&self) -> (f64, ImmutableVector3) {
        (self.scalar(), self.vector())
    }

    #[must_use]
    pub fn conjugate(&self) -> Self {
        let [s, x, y, z] = self.components;
        Self::new(s, -x, -y, -z)
    }

    /// `conjugate() / magnitude_squared()`.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.magnitude_squared()
    }

    /// Quaternion exponential `e^s (cos|v|, sin|v| / |v| · v)`.
    ///
    /// A zero vector part divides by zero and yields NaN components.
    #[must_use]
    pub fn exp(&self) -> Self {
        let (s, v) = self.as_ordered_pair();
        let v_len = v.magnitude();
        let factor = v_len.sin() / v_len;
        Self::from_scalar_vector(v_len.cos(), v * factor) * s.exp()
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product. `a * b != b * a` in general.
    fn mul(self, rhs: Self) -> Self {
        let (s1, a) = self.as_ordered_pair();
        let (s2, b) = rhs.as_ordered_pair();
        Self::from_scalar_vector(s1 * s2 - a.dot(&b), b * s1 + a * s2 + a.cross(&b))
    }
}

impl Div for Quaternion {
    type Output = Self;

    /// `self * rhs.inverse()`, expanded.
    fn div(self, rhs: Self) -> Self {
        let [a0, a1, a2, a3] = self.components;
        let [b0, b1, b2, b3] = rhs.components;
        let m = rhs.magnitude_squared();
        Self::new(
            (a0 * b0 + a1 * b1 + a2 * b2 + a3 * b3) / m,
            (a1 * b0 - a0 * b1 - a2 * b3 + a3 * b2) / m,
            (a2 * b0 - a0 * b2 - a3 * b1 + a1 * b3) / m,
            (a3 * b0 - a0 * b3 - a1 * b2 + a2 * b1) / m,
        )
    }
}

impl From<ImmutableVector4> for Quaternion {
    fn from(v: ImmutableVector4) -> Self {
        Self::from(v.to_array())
    }
}

impl From<Quaternion> for ImmutableVector4 {
    fn from(q: Quaternion) -> Self {
        Self::from(q.components)
    }
}
