pub mod backend;
pub mod dimension;
pub mod fuzzy;
pub mod vector;

pub use backend::{ActiveLinAlg, DirectLinAlg, LinAlg};
pub use dimension::{change_dimension, rectify, rectify_all, to_vector, DynVector};
pub use fuzzy::{fuzzy_eq, fuzzy_eq_numbers, fuzzy_ne, FuzzyEq};
pub use vector::{
    ImmutableVector2, ImmutableVector3, ImmutableVector4, Quaternion, Vector, Vector2, Vector3,
    Vector4, VectorMut,
};

/// Default tolerance for fuzzy comparisons.
pub const EPSILON: f64 = 1e-8;

/// Unit in which an angle is given or returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Converts an angle expressed in this unit to radians.
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle.to_radians(),
            Self::Radians => angle,
        }
    }

    /// Converts an angle in radians to this unit.
    #[must_use]
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            Self::Degrees => radians.to_degrees(),
            Self::Radians => radians,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn degrees_round_trip_through_radians() {
        let r = AngleUnit::Degrees.to_radians(90.0);
        assert!((r - FRAC_PI_2).abs() < 1e-12);
        assert!((AngleUnit::Degrees.from_radians(r) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn radians_are_passed_through() {
        assert_eq!(AngleUnit::Radians.to_radians(1.25), 1.25);
        assert_eq!(AngleUnit::Radians.from_radians(1.25), 1.25);
    }
}
