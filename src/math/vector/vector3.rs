use super::{Quaternion, Vector};
use crate::error::{GeometryError, Result};
use crate::math::backend::{ActiveLinAlg, LinAlg};
use crate::math::fuzzy::fuzzy_eq_numbers;
use crate::math::{AngleUnit, EPSILON};

/// Mutable 3D vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    components: [f64; 3],
}

/// Immutable 3D vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImmutableVector3 {
    components: [f64; 3],
}

vector_type!(mut Vector3, 3, [x = 0, y = 1, z = 2]);
vector_type!(ImmutableVector3, 3, [x = 0, y = 1, z = 2]);
mutable_vector!(Vector3, 3, [set_x = 0, set_y = 1, set_z = 2]);
vector_flavors!(Vector3, ImmutableVector3);

macro_rules! spatial_ops {
    ($name:ident) => {
        impl $name {
            /// Cross product `self × other`.
            #[must_use]
            pub fn cross(&self, other: &Self) -> Self {
                Self::from(ActiveLinAlg::cross(&self.components, &other.components))
            }

            /// Rotates `self` by `angle` around `axis` using quaternion
            /// conjugation.
            ///
            /// A vector orthogonal to the axis takes the single-product path
            /// `q * p` with the full-angle quaternion; any other vector is
            /// conjugated as `q * p * q⁻¹` with the half-angle quaternion.
            ///
            /// # Errors
            ///
            /// Returns [`GeometryError::Rotation`] if the resulting
            /// quaternion is not pure, which happens for a zero or
            /// non-finite axis.
            pub fn rotate(&self, angle: f64, axis: impl AsRef<[f64]>, unit: AngleUnit) -> Result<Self> {
                let angle = unit.to_radians(angle);
                let axis = Vector3::from_padded(axis.as_ref()).normalize();
                let p = Quaternion::from_scalar_vector(0.0, self.components);

                let rotated = if fuzzy_eq_numbers(Vector3::from(self.components).dot(&axis), 0.0, EPSILON) {
                    let (sin, cos) = angle.sin_cos();
                    Quaternion::from_scalar_vector(cos, axis * sin) * p
                } else {
                    let (sin, cos) = (angle / 2.0).sin_cos();
                    let q = Quaternion::from_scalar_vector(cos, axis * sin);
                    q * p * q.inverse()
                };

                if !fuzzy_eq_numbers(rotated.scalar(), 0.0, EPSILON) {
                    tracing::debug!(scalar = rotated.scalar(), "rotation produced a non-pure quaternion");
                    return Err(GeometryError::Rotation {
                        scalar: rotated.scalar(),
                    }
                    .into());
                }
                Ok(Self::from(rotated.vector().to_array()))
            }
        }
    };
}

spatial_ops!(Vector3);
spatial_ops!(ImmutableVector3);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeomkitError;
    use crate::math::FuzzyEq;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    // ── cross ──

    #[test]
    fn cross_product() {
        assert_eq!(v(1.0, 0.0, 0.0).cross(&v(0.0, 1.0, 0.0)), v(0.0, 0.0, 1.0));
        assert_eq!(v(0.0, 1.0, 0.0).cross(&v(1.0, 0.0, 0.0)), v(0.0, 0.0, -1.0));
        assert_eq!(v(1.0, 2.0, 3.0).cross(&v(4.0, 5.0, 6.0)), v(-3.0, 6.0, -3.0));
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let a = v(1.5, -2.0, 0.5);
        let b = v(0.25, 3.0, -1.0);
        let c = a.cross(&b);
        assert!(c.dot(&a).abs() < 1e-12);
        assert!(c.dot(&b).abs() < 1e-12);
    }

    // ── rotate ──

    #[test]
    fn rotate_orthogonal_vector() {
        let r = v(1.0, 0.0, 0.0)
            .rotate(90.0, [0.0, 0.0, 1.0], AngleUnit::Degrees)
            .unwrap();
        assert!(r.fuzzy_eq(&v(0.0, 1.0, 0.0), EPSILON), "got {r}");
    }

    #[test]
    fn rotate_oblique_vector() {
        let r = v(1.0, 0.0, 1.0)
            .rotate(90.0, [0.0, 0.0, 1.0], AngleUnit::Degrees)
            .unwrap();
        assert!(r.fuzzy_eq(&v(0.0, 1.0, 1.0), EPSILON), "got {r}");

        let s = v(1.0, 1.0, 1.0)
            .rotate(120.0, [1.0, 1.0, 1.0], AngleUnit::Degrees)
            .unwrap();
        assert!(s.fuzzy_eq(&v(1.0, 1.0, 1.0), 1e-12), "got {s}");
    }

    #[test]
    fn rotation_paths_agree_on_length() {
        let axis = [0.0, 1.0, 0.0];
        for vec in [v(2.0, 0.0, 0.0), v(2.0, 1.0, 0.0), v(0.0, 0.0, -3.0)] {
            let r = vec.rotate(0.7, axis, AngleUnit::Radians).unwrap();
            assert!((r.magnitude() - vec.magnitude()).abs() < 1e-12);
        }
    }

    #[test]
    fn rotate_permutes_axes_about_diagonal() {
        let r = v(1.0, 0.0, 0.0)
            .rotate(120.0, [1.0, 1.0, 1.0], AngleUnit::Degrees)
            .unwrap();
        assert!(r.fuzzy_eq(&v(0.0, 1.0, 0.0), 1e-12), "got {r}");
    }

    #[test]
    fn rotate_about_zero_axis_fails() {
        let err = v(1.0, 2.0, 3.0)
            .rotate(45.0, [0.0, 0.0, 0.0], AngleUnit::Degrees)
            .unwrap_err();
        assert!(matches!(err, GeomkitError::Geometry(GeometryError::Rotation { .. })));
    }

    #[test]
    fn immutable_flavor_rotates() {
        let r = ImmutableVector3::new(0.0, 1.0, 0.0)
            .rotate(-90.0, [1.0, 0.0, 0.0], AngleUnit::Degrees)
            .unwrap();
        assert!(r.fuzzy_eq(&[0.0, 0.0, -1.0], EPSILON), "got {r}");
    }
}
