use super::Vector;
use crate::math::AngleUnit;

/// Mutable 2D vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    components: [f64; 2],
}

/// Immutable 2D vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImmutableVector2 {
    components: [f64; 2],
}

vector_type!(mut Vector2, 2, [x = 0, y = 1]);
vector_type!(ImmutableVector2, 2, [x = 0, y = 1]);
mutable_vector!(Vector2, 2, [set_x = 0, set_y = 1]);
vector_flavors!(Vector2, ImmutableVector2);

macro_rules! planar_ops {
    ($name:ident) => {
        impl $name {
            #[must_use]
            pub const fn ones() -> Self {
                Self::new(1.0, 1.0)
            }

            #[must_use]
            pub const fn right() -> Self {
                Self::new(1.0, 0.0)
            }

            #[must_use]
            pub const fn left() -> Self {
                Self::new(-1.0, 0.0)
            }

            #[must_use]
            pub const fn up() -> Self {
                Self::new(0.0, 1.0)
            }

            #[must_use]
            pub const fn down() -> Self {
                Self::new(0.0, -1.0)
            }

            /// "Up" in screen space, where y grows downward.
            #[must_use]
            pub const fn game_up() -> Self {
                Self::down()
            }

            /// "Down" in screen space, where y grows downward.
            #[must_use]
            pub const fn game_down() -> Self {
                Self::up()
            }

            /// Unit vector at `angle` from the positive x-axis.
            #[must_use]
            pub fn from_angle(angle: f64, unit: AngleUnit) -> Self {
                let angle = unit.to_radians(angle);
                Self::new(angle.cos(), angle.sin())
            }

            /// Left-hand perpendicular `(y, -x)`.
            #[must_use]
            pub fn lnormal(&self) -> Self {
                Self::new(self.y(), -self.x())
            }

            /// Right-hand perpendicular `(-y, x)`.
            #[must_use]
            pub fn rnormal(&self) -> Self {
                Self::new(-self.y(), self.x())
            }

            /// Unsigned angle from the positive x-axis, in `[0, 180]` degrees.
            /// Exactly zero whenever `y == 0`.
            #[must_use]
            #[allow(clippy::float_cmp)]
            pub fn angle(&self, unit: AngleUnit) -> f64 {
                if self.y() == 0.0 {
                    return 0.0;
                }
                unit.from_radians((self.x() / self.magnitude()).acos())
            }

            /// Rotates counter-clockwise by `angle` around `anchor`.
            #[must_use]
            pub fn rotate(&self, angle: f64, anchor: impl AsRef<[f64]>, unit: AngleUnit) -> Self {
                let anchor = Self::from_padded(anchor.as_ref());
                let (x, y) = (self.x() - anchor.x(), self.y() - anchor.y());
                let (sin, cos) = unit.to_radians(angle).sin_cos();
                Self::new(
                    x * cos - y * sin + anchor.x(),
                    x * sin + y * cos + anchor.y(),
                )
            }
        }
    };
}

planar_ops!(Vector2);
planar_ops!(ImmutableVector2);

impl Vector2 {
    /// Angle at `p2` in the triangle `p1, p2, p3`, from the law of cosines.
    #[must_use]
    pub fn angle_between_points(
        p1: impl AsRef<[f64]>,
        p2: impl AsRef<[f64]>,
        p3: impl AsRef<[f64]>,
        unit: AngleUnit,
    ) -> f64 {
        let p1 = Self::from_padded(p1.as_ref());
        let p2 = Self::from_padded(p2.as_ref());
        let p3 = Self::from_padded(p3.as_ref());

        let a = (p3 - p2).magnitude_squared();
        let b = (p2 - p1).magnitude_squared();
        let c = (p3 - p1).magnitude_squared();

        unit.from_radians(((a + b - c) / (2.0 * (a * b).sqrt())).acos())
    }
}
