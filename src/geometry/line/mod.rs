//! Lines, rays and segments in 2D and 3D.
//!
//! All six types share [`LinearEntity`]; they differ only in which points
//! they consider "in range" and in their length. 2D- and 3D-only queries
//! live on the blanket extension traits [`Linear2D`] and [`Linear3D`].

use std::fmt;

use crate::error::{Result, VectorError};
use crate::math::backend::{ActiveLinAlg, LinAlg};
use crate::math::fuzzy::{fuzzy_eq_numbers, FuzzyEq};
use crate::math::{rectify_all, ImmutableVector2, ImmutableVector3, Vector};

/// Behavior shared by lines, rays and segments.
pub trait LinearEntity: fmt::Debug {
    /// Endpoint type, which fixes the dimension of the entity.
    type Point: Vector;

    /// Type name used in error messages.
    const TYPE_NAME: &'static str;

    fn start(&self) -> Self::Point;

    fn end(&self) -> Self::Point;

    /// Returns `true` if `point` lies within the extent of this entity.
    ///
    /// Only the extent is checked, not whether the point is on the line.
    fn is_point_in_range(&self, point: &[f64]) -> bool;

    /// Distance between the endpoints for segments, `+∞` otherwise.
    fn length(&self) -> f64 {
        f64::INFINITY
    }

    /// Endpoint by index: 0 is `start`, 1 is `end`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] for any other index.
    fn endpoint(&self, index: usize) -> Result<Self::Point> {
        match index {
            0 => Ok(self.start()),
            1 => Ok(self.end()),
            _ => Err(VectorError::IndexOutOfRange {
                type_name: Self::TYPE_NAME,
                index,
                len: 2,
            }
            .into()),
        }
    }

    /// `end - start`.
    fn direction(&self) -> Self::Point {
        self.end() - self.start()
    }

    /// Returns `true` if the direction is aligned with a coordinate axis.
    fn is_orthogonal(&self, epsilon: f64) -> bool {
        self.direction().is_orthogonal(epsilon)
    }

    /// Compares normalized directions after up-casting both to the larger
    /// dimension. Opposite directions are not parallel.
    fn is_parallel_with<L>(&self, other: &L, epsilon: f64) -> bool
    where
        L: LinearEntity + ?Sized,
    {
        let (d1, d2) = (self.direction(), other.direction());
        match rectify_all(&[d1.as_slice(), d2.as_slice()]).as_deref() {
            Ok([a, b]) => a.normalize().fuzzy_eq(&b.normalize(), epsilon),
            _ => false,
        }
    }

    /// Returns `true` if `point = start + t * (end - start)` for one `t`
    /// shared by every axis.
    ///
    /// An axis along which the entity does not move divides by zero, so
    /// axis-aligned entities only contain points for which every such
    /// quotient is finite and equal.
    fn contains_point(&self, point: &[f64], epsilon: f64) -> bool {
        let b = Self::Point::from_padded(point) - self.start();
        let d = self.direction();
        let t0 = b[0] / d[0];
        b.as_slice()
            .iter()
            .zip(d.as_slice())
            .all(|(c1, c2)| fuzzy_eq_numbers(c1 / c2, t0, epsilon))
    }

    /// Distance from `point` to the infinite line through the endpoints.
    fn perpendicular_distance(&self, point: &[f64]) -> f64 {
        let n = self.direction().normalize();
        let b = self.start() - Self::Point::from_padded(point);
        (b - n * b.dot(&n)).magnitude()
    }

    /// Intersection point of `self` and `other`, if it lies within both
    /// extents.
    ///
    /// 2D entities are solved with slope/intercept algebra. Higher
    /// dimensions use the least-squares closest approach of the two lines and
    /// report `None` when that approach leaves them apart (skew lines).
    /// On an axis along which either entity does not move, the candidate
    /// takes that entity's constant coordinate before the range checks.
    fn point_of_intersection<L>(&self, other: &L) -> Option<Self::Point>
    where
        L: LinearEntity<Point = Self::Point> + ?Sized,
    {
        let (s1, e1, s2, e2) = (self.start(), self.end(), other.start(), other.end());
        let candidate = if <Self::Point as Vector>::DIM == 2 {
            intersect::planar(s1, e1, s2, e2)
        } else {
            intersect::general(s1, e1, s2, e2)
        }?;
        let candidate = intersect::snap_to_flat_axes(candidate, [s1, e1], [s2, e2]);

        if self.is_point_in_range(candidate.as_slice())
            && other.is_point_in_range(candidate.as_slice())
        {
            Some(candidate)
        } else {
            tracing::trace!(%candidate, "intersection outside of entity range");
            None
        }
    }

    /// 3D: `true` unless the four endpoints are coplanar, i.e. the
    /// parallelepiped spanned by `start1 - end1`, `end1 - start2` and
    /// `start2 - end2` has a volume within `epsilon` of zero.
    ///
    /// When both entities are 2D this is the negation of
    /// [`is_parallel_with`](LinearEntity::is_parallel_with).
    fn is_skew_with<L>(&self, other: &L, epsilon: f64) -> bool
    where
        L: LinearEntity + ?Sized,
    {
        if <Self::Point as Vector>::DIM == 2 && <L::Point as Vector>::DIM == 2 {
            return !self.is_parallel_with(other, epsilon);
        }
        let s1 = ImmutableVector3::from_padded(self.start().as_slice());
        let e1 = ImmutableVector3::from_padded(self.end().as_slice());
        let s2 = ImmutableVector3::from_padded(other.start().as_slice());
        let e2 = ImmutableVector3::from_padded(other.end().as_slice());
        let rows = [
            (s1 - e1).to_array(),
            (e1 - s2).to_array(),
            (s2 - e2).to_array(),
        ];
        let volume = ActiveLinAlg::determinant3(&rows).abs();
        !fuzzy_eq_numbers(volume, 0.0, epsilon)
    }

    /// Parametrization `t -> start + t * normalize(end - start)`.
    fn as_vector_function(&self) -> impl Fn(f64) -> Self::Point {
        let a = self.start();
        let d = self.direction().normalize();
        move |t| a + d * t
    }
}

/// Queries that only make sense in the plane.
pub trait Linear2D: LinearEntity<Point = ImmutableVector2> {
    /// `dy / dx`; infinite for vertical entities.
    fn slope(&self) -> f64 {
        let d = self.direction();
        d.y() / d.x()
    }

    fn is_vertical(&self, epsilon: f64) -> bool {
        fuzzy_eq_numbers(self.start().x(), self.end().x(), epsilon)
    }

    fn is_horizontal(&self, epsilon: f64) -> bool {
        fuzzy_eq_numbers(self.start().y(), self.end().y(), epsilon)
    }

    /// Returns `true` if `point` is to the left of the directed line
    /// `start -> end` in screen coordinates (y axis pointing down).
    fn is_to_the_left(&self, point: &[f64]) -> bool {
        let p = ImmutableVector2::from_padded(point);
        let (s, e) = (self.start(), self.end());
        (e.x() - s.x()) * (p.y() - e.y()) - (e.y() - s.y()) * (p.x() - e.x()) < 0.0
    }
}

impl<T> Linear2D for T where T: LinearEntity<Point = ImmutableVector2> + ?Sized {}

/// Queries that only make sense in space.
pub trait Linear3D: LinearEntity<Point = ImmutableVector3> {
    /// Distance between the infinite lines through `self` and `other`,
    /// `|n · (c - a)|` with `n` the unit normal to both directions.
    ///
    /// Parallel lines have no unique normal and yield NaN.
    fn distance_to_line<L>(&self, other: &L) -> f64
    where
        L: LinearEntity + ?Sized,
    {
        let a = self.start();
        let b = self.direction();
        let c = ImmutableVector3::from_padded(other.start().as_slice());
        let d = ImmutableVector3::from_padded(other.direction().as_slice());
        let n = b.cross(&d).normalize();
        n.dot(&(c - a)).abs()
    }
}

impl<T> Linear3D for T where T: LinearEntity<Point = ImmutableVector3> + ?Sized {}

/// On every axis the point lies on the same side of `start` as `end`.
/// A point at `start` is in range.
fn ray_contains(start: &[f64], end: &[f64], point: &[f64]) -> bool {
    start
        .iter()
        .zip(end)
        .zip(point)
        .all(|((s, e), p)| (s <= p) == (s <= e))
}

/// On every axis the point lies between `start` and `end`, inclusive.
fn segment_contains(start: &[f64], end: &[f64], point: &[f64]) -> bool {
    start
        .iter()
        .zip(end)
        .zip(point)
        .all(|((s, e), p)| (s <= p) == (p <= e))
}

/// Struct, constructor, formatting and equality of one linear entity type.
macro_rules! linear_type {
    ($(#[$meta:meta])* $name:ident, $point:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            start: $point,
            end: $point,
        }

        impl $name {
            /// Creates the entity from two endpoints, truncated or
            /// zero-padded to this dimension.
            #[must_use]
            pub fn new(start: impl AsRef<[f64]>, end: impl AsRef<[f64]>) -> Self {
                Self {
                    start: <$point as $crate::math::Vector>::from_padded(start.as_ref()),
                    end: <$point as $crate::math::Vector>::from_padded(end.as_ref()),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({} -> {})", stringify!($name), self.start, self.end)
            }
        }

        impl $crate::math::FuzzyEq for $name {
            fn fuzzy_eq(&self, other: &Self, epsilon: f64) -> bool {
                $crate::math::FuzzyEq::fuzzy_eq(&self.start, &other.start, epsilon)
                    && $crate::math::FuzzyEq::fuzzy_eq(&self.end, &other.end, epsilon)
            }
        }
    };
}

mod intersect;
mod line_2d;
mod line_3d;

pub use line_2d::{Line2D, Ray2D, Segment2D};
pub use line_3d::{Line3D, Ray3D, Segment3D};
