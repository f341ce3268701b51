use super::{ray_contains, segment_contains, Line2D, LinearEntity, Ray2D, Segment2D};
use crate::math::{ImmutableVector3, Vector};

linear_type!(
    /// Infinite line in space through two points.
    Line3D,
    ImmutableVector3
);

linear_type!(
    /// Half-line in space starting at `start` and passing through `end`.
    Ray3D,
    ImmutableVector3
);

linear_type!(
    /// Closed segment in space between two points.
    Segment3D,
    ImmutableVector3
);

impl LinearEntity for Line3D {
    type Point = ImmutableVector3;
    const TYPE_NAME: &'static str = "Line3D";

    fn start(&self) -> ImmutableVector3 {
        self.start
    }

    fn end(&self) -> ImmutableVector3 {
        self.end
    }

    fn is_point_in_range(&self, _point: &[f64]) -> bool {
        true
    }
}

impl LinearEntity for Ray3D {
    type Point = ImmutableVector3;
    const TYPE_NAME: &'static str = "Ray3D";

    fn start(&self) -> ImmutableVector3 {
        self.start
    }

    fn end(&self) -> ImmutableVector3 {
        self.end
    }

    fn is_point_in_range(&self, point: &[f64]) -> bool {
        let p = ImmutableVector3::from_padded(point);
        ray_contains(self.start.as_slice(), self.end.as_slice(), p.as_slice())
    }
}

impl LinearEntity for Segment3D {
    type Point = ImmutableVector3;
    const TYPE_NAME: &'static str = "Segment3D";

    fn start(&self) -> ImmutableVector3 {
        self.start
    }

    fn end(&self) -> ImmutableVector3 {
        self.end
    }

    fn is_point_in_range(&self, point: &[f64]) -> bool {
        let p = ImmutableVector3::from_padded(point);
        segment_contains(self.start.as_slice(), self.end.as_slice(), p.as_slice())
    }

    fn length(&self) -> f64 {
        self.direction().magnitude()
    }
}

impl Segment3D {
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.direction().magnitude_squared()
    }
}

/// Places planar entities in the `z = 0` plane.
macro_rules! lift_to_3d {
    ($($from:ident => $to:ident),+ $(,)?) => {
        $(
            impl From<$from> for $to {
                fn from(e: $from) -> Self {
                    Self::new(e.start(), e.end())
                }
            }
        )+
    };
}

lift_to_3d!(Line2D => Line3D, Ray2D => Ray3D, Segment2D => Segment3D);

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geometry::line::Linear3D;
    use crate::math::{FuzzyEq, EPSILON};

    const TOL: f64 = 1e-12;

    fn p(x: f64, y: f64, z: f64) -> ImmutableVector3 {
        ImmutableVector3::new(x, y, z)
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    // ── intersection ──

    #[test]
    fn skew_lines_do_not_meet() {
        init_tracing();
        let a = Line3D::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = Line3D::new([0.0, 1.0, 1.0], [0.0, 1.0, 2.0]);
        assert!(a.is_skew_with(&b, EPSILON));
        assert!(a.point_of_intersection(&b).is_none());
    }

    #[test]
    fn crossing_lines_meet() {
        init_tracing();
        let a = Line3D::new([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
        let b = Line3D::new([2.0, 0.0, 0.0], [0.0, 2.0, 2.0]);
        assert!(!a.is_skew_with(&b, EPSILON));
        let hit = a.point_of_intersection(&b).unwrap();
        assert!(hit.fuzzy_eq(&p(1.0, 1.0, 1.0), EPSILON), "hit={hit}");
    }

    #[test]
    fn intersection_beyond_segment_end_is_rejected() {
        let a = Segment3D::new([0.0, 0.0, 0.0], [0.5, 0.5, 0.5]);
        let b = Line3D::new([2.0, 0.0, 0.0], [0.0, 2.0, 2.0]);
        assert!(a.point_of_intersection(&b).is_none());

        let ray = Ray3D::new([0.0, 0.0, 0.0], [0.5, 0.5, 0.5]);
        let hit = ray.point_of_intersection(&b).unwrap();
        assert!(hit.fuzzy_eq(&p(1.0, 1.0, 1.0), EPSILON), "hit={hit}");
    }

    #[test]
    fn lifted_planar_entities_intersect_in_space() {
        let flat = Segment3D::from(Segment2D::new([0.0, 0.0], [2.0, 2.0]));
        let other = Segment3D::from(Segment2D::new([0.0, 2.0], [2.0, 0.0]));
        assert_eq!(flat.end(), p(2.0, 2.0, 0.0));
        let hit = flat.point_of_intersection(&other).unwrap();
        assert!(hit.fuzzy_eq(&p(1.0, 1.0, 0.0), EPSILON), "hit={hit}");
    }

    #[test]
    fn slanted_segment_meets_every_flat_segment() {
        let slanted = Segment3D::new([0.0, 0.0, 0.0], [7.0, 0.0, 6.0]);
        for k in 1..50 {
            let c = f64::from(k) * 0.1;
            let flat = Segment3D::new([0.0, 0.0, c], [7.0, 0.0, c]);
            for hit in [
                slanted.point_of_intersection(&flat).unwrap(),
                flat.point_of_intersection(&slanted).unwrap(),
            ] {
                assert_eq!(hit.z(), c, "c={c} hit={hit}");
                assert_eq!(hit.y(), 0.0, "c={c} hit={hit}");
                assert!(hit.fuzzy_eq(&p(c * 7.0 / 6.0, 0.0, c), EPSILON), "c={c} hit={hit}");
            }
        }
    }

    // ── range ──

    #[test]
    fn segment_range_includes_both_endpoints() {
        let s = Segment3D::new([0.0, 0.0, 0.0], [1.0, 2.0, 3.0]);
        assert!(s.is_point_in_range(&[0.0, 0.0, 0.0]));
        assert!(s.is_point_in_range(&[1.0, 2.0, 3.0]));
        assert!(!s.is_point_in_range(&[1.0, 2.0, 3.5]));
    }

    #[test]
    fn ray_range_checks_every_axis() {
        let r = Ray3D::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        assert!(r.is_point_in_range(&[2.0, 2.0, 2.0]));
        assert!(!r.is_point_in_range(&[2.0, 2.0, -2.0]));
    }

    // ── measures ──

    #[test]
    fn segment_length() {
        let s = Segment3D::new([1.0, 2.0, 3.0], [3.0, 5.0, 9.0]);
        assert_abs_diff_eq!(s.length(), 7.0, epsilon = TOL);
        assert_abs_diff_eq!(s.length_squared(), 49.0, epsilon = TOL);
    }

    #[test]
    fn distance_between_lines() {
        let a = Line3D::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = Line3D::new([0.0, 1.0, 1.0], [0.0, 1.0, 2.0]);
        assert_abs_diff_eq!(a.distance_to_line(&b), 1.0, epsilon = TOL);

        let c = Line3D::new([0.0, 0.0, 5.0], [0.0, 1.0, 5.0]);
        assert_abs_diff_eq!(a.distance_to_line(&c), 5.0, epsilon = TOL);
    }

    #[test]
    fn perpendicular_distance_to_point() {
        let l = Line3D::new([0.0, 0.0, 0.0], [0.0, 0.0, 2.0]);
        assert_abs_diff_eq!(l.perpendicular_distance(&[3.0, 4.0, 10.0]), 5.0, epsilon = TOL);
    }

    #[test]
    fn contains_point_off_axis() {
        let l = Line3D::new([1.0, 1.0, 1.0], [2.0, 3.0, 4.0]);
        assert!(l.contains_point(&[3.0, 5.0, 7.0], EPSILON));
        assert!(!l.contains_point(&[3.0, 5.0, 7.5], EPSILON));
    }

    #[test]
    fn parallel_and_orthogonal() {
        let a = Line3D::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let b = Ray3D::new([4.0, 4.0, 4.0], [4.0, 4.0, 9.0]);
        assert!(a.is_parallel_with(&b, EPSILON));
        assert!(a.is_orthogonal(EPSILON));
        assert!(!Line3D::new([0.0, 0.0, 0.0], [1.0, 0.0, 1.0]).is_orthogonal(EPSILON));
    }

    #[test]
    fn display() {
        let l = Ray3D::new([0.0, 1.0, 2.0], [3.0, 4.5, 5.0]);
        assert_eq!(l.to_string(), "Ray3D(<0, 1, 2> -> <3, 4.5, 5>)");
    }
}
