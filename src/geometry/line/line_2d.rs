use super::{ray_contains, segment_contains, LinearEntity};
use crate::math::{ImmutableVector2, Vector};

linear_type!(
    /// Infinite line in the plane through two points.
    Line2D,
    ImmutableVector2
);

linear_type!(
    /// Half-line in the plane starting at `start` and passing through `end`.
    Ray2D,
    ImmutableVector2
);

linear_type!(
    /// Closed segment in the plane between two points.
    Segment2D,
    ImmutableVector2
);

impl LinearEntity for Line2D {
    type Point = ImmutableVector2;
    const TYPE_NAME: &'static str = "Line2D";

    fn start(&self) -> ImmutableVector2 {
        self.start
    }

    fn end(&self) -> ImmutableVector2 {
        self.end
    }

    fn is_point_in_range(&self, _point: &[f64]) -> bool {
        true
    }
}

impl Line2D {
    /// `y` where the line crosses the y axis; `None` for vertical lines.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn y_intercept(&self) -> Option<f64> {
        let d = self.direction();
        if d.x() == 0.0 {
            return None;
        }
        Some(self.start.y() - d.y() / d.x() * self.start.x())
    }

    /// `x` where the line crosses the x axis; `None` for horizontal lines.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn x_intercept(&self) -> Option<f64> {
        let d = self.direction();
        if d.y() == 0.0 {
            return None;
        }
        Some(self.start.x() - d.x() / d.y() * self.start.y())
    }
}

impl LinearEntity for Ray2D {
    type Point = ImmutableVector2;
    const TYPE_NAME: &'static str = "Ray2D";

    fn start(&self) -> ImmutableVector2 {
        self.start
    }

    fn end(&self) -> ImmutableVector2 {
        self.end
    }

    fn is_point_in_range(&self, point: &[f64]) -> bool {
        let p = ImmutableVector2::from_padded(point);
        ray_contains(self.start.as_slice(), self.end.as_slice(), p.as_slice())
    }
}

impl LinearEntity for Segment2D {
    type Point = ImmutableVector2;
    const TYPE_NAME: &'static str = "Segment2D";

    fn start(&self) -> ImmutableVector2 {
        self.start
    }

    fn end(&self) -> ImmutableVector2 {
        self.end
    }

    fn is_point_in_range(&self, point: &[f64]) -> bool {
        let p = ImmutableVector2::from_padded(point);
        segment_contains(self.start.as_slice(), self.end.as_slice(), p.as_slice())
    }

    fn length(&self) -> f64 {
        self.direction().magnitude()
    }
}

impl Segment2D {
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.direction().magnitude_squared()
    }
}
