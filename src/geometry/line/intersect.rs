//! Intersection of the infinite lines through two pairs of points.
//!
//! Range checks against rays and segments happen in the caller.

use crate::math::backend::{ActiveLinAlg, LinAlg};
use crate::math::{FuzzyEq, Vector, EPSILON};

/// Slope/intercept intersection in the plane.
///
/// Returns `None` for parallel lines, including two vertical ones.
#[allow(clippy::float_cmp)]
pub(super) fn planar<P: Vector>(s1: P, e1: P, s2: P, e2: P) -> Option<P> {
    let (dx1, dx2) = (e1[0] - s1[0], e2[0] - s2[0]);
    let m1 = (e1[1] - s1[1]) / dx1;
    let m2 = (e2[1] - s2[1]) / dx2;

    let (x, y) = match (dx1 == 0.0, dx2 == 0.0) {
        (true, true) => return None,
        (true, false) => (s1[0], m2 * (s1[0] - s2[0]) + s2[1]),
        (false, true) => (s2[0], m1 * (s2[0] - s1[0]) + s1[1]),
        (false, false) => {
            if m1 == m2 {
                return None;
            }
            let x = (m1 * s1[0] - m2 * s2[0] + s2[1] - s1[1]) / (m1 - m2);
            (x, m1 * (x - s1[0]) + s1[1])
        }
    };
    Some(P::from_padded(&[x, y]))
}

/// Closest approach of `s1 + t0 * (e1 - s1)` and `s2 + t1 * (e2 - s2)`
/// solved in the least-squares sense.
///
/// The lines intersect only if both parametrizations land on the same point;
/// otherwise they are skew (or parallel and distinct).
pub(super) fn general<P: Vector>(s1: P, e1: P, s2: P, e2: P) -> Option<P> {
    let (d1, d2) = (e1 - s1, e2 - s2);
    let [t0, t1] = ActiveLinAlg::least_squares2(
        d1.as_slice(),
        (-d2).as_slice(),
        (s2 - s1).as_slice(),
    );
    let p1 = s1 + d1 * t0;
    let p2 = s2 + d2 * t1;
    if p1.fuzzy_eq(&p2, EPSILON) {
        Some(p1)
    } else {
        tracing::trace!(%p1, %p2, "lines do not meet");
        None
    }
}

/// Replaces the candidate's coordinate on every axis along which one of the
/// entities `[start, end]` is constant with that constant, so that rounding in
/// the solve cannot push it outside an exact range check.
#[allow(clippy::float_cmp)]
pub(super) fn snap_to_flat_axes<P: Vector>(candidate: P, first: [P; 2], second: [P; 2]) -> P {
    let ([s1, e1], [s2, e2]) = (first, second);
    P::from_fn(|i| {
        if s1[i] == e1[i] {
            s1[i]
        } else if s2[i] == e2[i] {
            s2[i]
        } else {
            candidate[i]
        }
    })
}
