//! Linear-algebra kernels behind the vector and line operations.
//!
//! [`DirectLinAlg`] is plain loop arithmetic. With the `nalgebra` feature
//! (enabled by default) [`ActiveLinAlg`] is [`NalgebraLinAlg`] instead. Both
//! produce the same results up to floating-point rounding.

/// Relative cutoff below which a singular value is treated as zero when
/// computing a pseudo-inverse.
pub const RANK_CUTOFF: f64 = 1e-12;

/// Numeric kernels used by the vector family and the line intersection code.
pub trait LinAlg {
    /// Sum of component-wise products of two equal-length slices.
    fn dot(a: &[f64], b: &[f64]) -> f64;

    /// Euclidean norm.
    fn norm(a: &[f64]) -> f64;

    /// 3D cross product.
    fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3];

    /// Determinant of a 3x3 matrix given by rows.
    fn determinant3(rows: &[[f64; 3]; 3]) -> f64;

    /// Least-squares solution `x = pinv([col0, col1]) * rhs` of the
    /// (generally overdetermined) system `[col0, col1] * x = rhs`.
    ///
    /// Rank-deficient systems yield the minimum-norm solution.
    fn least_squares2(col0: &[f64], col1: &[f64], rhs: &[f64]) -> [f64; 2];
}

/// Direct-loop implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectLinAlg;

impl LinAlg for DirectLinAlg {
    fn dot(a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    fn norm(a: &[f64]) -> f64 {
        Self::dot(a, a).sqrt()
    }

    fn cross(u: &[f64; 3], v: &[f64; 3]) -> [f64; 3] {
        [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ]
    }

    fn determinant3(m: &[[f64; 3]; 3]) -> f64 {
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    #[allow(clippy::many_single_char_names)]
    fn least_squares2(col0: &[f64], col1: &[f64], rhs: &[f64]) -> [f64; 2] {
        // Normal matrix M = AᵀA = [[a, b], [b, c]] and g = Aᵀ rhs.
        let a = Self::dot(col0, col0);
        let b = Self::dot(col0, col1);
        let c = Self::dot(col1, col1);
        let g = [Self::dot(col0, rhs), Self::dot(col1, rhs)];

        let half_trace = 0.5 * (a + c);
        let det = a * c - b * b;
        let disc = (half_trace * half_trace - det).max(0.0).sqrt();
        let lambda_max = half_trace + disc;
        if lambda_max <= 0.0 {
            return [0.0, 0.0];
        }
        let lambda_min = det / lambda_max;

        // Singular values of A are the square roots of M's eigenvalues.
        if lambda_min > RANK_CUTOFF * RANK_CUTOFF * lambda_max {
            return [(c * g[0] - b * g[1]) / det, (a * g[1] - b * g[0]) / det];
        }

        // Rank one: project onto the dominant right singular vector.
        let v = if b != 0.0 {
            [b, lambda_max - a]
        } else if a >= c {
            [1.0, 0.0]
        } else {
            [0.0, 1.0]
        };
        let v_len = Self::norm(&v);
        let v = [v[0] / v_len, v[1] / v_len];
        let k = Self::dot(&v, &g) / lambda_max;
        [v[0] * k, v[1] * k]
    }
}

/// nalgebra-backed implementation.
#[cfg(feature = "nalgebra")]
#[derive(Debug, Clone, Copy, Default)]
pub struct NalgebraLinAlg;

#[cfg(feature = "nalgebra")]
impl LinAlg for NalgebraLinAlg {
    fn dot(a: &[f64], b: &[f64]) -> f64 {
        nalgebra::DVectorView::from_slice(a, a.len())
            .dot(&nalgebra::DVectorView::from_slice(b, b.len()))
    }

    fn norm(a: &[f64]) -> f64 {
        nalgebra::DVectorView::from_slice(a, a.len()).norm()
    }

    fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
        let c = nalgebra::Vector3::from(*a).cross(&nalgebra::Vector3::from(*b));
        [c.x, c.y, c.z]
    }

    fn determinant3(rows: &[[f64; 3]; 3]) -> f64 {
        nalgebra::Matrix3::from_fn(|r, c| rows[r][c]).determinant()
    }

    fn least_squares2(col0: &[f64], col1: &[f64], rhs: &[f64]) -> [f64; 2] {
        let a = nalgebra::DMatrix::from_fn(col0.len(), 2, |r, c| {
            if c == 0 {
                col0[r]
            } else {
                col1[r]
            }
        });
        let svd = a.svd(true, true);
        let cutoff = svd.singular_values.max() * RANK_CUTOFF;
        match svd.pseudo_inverse(cutoff) {
            Ok(pinv) => {
                let t = pinv * nalgebra::DVector::from_column_slice(rhs);
                [t[0], t[1]]
            }
            Err(reason) => {
                tracing::debug!(reason, "pseudo-inverse failed, using direct solver");
                DirectLinAlg::least_squares2(col0, col1, rhs)
            }
        }
    }
}

/// Backend selected at build time.
#[cfg(feature = "nalgebra")]
pub type ActiveLinAlg = NalgebraLinAlg;

/// Backend selected at build time.
#[cfg(not(feature = "nalgebra"))]
pub type ActiveLinAlg = DirectLinAlg;

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-10;

    fn assert_pair(actual: [f64; 2], expected: [f64; 2]) {
        assert_abs_diff_eq!(actual[0], expected[0], epsilon = TOL);
        assert_abs_diff_eq!(actual[1], expected[1], epsilon = TOL);
    }

    // ── DirectLinAlg ──

    #[test]
    fn direct_cross_of_unit_axes() {
        assert_eq!(
            DirectLinAlg::cross(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]),
            [0.0, 0.0, 1.0]
        );
        assert_eq!(
            DirectLinAlg::cross(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]),
            [-3.0, 6.0, -3.0]
        );
    }

    #[test]
    fn direct_determinant() {
        let m = [[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 1.0]];
        // 2*(3-2) - 0 + 1*(1-3) = 0
        assert_abs_diff_eq!(DirectLinAlg::determinant3(&m), 0.0, epsilon = TOL);
        let id = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_abs_diff_eq!(DirectLinAlg::determinant3(&id), 1.0, epsilon = TOL);
    }

    #[test]
    fn direct_least_squares_exact_system() {
        // Lines (0,0,0)+t(2,2,2) and (0,2,0)+u(2,-2,2) meet at t = u = 0.5.
        let t = DirectLinAlg::least_squares2(&[2.0, 2.0, 2.0], &[-2.0, 2.0, -2.0], &[0.0, 2.0, 0.0]);
        assert_pair(t, [0.5, 0.5]);
    }

    #[test]
    fn direct_least_squares_overdetermined() {
        // x-axis and a line parallel to z through (0,1,*): closest approach at t = 0, u = -1.
        let t = DirectLinAlg::least_squares2(&[1.0, 0.0, 0.0], &[0.0, 0.0, -1.0], &[0.0, 1.0, 1.0]);
        assert_pair(t, [0.0, -1.0]);
    }

    #[test]
    fn direct_least_squares_rank_deficient_is_minimum_norm() {
        // Columns are parallel: A = [[1, -1], [1, -1]], rhs = (2, 2).
        // Minimum-norm solution of t0 - t1 = 2 is (1, -1).
        let t = DirectLinAlg::least_squares2(&[1.0, 1.0], &[-1.0, -1.0], &[2.0, 2.0]);
        assert_pair(t, [1.0, -1.0]);
    }

    #[test]
    fn direct_least_squares_zero_matrix() {
        let t = DirectLinAlg::least_squares2(&[0.0, 0.0], &[0.0, 0.0], &[1.0, 1.0]);
        assert_pair(t, [0.0, 0.0]);
    }

    // ── ActiveLinAlg agrees with DirectLinAlg ──

    #[test]
    fn active_matches_direct() {
        let a = [1.5, -2.0, 0.25];
        let b = [0.5, 4.0, -3.0];
        assert_abs_diff_eq!(ActiveLinAlg::dot(&a, &b), DirectLinAlg::dot(&a, &b), epsilon = TOL);
        assert_abs_diff_eq!(ActiveLinAlg::norm(&a), DirectLinAlg::norm(&a), epsilon = TOL);

        let ca = ActiveLinAlg::cross(&a, &b);
        let cd = DirectLinAlg::cross(&a, &b);
        for i in 0..3 {
            assert_abs_diff_eq!(ca[i], cd[i], epsilon = TOL);
        }

        let m = [a, b, [1.0, 1.0, 2.0]];
        assert_abs_diff_eq!(
            ActiveLinAlg::determinant3(&m),
            DirectLinAlg::determinant3(&m),
            epsilon = TOL
        );
    }

    #[test]
    fn active_dot_and_norm_on_every_vector_length() {
        let a = [3.0, -4.0, 12.0, 0.5];
        let b = [1.0, 2.0, -0.5, 8.0];
        for n in 2..=4 {
            let (a, b) = (&a[..n], &b[..n]);
            assert_abs_diff_eq!(ActiveLinAlg::dot(a, b), DirectLinAlg::dot(a, b), epsilon = TOL);
            assert_abs_diff_eq!(ActiveLinAlg::norm(a), DirectLinAlg::norm(a), epsilon = TOL);
        }
        assert_abs_diff_eq!(ActiveLinAlg::norm(&a[..3]), 13.0, epsilon = TOL);
    }

    #[test]
    fn active_least_squares_matches_direct() {
        let cases: [([f64; 3], [f64; 3], [f64; 3]); 3] = [
            ([2.0, 2.0, 2.0], [-2.0, 2.0, -2.0], [0.0, 2.0, 0.0]),
            ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 1.0]),
            ([1.0, 1.0, 0.0], [-2.0, -2.0, 0.0], [3.0, 1.0, 0.0]),
        ];
        for (c0, c1, rhs) in cases {
            assert_pair(
                ActiveLinAlg::least_squares2(&c0, &c1, &rhs),
                DirectLinAlg::least_squares2(&c0, &c1, &rhs),
            );
        }
    }
}
