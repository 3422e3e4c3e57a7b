//! Small linear solvers backing the segment classifier.
//!
//! - `solve_2x2`: Cramer solve of `A x = b` with an explicit determinant
//!   tolerance, so callers decide what "numerically singular" means.

use nalgebra::{Matrix2, Vector2};

/// Solve `A x = b` by Cramer's rule; `None` when `|det A| <= tol`.
///
/// For the classifier the near-singular case is not an error: it is the
/// signal that two segments are (numerically) parallel, so the caller
/// branches on it rather than unwrapping.
#[inline]
pub fn solve_2x2(a: Matrix2<f64>, b: Vector2<f64>, tol: f64) -> Option<Vector2<f64>> {
    let det = a[(0, 0)] * a[(1, 1)] - a[(1, 0)] * a[(0, 1)];
    if det.abs() <= tol {
        return None;
    }
    let inv = 1.0 / det;
    Some(Vector2::new(
        inv * (a[(1, 1)] * b.x - a[(0, 1)] * b.y),
        inv * (a[(0, 0)] * b.y - a[(1, 0)] * b.x),
    ))
}
