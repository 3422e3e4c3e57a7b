//! Robust classification of how two planar segments meet.
//!
//! Purpose
//! - Answer, for one pair of segments, every question the graph-stitching
//!   pipeline asks: do they meet, where, through which endpoints, and is
//!   the configuration parallel, collinear, or fully identical.
//! - Stay honest near the tolerance: endpoint joins are detected before
//!   the linear solve so that a shared vertex never degrades into a
//!   slightly-off interior crossing.
//!
//! Outline
//! - Endpoint sweep first: any pair of endpoints closer than the length
//!   scaled tolerance is recorded as a join. Two joins mean the segments
//!   are identical and nothing else runs.
//! - Otherwise solve the 2x2 normal system for the line parameters. A
//!   solvable system classifies via the parameter band `[0, 1]` widened
//!   by half the tolerance on each side.
//! - A numerically singular system means parallel lines: measure their
//!   distance, and if collinear, collect the overlap boundary from the
//!   four endpoint projections.
//!
//! Code cross-refs: `solvers::solve_2x2`, `types::{Edge2, Endpoints}`

use std::fmt;

use nalgebra::{Matrix2, Vector2};

use super::solvers::solve_2x2;
use super::types::Endpoints;

/// Default relative tolerance for the classifier.
///
/// Scaled by segment length before use, so the same value works for
/// millimeter and kilometer sized inputs alike.
pub const DEFAULT_TOL: f64 = 20.0 * f64::EPSILON;

/// Which endpoints collapsed when the input pair is degenerate.
///
/// Reported through the callback of [`segment_intersect_with`] when a
/// third endpoint coincidence shows that at least one segment has
/// (numerically) zero length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Degeneracy {
    /// End index on the first segment at the offending coincidence.
    pub s1_end: usize,
    /// End index on the second segment at the offending coincidence.
    pub s2_end: usize,
}

/// Everything the classifier found out about one ordered pair.
///
/// Indexing convention: the first array index selects the segment
/// (`0` for the first argument, `1` for the second), the second selects
/// the endpoint (`0` start, `1` end).
///
/// Invariants:
/// - `count <= 2` and `points[..count]` are the reported meeting points.
/// - `identical` implies `collinear`, and `collinear` implies `parallel`.
/// - `joined_with[e][i].is_some()` implies `end_hit[e][i]`.
/// - `valid == false` means the input was degenerate and no other field
///   should be trusted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// At least one meeting point was found.
    pub intersects: bool,
    /// Number of entries of `points` that are meaningful.
    pub count: usize,
    /// Meeting points, in discovery order.
    pub points: [Vector2<f64>; 2],
    /// Carrier lines are numerically parallel.
    pub parallel: bool,
    /// Segments occupy the same point set.
    pub identical: bool,
    /// `end_hit[e][i]` marks endpoint `i` of segment `e` as lying on the
    /// other segment (within tolerance).
    pub end_hit: [[bool; 2]; 2],
    /// `joined_with[e][i] = Some(k)` records an endpoint-to-endpoint join
    /// with endpoint `k` of the other segment. Endpoint-on-interior
    /// contacts set `end_hit` but leave this `None`.
    pub joined_with: [[Option<usize>; 2]; 2],
    /// Carrier lines coincide (parallel and closer than tolerance).
    pub collinear: bool,
    /// Input pair was usable (no degenerate zero-length segment).
    pub valid: bool,
    /// Distance between the parallel carrier lines; `0.0` off the
    /// parallel path.
    pub distance: f64,
}

impl Default for Intersection {
    fn default() -> Self {
        Self {
            intersects: false,
            count: 0,
            points: [Vector2::zeros(); 2],
            parallel: false,
            identical: false,
            end_hit: [[false; 2]; 2],
            joined_with: [[None; 2]; 2],
            collinear: false,
            valid: true,
            distance: 0.0,
        }
    }
}

impl Intersection {
    /// The meeting points that were actually found.
    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points[..self.count]
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "invalid (degenerate input)");
        }
        if self.identical {
            return write!(f, "identical");
        }
        if !self.intersects {
            return if self.collinear {
                write!(f, "collinear, disjoint")
            } else if self.parallel {
                write!(f, "parallel, distance {:.6}", self.distance)
            } else {
                write!(f, "no intersection")
            };
        }
        write!(f, "{} point(s):", self.count)?;
        for p in self.points() {
            write!(f, " ({}, {})", p.x, p.y)?;
        }
        Ok(())
    }
}

#[inline]
fn in_band(t: f64, tol: f64) -> bool {
    t >= -0.5 * tol && t <= 1.0 + 0.5 * tol
}

/// Classify segments `s1` and `s2`; degenerate input only flips `valid`.
///
/// Shorthand for [`segment_intersect_with`] when no degeneracy reporting
/// is needed.
pub fn segment_intersect<E1, E2>(s1: &E1, s2: &E2, tol: f64) -> Intersection
where
    E1: Endpoints + ?Sized,
    E2: Endpoints + ?Sized,
{
    segment_intersect_with(s1, s2, tol, |_| {})
}

/// Classify segments `s1` and `s2` with full control over degeneracy.
///
/// `tol` is relative; it is scaled by the longer segment length for
/// distance checks and by the squared lengths for the solvability check,
/// so results are stable under uniform rescaling of the scene.
///
/// Reported points follow discovery order. Endpoint joins found in the
/// sweep come first and carry the first segment's coordinates; overlap
/// boundaries found on the collinear path carry the coordinates of
/// whichever endpoint bounds the overlap. At most two points are ever
/// reported.
///
/// A third endpoint coincidence is impossible for two honest segments,
/// so it marks the result `valid = false` and hands the offending end
/// indices to `on_degenerate` before returning early.
pub fn segment_intersect_with<E1, E2, F>(
    s1: &E1,
    s2: &E2,
    tol: f64,
    on_degenerate: F,
) -> Intersection
where
    E1: Endpoints + ?Sized,
    E2: Endpoints + ?Sized,
    F: FnOnce(Degeneracy),
{
    let ends1 = s1.endpoints();
    let ends2 = s2.endpoints();
    let [a1, b1] = ends1;
    let [a2, b2] = ends2;

    let v1 = b1 - a1;
    let v2 = b2 - a2;
    let len1 = v1.norm();
    let len2 = v2.norm();
    // Distance checks scale with the longer segment, solvability with the
    // product of squared lengths (the scale of the normal determinant).
    let tol_dist = tol * len1.max(len2);
    let tol_sys = 2.0 * tol * len1 * len1 * len2 * len2;

    let mut out = Intersection::default();

    // Endpoint coincidence sweep. A third hit cannot happen unless an
    // input segment has collapsed to a point.
    for (i, p1) in ends1.into_iter().enumerate() {
        for (j, p2) in ends2.into_iter().enumerate() {
            if (p1 - p2).norm() <= tol_dist {
                if out.count >= 2 {
                    out.valid = false;
                    on_degenerate(Degeneracy { s1_end: i, s2_end: j });
                    return out;
                }
                out.intersects = true;
                out.points[out.count] = p1;
                out.count += 1;
                out.end_hit[0][i] = true;
                out.end_hit[1][j] = true;
                out.joined_with[0][i] = Some(j);
                out.joined_with[1][j] = Some(i);
            }
        }
    }
    if out.count == 2 {
        out.identical = true;
        out.parallel = true;
        out.collinear = true;
        return out;
    }

    // Normal equations for the two line parameters.
    let a = Matrix2::new(v1.dot(&v1), -v1.dot(&v2), -v1.dot(&v2), v2.dot(&v2));
    let rhs = Vector2::new((a2 - a1).dot(&v1), (a1 - a2).dot(&v2));

    if let Some(t) = solve_2x2(a, rhs, tol_sys) {
        let (t1, t2) = (t.x, t.y);
        if !in_band(t1, tol) || !in_band(t2, tol) {
            // Lines cross outside at least one segment. Keep whatever the
            // endpoint sweep already found.
            return out;
        }
        out.intersects = true;
        // Near-endpoint contacts. An already-set flag means the sweep saw
        // this same contact as an endpoint join; do not report it twice.
        for (e, i, d) in [(0, 0, t1), (0, 1, t1 - 1.0), (1, 0, t2), (1, 1, t2 - 1.0)] {
            if d.abs() <= tol {
                if out.end_hit[e][i] {
                    return out;
                }
                out.end_hit[e][i] = true;
            }
        }
        out.points[out.count] = a1 + v1 * t1;
        out.count += 1;
        return out;
    }

    // Singular system: parallel carrier lines. Distance is measured from
    // the projection of the offset onto the first direction.
    out.parallel = true;
    let factor = v1.dot(&(a2 - a1)) / (len1 * len1);
    out.distance = ((a1 - a2) + v1 * factor).norm();
    if out.distance > tol_dist {
        return out;
    }
    out.collinear = true;

    // Collinear overlap: each endpoint inside the other segment bounds
    // the shared interval. Endpoints already joined in the sweep are
    // skipped so a touching pair reports one point, not two.
    let t_on_s1 = |p: Vector2<f64>| (p - a1).dot(&v1) / (len1 * len1);
    let t_on_s2 = |p: Vector2<f64>| (p - a2).dot(&v2) / (len2 * len2);
    let candidates = [
        (1, 0, a2, t_on_s1(a2)),
        (1, 1, b2, t_on_s1(b2)),
        (0, 0, a1, t_on_s2(a1)),
        (0, 1, b1, t_on_s2(b1)),
    ];
    for (e, i, p, t) in candidates {
        if out.end_hit[e][i] || !in_band(t, tol) {
            continue;
        }
        out.intersects = true;
        out.points[out.count] = p;
        out.count += 1;
        out.end_hit[e][i] = true;
        if out.count == 2 {
            return out;
        }
    }
    out
}

/// Classify every unordered pair from `edges`, in lexicographic `(i, j)`
/// order with `i < j`.
///
/// Lazy; nothing is computed until the iterator is driven. Degenerate
/// pairs come through with `valid == false` rather than being filtered,
/// so callers can count or report them.
pub fn pairwise_intersections<'a, E: Endpoints>(
    edges: &'a [E],
    tol: f64,
) -> impl Iterator<Item = (usize, usize, Intersection)> + 'a {
    edges.iter().enumerate().flat_map(move |(i, e1)| {
        edges[i + 1..]
            .iter()
            .enumerate()
            .map(move |(k, e2)| (i, i + 1 + k, segment_intersect(e1, e2, tol)))
    })
}
