//! Basic segment types and the input traits the classifier accepts.
//!
//! - `Coord2`: anything that yields an `(x, y)` pair.
//! - `Endpoints`: anything that yields the two endpoints of a segment.
//! - `Edge2`: the owned two-point segment used across the crate.

use nalgebra::{Point2, Vector2};

/// Read-only access to a planar coordinate pair.
///
/// Lets callers hand in whatever point representation their pipeline
/// already uses; everything converts to `Vector2<f64>` at the boundary.
pub trait Coord2 {
    fn xy(&self) -> [f64; 2];
}

impl Coord2 for Vector2<f64> {
    #[inline]
    fn xy(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Coord2 for Point2<f64> {
    #[inline]
    fn xy(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Coord2 for [f64; 2] {
    #[inline]
    fn xy(&self) -> [f64; 2] {
        *self
    }
}

impl Coord2 for (f64, f64) {
    #[inline]
    fn xy(&self) -> [f64; 2] {
        [self.0, self.1]
    }
}

/// Read-only access to the two endpoints of a segment.
pub trait Endpoints {
    fn endpoints(&self) -> [Vector2<f64>; 2];
}

impl Endpoints for Edge2 {
    #[inline]
    fn endpoints(&self) -> [Vector2<f64>; 2] {
        self.points
    }
}

impl<P: Coord2> Endpoints for [P; 2] {
    #[inline]
    fn endpoints(&self) -> [Vector2<f64>; 2] {
        let [ax, ay] = self[0].xy();
        let [bx, by] = self[1].xy();
        [Vector2::new(ax, ay), Vector2::new(bx, by)]
    }
}

/// Oriented segment between two points.
///
/// Invariants:
/// - Endpoint order is meaningful: index 0 is the start, index 1 the end,
///   and `direction` points from start to end.
/// - Zero-length edges are representable; the classifier reports them as
///   degenerate input rather than rejecting them here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge2 {
    points: [Vector2<f64>; 2],
}

impl Edge2 {
    #[inline]
    pub fn new(start: impl Coord2, end: impl Coord2) -> Self {
        let [ax, ay] = start.xy();
        let [bx, by] = end.xy();
        Self {
            points: [Vector2::new(ax, ay), Vector2::new(bx, by)],
        }
    }

    /// Replace both endpoints in place.
    #[inline]
    pub fn set(&mut self, start: impl Coord2, end: impl Coord2) {
        *self = Edge2::new(start, end);
    }

    #[inline]
    pub fn start(&self) -> Vector2<f64> {
        self.points[0]
    }

    #[inline]
    pub fn end(&self) -> Vector2<f64> {
        self.points[1]
    }

    /// Vector from start to end.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.points[1] - self.points[0]
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
}

impl std::ops::Index<usize> for Edge2 {
    type Output = Vector2<f64>;

    #[inline]
    fn index(&self, end: usize) -> &Self::Output {
        &self.points[end]
    }
}
