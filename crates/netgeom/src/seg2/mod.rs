//! Segment-pair geometry in the plane.
//!
//! Purpose
//! - Classify how two segments meet with one call and one record:
//!   crossing point, endpoint joins, parallel or collinear layout, and
//!   degenerate input, all under a single length-relative tolerance.
//! - Feed the network-stitching pipeline, which needs to tell an endpoint
//!   join (two edges meeting at a vertex) apart from a mid-segment
//!   crossing before it can build adjacency.
//!
//! Why one record
//! - Callers almost always need several of these answers at once, and the
//!   answers share intermediate results. One pass fills the whole record
//!   for the price of the most expensive question.
//!
//! Code cross-refs: `intersect::{segment_intersect, Intersection}`,
//! `types::{Edge2, Endpoints}`, `solvers::solve_2x2`

mod intersect;
pub mod rand;
mod solvers;
mod types;

pub use intersect::{
    pairwise_intersections, segment_intersect, segment_intersect_with, Degeneracy, Intersection,
    DEFAULT_TOL,
};
pub use solvers::solve_2x2;
pub use types::{Coord2, Edge2, Endpoints};
