//! Geometry kernels for 1D/2D network preprocessing.
//!
//! `seg2` classifies how two planar segments meet (the workhorse when
//! stitching a segment soup into a graph), `mesh1` places nodes along the
//! edges once the graph exists, and `bc` carries the boundary-condition
//! labels that ride on vertices through the pipeline.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer clarity and better design over compatibility; breaking changes
//!   are fine when they improve quality.

pub mod bc;
pub mod mesh1;
pub mod seg2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so call sites read like the math.
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
pub use seg2::{segment_intersect, Edge2, Intersection, DEFAULT_TOL};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bc::{BcKind, BoundaryCondition};
    pub use crate::mesh1::{Domain1, Mesh1, NodeGenerator, Uniform, VariableSize};
    pub use crate::seg2::rand::{draw_edge, draw_edge_pair, EdgeCfg, ReplayToken};
    pub use crate::seg2::{
        pairwise_intersections, segment_intersect, segment_intersect_with, Degeneracy, Edge2,
        Endpoints, Intersection, DEFAULT_TOL,
    };
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
