//! One-dimensional meshes over an interval.
//!
//! Purpose
//! - Subdivide a network edge into elements for downstream assembly,
//!   either uniformly or following a user-supplied spacing function.
//!
//! Model
//! - A mesh is a domain `[left, right]` plus a strictly increasing node
//!   vector whose ends equal the domain ends exactly. Generators are
//!   strategies that produce the node vector; `Mesh1` stores the result
//!   and answers simple queries like the largest gap.
//! - Graded meshes come from integrating the node-count density `1/h(x)`
//!   with an embedded Runge-Kutta-Fehlberg pair and sampling integer
//!   crossings of the (rescaled) count.

mod generators;
mod rk45;
mod types;

pub use generators::{NodeGenerator, Uniform, VariableSize};
pub use rk45::{rk45, OdeCfg, OdeError};
pub use types::{Domain1, Mesh1, MeshError};
