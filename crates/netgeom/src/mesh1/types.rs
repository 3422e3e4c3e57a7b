//! Mesh containers: the interval domain and the node vector built on it.

use thiserror::Error;

use super::generators::{NodeGenerator, Uniform, VariableSize};
use super::rk45::OdeError;

/// Closed interval `[left, right]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain1 {
    pub left: f64,
    pub right: f64,
}

impl Domain1 {
    #[inline]
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.right - self.left
    }
}

/// Failure modes of mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("mesh needs at least one element")]
    NoElements,
    #[error("grading needs {needed} elements, cap is {cap}")]
    TooManyElements { needed: usize, cap: usize },
    #[error("node density never crosses element {index}; spacing is not positive there")]
    BrokenSpacing { index: usize },
    #[error(transparent)]
    Ode(#[from] OdeError),
}

/// One-dimensional mesh: a domain plus the nodes subdividing it.
///
/// Invariants:
/// - First and last nodes equal the domain ends exactly.
/// - Nodes are strictly increasing.
#[derive(Clone, Debug)]
pub struct Mesh1 {
    domain: Domain1,
    nodes: Vec<f64>,
}

impl Mesh1 {
    /// Equally spaced mesh with `elements` elements.
    pub fn uniform(domain: Domain1, elements: usize) -> Result<Self, MeshError> {
        Self::from_generator(&Uniform::new(domain, elements))
    }

    /// Mesh whose local gap tracks `spacing(x)`, capped at `max_elements`.
    pub fn with_spacing<F>(
        domain: Domain1,
        max_elements: usize,
        spacing: F,
    ) -> Result<Self, MeshError>
    where
        F: Fn(f64) -> f64,
    {
        Self::from_generator(&VariableSize::new(domain, spacing, max_elements))
    }

    /// Build from any node-placement strategy.
    pub fn from_generator<G: NodeGenerator + ?Sized>(generator: &G) -> Result<Self, MeshError> {
        let nodes = generator.nodes()?;
        Ok(Self {
            domain: generator.domain(),
            nodes,
        })
    }

    /// Replace this mesh with the output of `generator`.
    ///
    /// On error the mesh is left untouched.
    pub fn reset<G: NodeGenerator + ?Sized>(&mut self, generator: &G) -> Result<(), MeshError> {
        let nodes = generator.nodes()?;
        self.domain = generator.domain();
        self.nodes = nodes;
        Ok(())
    }

    #[inline]
    pub fn domain(&self) -> Domain1 {
        self.domain
    }

    #[inline]
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Largest gap between adjacent nodes.
    pub fn max_spacing(&self) -> f64 {
        self.nodes
            .windows(2)
            .fold(0.0, |acc, w| f64::max(acc, w[1] - w[0]))
    }
}
