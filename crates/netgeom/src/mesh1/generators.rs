//! Node placement strategies.
//!
//! `Uniform` spaces nodes equally. `VariableSize` integrates the node
//! count density `y'(x) = 1/h(x)` with the adaptive solver in `rk45`,
//! rescales the sample path so the rounded count is hit exactly, and puts
//! a node wherever the rescaled count crosses an integer. Local gaps then
//! track the requested spacing `h`.

use super::rk45::{rk45, OdeCfg};
use super::types::{Domain1, MeshError};

/// A node-placement strategy over a fixed domain.
pub trait NodeGenerator {
    fn domain(&self) -> Domain1;
    fn nodes(&self) -> Result<Vec<f64>, MeshError>;
}

/// Equally spaced nodes, `elements + 1` of them.
#[derive(Clone, Copy, Debug)]
pub struct Uniform {
    domain: Domain1,
    elements: usize,
}

impl Uniform {
    pub fn new(domain: Domain1, elements: usize) -> Self {
        Self { domain, elements }
    }
}

impl NodeGenerator for Uniform {
    fn domain(&self) -> Domain1 {
        self.domain
    }

    fn nodes(&self) -> Result<Vec<f64>, MeshError> {
        if self.elements == 0 {
            return Err(MeshError::NoElements);
        }
        let h = self.domain.length() / self.elements as f64;
        let mut nodes = Vec::with_capacity(self.elements + 1);
        for i in 0..self.elements {
            nodes.push(self.domain.left + h * i as f64);
        }
        // The right end is pushed verbatim, not accumulated, so it is
        // exact regardless of how h rounds.
        nodes.push(self.domain.right);
        Ok(nodes)
    }
}

/// Nodes driven by a local spacing function `h(x) > 0`.
///
/// The element count is the rounded integral of `1/h` over the domain,
/// at least 2 and at most `max_elements`. Inner nodes are read off the
/// integrated path at integer crossings by linear interpolation.
#[derive(Clone, Debug)]
pub struct VariableSize<F> {
    domain: Domain1,
    spacing: F,
    max_elements: usize,
}

impl<F: Fn(f64) -> f64> VariableSize<F> {
    pub fn new(domain: Domain1, spacing: F, max_elements: usize) -> Self {
        Self {
            domain,
            spacing,
            max_elements,
        }
    }
}

impl<F: Fn(f64) -> f64> NodeGenerator for VariableSize<F> {
    fn domain(&self) -> Domain1 {
        self.domain
    }

    fn nodes(&self) -> Result<Vec<f64>, MeshError> {
        let d = self.domain;
        let cfg = OdeCfg::for_interval(d.length());
        let mut path = rk45(|x, _| 1.0 / (self.spacing)(x), d.left, d.right, 0.0, cfg)?;
        let total = path.last().map_or(0.0, |&(_, y)| y);
        let needed = (total.round() as usize).max(2);
        if needed > self.max_elements {
            return Err(MeshError::TooManyElements {
                needed,
                cap: self.max_elements,
            });
        }
        // Rescale so the accumulated count ends exactly at `needed`.
        let scale = needed as f64 / total;
        for sample in path.iter_mut() {
            sample.1 *= scale;
        }
        let mut nodes = Vec::with_capacity(needed + 1);
        nodes.push(d.left);
        let mut lo = 0usize;
        for i in 1..needed {
            let target = i as f64;
            // The path is increasing, so each crossing search resumes
            // from the previous bracket.
            let hi = match path[lo + 1..].iter().position(|&(_, y)| y > target) {
                Some(off) => lo + 1 + off,
                None => return Err(MeshError::BrokenSpacing { index: i }),
            };
            lo = hi - 1;
            let (x1, y1) = path[lo];
            let (x2, y2) = path[hi];
            if y2 - y1 == 0.0 {
                return Err(MeshError::BrokenSpacing { index: i });
            }
            nodes.push((x1 * (y2 - target) + x2 * (target - y1)) / (y2 - y1));
        }
        nodes.push(d.right);
        Ok(nodes)
    }
}
