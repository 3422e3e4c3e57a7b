//! Adaptive scalar ODE integration (Runge-Kutta-Fehlberg 4/5).
//!
//! Purpose
//! - Integrate `y' = f(t, y)` over `[t0, tf]` with an embedded pair of
//!   4th and 5th order solutions; their difference drives step control.
//!   The mesh grader integrates node-count density with this.
//!
//! Step control
//! - The global budget `tol` is spread per unit time; a step of length
//!   `h` is accepted when the embedded estimate stays within `h` times
//!   that rate, and the 5th order value is the one propagated.
//! - Rejected steps halve. Steps 64x under budget double, capped at
//!   `h_max` and clipped to land exactly on `tf`.

use thiserror::Error;

/// Step-control configuration.
#[derive(Clone, Copy, Debug)]
pub struct OdeCfg {
    pub h_init: f64,
    pub h_max: f64,
    /// Error budget over the whole interval.
    pub tol: f64,
    /// Iteration cap counting accepted and rejected steps alike.
    pub max_steps: usize,
}

impl OdeCfg {
    /// Step bounds scaled to an interval of length `len`.
    pub fn for_interval(len: f64) -> Self {
        let h_max = len / 4.0;
        Self {
            h_init: h_max / 100.0,
            h_max,
            tol: 1e-2,
            max_steps: 20_000,
        }
    }
}

impl Default for OdeCfg {
    fn default() -> Self {
        Self::for_interval(1.0)
    }
}

/// Integration failure.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum OdeError {
    #[error("step limit {0} exhausted before reaching the interval end")]
    StepLimit(usize),
    #[error("step size underflowed at t = {0}")]
    StepUnderflow(f64),
}

/// Integrate `y' = f(t, y)` from `(t0, y0)` to `tf`.
///
/// Returns the accepted sample path as `(t, y)` pairs, starting at
/// `(t0, y0)` and ending exactly at `t = tf`.
pub fn rk45<F>(f: F, t0: f64, tf: f64, y0: f64, cfg: OdeCfg) -> Result<Vec<(f64, f64)>, OdeError>
where
    F: Fn(f64, f64) -> f64,
{
    let budget_rate = cfg.tol / (tf - t0);
    let mut h = cfg.h_init.min(cfg.h_max);
    let mut t = t0;
    let mut y = y0;
    let mut path = vec![(t0, y0)];
    let mut steps = 0usize;
    while t < tf {
        if steps >= cfg.max_steps {
            return Err(OdeError::StepLimit(cfg.max_steps));
        }
        steps += 1;
        let h_step = h.min(tf - t);
        if t + h_step == t {
            return Err(OdeError::StepUnderflow(t));
        }
        let (y4, y5) = fehlberg_step(&f, t, y, h_step);
        let err = (y5 - y4).abs();
        if err <= h_step * budget_rate {
            // Land exactly on tf once the clipped step reaches it.
            t = if h_step >= tf - t { tf } else { t + h_step };
            y = y5;
            path.push((t, y));
            if err <= h_step * budget_rate / 64.0 {
                h = (2.0 * h_step).min(cfg.h_max);
            }
        } else {
            h = 0.5 * h_step;
        }
    }
    Ok(path)
}

/// One embedded step: the 4th and 5th order solutions at `t + h`.
fn fehlberg_step<F: Fn(f64, f64) -> f64>(f: &F, t: f64, y: f64, h: f64) -> (f64, f64) {
    let k1 = h * f(t, y);
    let k2 = h * f(t + h / 4.0, y + k1 / 4.0);
    let k3 = h * f(t + 3.0 * h / 8.0, y + 3.0 / 32.0 * k1 + 9.0 / 32.0 * k2);
    let k4 = h * f(
        t + 12.0 * h / 13.0,
        y + 1932.0 / 2197.0 * k1 - 7200.0 / 2197.0 * k2 + 7296.0 / 2197.0 * k3,
    );
    let k5 = h * f(
        t + h,
        y + 439.0 / 216.0 * k1 - 8.0 * k2 + 3680.0 / 513.0 * k3 - 845.0 / 4104.0 * k4,
    );
    let k6 = h * f(
        t + h / 2.0,
        y - 8.0 / 27.0 * k1 + 2.0 * k2 - 3544.0 / 2565.0 * k3 + 1859.0 / 4104.0 * k4
            - 11.0 / 40.0 * k5,
    );
    let y4 = y + 25.0 / 216.0 * k1 + 1408.0 / 2565.0 * k3 + 2197.0 / 4104.0 * k4 - k5 / 5.0;
    let y5 = y + 16.0 / 135.0 * k1 + 6656.0 / 12825.0 * k3 + 28561.0 / 56430.0 * k4
        - 9.0 / 50.0 * k5
        + 2.0 / 55.0 * k6;
    (y4, y5)
}
