//! Discrete curvature along a closed contour.
//!
//! Curvature at point `i` uses the backward difference `d1 = p[i] - p[i-1]`
//! and forward difference `d2 = p[i+1] - p[i]`. With the central first
//! derivative `d = (d1 + d2) / 2` and second derivative `dd = d2 - d1`:
//!
//! ```text
//! kappa = (d.x * dd.y - d.y * dd.x) / |d|^3
//! ```
//!
//! The sign follows traversal orientation: a counterclockwise convex contour
//! in a y-up frame is positive everywhere. When the denominator falls to the
//! estimator's threshold the value is reported as exactly zero.

use crate::contour::Contour;

pub mod zero_crossing;

pub use zero_crossing::{detect_zero_crossings, ZeroCrossingMode, ZeroCrossingSet};

/// Default denominator threshold for degenerate neighborhoods.
pub const DEFAULT_CURVATURE_EPS: f64 = 1e-6;

/// Curvature values aligned one-to-one with contour points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurvatureSequence {
    values: Vec<f64>,
}

impl CurvatureSequence {
    /// Wraps precomputed curvature values.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Returns the values in contour order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `idx`, if present.
    pub fn get(&self, idx: usize) -> Option<f64> {
        self.values.get(idx).copied()
    }

    /// Consumes the sequence and returns its values.
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Detects sign changes in this sequence.
    pub fn zero_crossings(&self, mode: ZeroCrossingMode) -> ZeroCrossingSet {
        detect_zero_crossings(&self.values, mode)
    }
}

/// Three-point curvature estimator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvatureEstimator {
    eps: f64,
}

impl Default for CurvatureEstimator {
    fn default() -> Self {
        Self {
            eps: DEFAULT_CURVATURE_EPS,
        }
    }
}

impl CurvatureEstimator {
    /// Creates an estimator with a custom denominator threshold.
    ///
    /// Non-finite or negative thresholds are clamped to zero.
    pub fn new(eps: f64) -> Self {
        let eps = if eps.is_finite() { eps.max(0.0) } else { 0.0 };
        Self { eps }
    }

    /// Returns the denominator threshold.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Computes the curvature at every point of `contour`.
    ///
    /// Contours with fewer than three points have no well-defined
    /// neighborhood and yield all zeros.
    pub fn estimate(&self, contour: &Contour) -> CurvatureSequence {
        let n = contour.len();
        if n < 3 {
            return CurvatureSequence::new(vec![0.0; n]);
        }
        let values = (0..n as isize)
            .map(|i| {
                let prev = contour.at(i - 1);
                let curr = contour.at(i);
                let next = contour.at(i + 1);

                let d1 = curr - prev;
                let d2 = next - curr;
                let dd = d2 - d1;
                let d = (d1 + d2) * 0.5;

                let denom = d.norm_sq().powf(1.5);
                if denom <= self.eps {
                    0.0
                } else {
                    d.cross(dd) / denom
                }
            })
            .collect();
        CurvatureSequence::new(values)
    }
}

/// Computes curvature with the default estimator.
pub fn curvature(contour: &Contour) -> CurvatureSequence {
    CurvatureEstimator::default().estimate(contour)
}
