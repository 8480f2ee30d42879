//! The discrete scale sweep.

use crate::util::{CssError, CssResult};

/// Equally spaced scales `sigma_i = (i / num_scales) * max_sigma` for
/// `i = 0..num_scales`.
///
/// The upper bound is exclusive: the last row sits one step below
/// `max_sigma`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleGrid {
    max_sigma: f64,
    num_scales: usize,
}

impl ScaleGrid {
    /// Creates a grid with `num_scales > 0` rows up to `max_sigma >= 0`.
    pub fn new(max_sigma: f64, num_scales: usize) -> CssResult<Self> {
        if !max_sigma.is_finite() || max_sigma < 0.0 {
            return Err(CssError::InvalidConfig {
                reason: "max_sigma must be finite and >= 0",
            });
        }
        if num_scales == 0 {
            return Err(CssError::InvalidConfig {
                reason: "num_scales must be > 0",
            });
        }
        Ok(Self {
            max_sigma,
            num_scales,
        })
    }

    /// Returns the number of scales in the sweep.
    pub fn len(&self) -> usize {
        self.num_scales
    }

    /// Returns true if the grid has no scales.
    pub fn is_empty(&self) -> bool {
        self.num_scales == 0
    }

    /// Returns the exclusive upper bound of the sweep.
    pub fn max_sigma(&self) -> f64 {
        self.max_sigma
    }

    /// Returns the spacing between consecutive scales.
    pub fn step(&self) -> f64 {
        self.max_sigma / self.num_scales as f64
    }

    /// Returns the scale for row `idx`.
    ///
    /// Indices at or past `len()` extrapolate with the same formula, which
    /// the progression uses to reach `max_sigma` itself.
    pub fn sigma_at(&self, idx: usize) -> f64 {
        (idx as f64 / self.num_scales as f64) * self.max_sigma
    }

    /// Iterates over all scales in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.num_scales).map(|idx| self.sigma_at(idx))
    }

    /// Returns the row whose scale is closest to `sigma`.
    ///
    /// Values outside the sweep clamp to the first or last row.
    pub fn nearest_index(&self, sigma: f64) -> usize {
        if sigma.is_nan() || sigma <= 0.0 || self.max_sigma == 0.0 {
            return 0;
        }
        let idx = (sigma / self.step()).round();
        if idx >= (self.num_scales - 1) as f64 {
            self.num_scales - 1
        } else {
            idx as usize
        }
    }
}
