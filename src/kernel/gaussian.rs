//! Discrete normalized Gaussian kernel.

use crate::util::{CssError, CssResult};

fn check_sigma(sigma: f64) -> CssResult<()> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(CssError::InvalidScale { sigma });
    }
    Ok(())
}

/// Largest half-width sampled tap by tap.
///
/// Wrapped kernels whose window exceeds this fall back to the uniform
/// average the periodized Gaussian converges to.
pub const MAX_KERNEL_RADIUS: usize = 1 << 20;

/// Gaussian weight sequence for one scale.
///
/// Conventions:
/// - `radius = ceil(3 * sigma)` and `len = 2 * radius + 1`.
/// - The weight at offset `k` is `exp(-k^2 / (2 sigma^2))` before
///   normalization; weights are divided by their raw sum.
/// - `sigma == 0` yields the unit impulse `[1.0]`.
/// - A kernel wrapped onto a period `n` shorter than `len` accumulates every
///   offset `k` into the tap for `k mod n`. It has exactly `n` taps covering
///   offsets `-(n / 2)..n - n / 2` and may have even length.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    sigma: f64,
    radius: usize,
    weights: Vec<f64>,
}

impl GaussianKernel {
    /// Builds the kernel for `sigma`.
    ///
    /// Returns [`CssError::InvalidScale`] for negative or non-finite scales
    /// and for scales whose half-width exceeds [`MAX_KERNEL_RADIUS`]. Use
    /// [`GaussianKernel::wrapped`] to smooth a closed contour at any scale.
    pub fn new(sigma: f64) -> CssResult<Self> {
        check_sigma(sigma)?;
        let radius = Self::checked_radius(sigma).ok_or(CssError::InvalidScale { sigma })?;
        Ok(Self::sampled(sigma, radius, 2 * radius + 1))
    }

    /// Builds the kernel for `sigma` folded onto a circular period of
    /// `period` samples.
    ///
    /// Convolving a closed contour of `period` points with the wrapped kernel
    /// equals convolving it with the full kernel, while the tap count never
    /// exceeds `period`. Kernels that already fit are identical to
    /// [`GaussianKernel::new`].
    pub fn wrapped(sigma: f64, period: usize) -> CssResult<Self> {
        check_sigma(sigma)?;
        let period = period.max(1);
        Ok(match Self::checked_radius(sigma) {
            Some(radius) => Self::sampled(sigma, radius, period),
            None => Self {
                sigma,
                radius: period / 2,
                weights: vec![1.0 / period as f64; period],
            },
        })
    }

    /// Returns the kernel half-width `ceil(3 * sigma)`, saturating at
    /// `usize::MAX`.
    pub fn radius_for(sigma: f64) -> usize {
        (3.0 * sigma).ceil() as usize
    }

    fn checked_radius(sigma: f64) -> Option<usize> {
        let radius = (3.0 * sigma).ceil();
        (radius <= MAX_KERNEL_RADIUS as f64).then_some(radius as usize)
    }

    /// Samples `2 * radius + 1` offsets into at most `period` taps.
    fn sampled(sigma: f64, radius: usize, period: usize) -> Self {
        if sigma == 0.0 {
            return Self {
                sigma,
                radius: 0,
                weights: vec![1.0],
            };
        }
        let full = 2 * radius + 1;
        let (len, center) = if full <= period {
            (full, radius)
        } else {
            (period, period / 2)
        };
        let two_sigma2 = 2.0 * sigma * sigma;

        let mut weights = vec![0.0f64; len];
        let mut sum = 0.0f64;
        for i in 0..full {
            let k = i as f64 - radius as f64;
            let w = (-(k * k) / two_sigma2).exp();
            let slot = (i as isize - radius as isize + center as isize).rem_euclid(len as isize);
            weights[slot as usize] += w;
            sum += w;
        }
        for w in &mut weights {
            *w /= sum;
        }

        Self {
            sigma,
            radius: center,
            weights,
        }
    }

    /// Returns the scale the kernel was built for.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the half-width (offset of the center tap).
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Returns the number of taps.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false; a kernel has at least the center tap.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the weights ordered from offset `-radius` upward.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the weight at a signed offset from the center.
    pub fn weight_at(&self, offset: isize) -> Option<f64> {
        let idx = offset.checked_add(self.radius as isize)?;
        if idx < 0 {
            return None;
        }
        self.weights.get(idx as usize).copied()
    }
}
