//! Gaussian kernels and circular convolution over contours.
//!
//! [`GaussianKernel`] builds the normalized weight sequence for a scale, and
//! [`Convolution`] is the seam between the scalar reference implementation
//! and the optional SIMD one.

use crate::contour::Contour;

mod gaussian;

pub use gaussian::{GaussianKernel, MAX_KERNEL_RADIUS};

/// Circular convolution of a closed contour with a Gaussian kernel.
pub trait Convolution {
    /// Convolves both coordinates of `contour` with `kernel`, wrapping around
    /// the contour ends. The output has the same length as the input; an
    /// empty contour yields an empty contour.
    fn convolve_circular(contour: &Contour, kernel: &GaussianKernel) -> Contour;
}

/// Sums kernel weights in index order.
///
/// Both implementations divide by this value so their outputs agree bit for
/// bit.
#[inline]
pub(crate) fn weight_sum(weights: &[f64]) -> f64 {
    let mut sum = 0.0f64;
    for &w in weights {
        sum += w;
    }
    sum
}

pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;
