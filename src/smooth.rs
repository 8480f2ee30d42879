//! Gaussian smoothing of closed contours.
//!
//! Smoothing is a circular convolution of both coordinates with a normalized
//! [`GaussianKernel`]: every output point is a convex combination of input
//! points, so the result never leaves the input's bounding box. As `sigma`
//! grows past the contour length the window wraps several times and the
//! contour collapses toward its centroid.

use crate::contour::Contour;
use crate::kernel::{Convolution, GaussianKernel};
use crate::trace::trace_event;
use crate::util::{CssError, CssResult};

#[cfg(not(feature = "simd"))]
use crate::kernel::scalar::ScalarConvolution as ActiveConvolution;
#[cfg(feature = "simd")]
use crate::kernel::simd::SimdConvolution as ActiveConvolution;

/// Smooths `contour` at scale `sigma`, returning a new contour.
///
/// An empty contour and `sigma == 0` both return a copy of the input without
/// building a kernel. Negative or non-finite scales are rejected. The kernel
/// is wrapped onto the contour length, so any finite scale is accepted.
pub fn smooth(contour: &Contour, sigma: f64) -> CssResult<Contour> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(CssError::InvalidScale { sigma });
    }
    if contour.is_empty() || sigma == 0.0 {
        return Ok(contour.clone());
    }
    let kernel = GaussianKernel::wrapped(sigma, contour.len())?;
    Ok(smooth_with_kernel(contour, &kernel))
}

/// Smooths `contour` with a prebuilt kernel.
pub fn smooth_with_kernel(contour: &Contour, kernel: &GaussianKernel) -> Contour {
    trace_event!("smooth", points = contour.len(), taps = kernel.len());
    ActiveConvolution::convolve_circular(contour, kernel)
}

#[cfg(test)]
mod tests {
    use super::smooth;
    use crate::contour::shapes::DemoShape;
    use crate::contour::{Contour, Point};
    use crate::util::CssError;

    #[test]
    fn zero_sigma_returns_input_exactly() {
        let c = DemoShape::Heart.contour();
        assert_eq!(smooth(&c, 0.0).unwrap(), c);
    }

    #[test]
    fn empty_contour_passes_through() {
        for &sigma in &[0.0, 1.0, 250.0] {
            assert!(smooth(&Contour::empty(), sigma).unwrap().is_empty());
        }
    }

    #[test]
    fn negative_sigma_fails_fast() {
        let c = DemoShape::Circle.contour();
        assert_eq!(
            smooth(&c, -0.5).unwrap_err(),
            CssError::InvalidScale { sigma: -0.5 }
        );
        assert!(smooth(&Contour::empty(), -0.5).is_err());
    }

    #[test]
    fn large_sigma_collapses_toward_centroid() {
        // The window wraps 30 times around this 20-point star.
        let c = DemoShape::Star.contour();
        let centroid = c.centroid().unwrap();
        let out = smooth(&c, 100.0).unwrap();
        assert_eq!(out.len(), c.len());
        for p in out.points() {
            let d = (*p - centroid).norm_sq().sqrt();
            assert!(d < 2.0, "point {p:?} is {d} from centroid");
        }
    }

    #[test]
    fn huge_sigma_averages_to_the_centroid() {
        let c = DemoShape::Star.contour();
        let centroid = c.centroid().unwrap();
        for sigma in [1e9, 1e20, f64::MAX] {
            let out = smooth(&c, sigma).unwrap();
            assert_eq!(out.len(), c.len());
            for p in out.points() {
                assert!((p.x - centroid.x).abs() < 1e-9, "sigma {sigma}");
                assert!((p.y - centroid.y).abs() < 1e-9, "sigma {sigma}");
            }
        }
    }

    #[test]
    fn smoothing_shrinks_a_circle() {
        let c = DemoShape::Circle.contour();
        let center = Point::new(300.0, 300.0);
        let out = smooth(&c, 4.0).unwrap();
        for p in out.points() {
            let r = (*p - center).norm_sq().sqrt();
            assert!(r < 200.0 && r > 150.0);
        }
    }
}
