//! Low-level building blocks for custom pipelines.
//!
//! These expose the convolution seam, prebuilt-kernel smoothing and the
//! boundary pixel scan for callers that want to reuse kernels across many
//! contours or inspect intermediate stages. Most users should prefer
//! `CssBuilder` and the top-level functions.

pub use crate::contour::shapes::{circle, heart, rectangle, star};
pub use crate::curvature::DEFAULT_CURVATURE_EPS;
pub use crate::image::boundary::boundary_pixels;
pub use crate::kernel::scalar::ScalarConvolution;
#[cfg(feature = "simd")]
pub use crate::kernel::simd::SimdConvolution;
pub use crate::kernel::{Convolution, MAX_KERNEL_RADIUS};
pub use crate::smooth::smooth_with_kernel;
