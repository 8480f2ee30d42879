//! cssmap computes Curvature Scale Space (CSS) descriptors of closed planar
//! contours.
//!
//! A contour is smoothed with Gaussian kernels of increasing scale; at each
//! scale the signed curvature is estimated and its zero crossings recorded.
//! The accumulated `(sigma, position)` pairs form the CSS map, a
//! shape descriptor that is invariant to translation, rotation and uniform
//! scaling of the input. Optional features add parallel scale sweeps
//! (`rayon`), SIMD convolution (`simd`), image loading (`image-io`) and
//! pipeline spans (`tracing`).

pub mod contour;
pub mod css;
pub mod curvature;
pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod smooth;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use contour::shapes::DemoShape;
pub use contour::{Bounds, Contour, Point};
pub use css::{build_css, CssBuilder, CssConfig, CssEntry, CssMap, ScaleGrid, ScalePreview};
pub use curvature::{
    curvature, detect_zero_crossings, CurvatureEstimator, CurvatureSequence, ZeroCrossingMode,
    ZeroCrossingSet,
};
pub use crate::image::boundary::{extract_boundary, BoundaryConfig};
pub use crate::image::{ImageView, OwnedImage};
pub use kernel::GaussianKernel;
pub use smooth::smooth;
pub use util::{CssError, CssResult};
