//! SIMD-accelerated convolution using the `wide` crate.
//!
//! The circular window is unrolled once into contiguous coordinate buffers,
//! then four consecutive output points are accumulated per `f64x4` lane.
//! Accumulation order per output matches the scalar kernel, so results are
//! bit-identical.

use crate::contour::{Contour, Point};
use crate::kernel::{weight_sum, Convolution, GaussianKernel};
use wide::f64x4;

const LANES: usize = 4;

/// Load 4 f64 values into f64x4.
#[inline]
fn load_f64x4(slice: &[f64]) -> f64x4 {
    f64x4::from([slice[0], slice[1], slice[2], slice[3]])
}

/// SIMD circular convolution over four output points at a time.
pub struct SimdConvolution;

impl Convolution for SimdConvolution {
    fn convolve_circular(contour: &Contour, kernel: &GaussianKernel) -> Contour {
        let n = contour.len();
        if n == 0 {
            return Contour::empty();
        }

        let weights = kernel.weights();
        let half = kernel.radius() as isize;
        let norm = weight_sum(weights);

        // ext[m] holds the point at circular index m - half.
        let ext_len = n + weights.len() - 1;
        let mut ext_x = Vec::with_capacity(ext_len);
        let mut ext_y = Vec::with_capacity(ext_len);
        for m in 0..ext_len {
            let p = contour.at(m as isize - half);
            ext_x.push(p.x);
            ext_y.push(p.y);
        }

        let mut out = Vec::with_capacity(n);
        let simd_end = n / LANES * LANES;

        let mut i = 0;
        while i < simd_end {
            let mut acc_x = f64x4::ZERO;
            let mut acc_y = f64x4::ZERO;
            for (j, &w) in weights.iter().enumerate() {
                let wv = f64x4::splat(w);
                acc_x += load_f64x4(&ext_x[i + j..]) * wv;
                acc_y += load_f64x4(&ext_y[i + j..]) * wv;
            }
            let xs = acc_x.to_array();
            let ys = acc_y.to_array();
            for lane in 0..LANES {
                out.push(Point::new(xs[lane] / norm, ys[lane] / norm));
            }
            i += LANES;
        }

        // Scalar remainder
        while i < n {
            let mut sum_x = 0.0f64;
            let mut sum_y = 0.0f64;
            for (j, &w) in weights.iter().enumerate() {
                sum_x += ext_x[i + j] * w;
                sum_y += ext_y[i + j] * w;
            }
            out.push(Point::new(sum_x / norm, sum_y / norm));
            i += 1;
        }

        Contour::new(out)
    }
}
