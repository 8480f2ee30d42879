//! Scalar reference convolution.

use crate::contour::{Contour, Point};
use crate::kernel::{weight_sum, Convolution, GaussianKernel};

/// Direct circular convolution, one output point at a time.
pub struct ScalarConvolution;

impl Convolution for ScalarConvolution {
    fn convolve_circular(contour: &Contour, kernel: &GaussianKernel) -> Contour {
        let n = contour.len();
        if n == 0 {
            return Contour::empty();
        }

        let weights = kernel.weights();
        let half = kernel.radius() as isize;
        let norm = weight_sum(weights);

        (0..n)
            .map(|i| {
                let mut sum_x = 0.0f64;
                let mut sum_y = 0.0f64;
                for (j, &w) in weights.iter().enumerate() {
                    let p = contour.at(i as isize + j as isize - half);
                    sum_x += p.x * w;
                    sum_y += p.y * w;
                }
                Point::new(sum_x / norm, sum_y / norm)
            })
            .collect()
    }
}
