//! Per-scale analysis and the scale sweep.
//!
//! Every scale smooths the original contour independently, so rows can be
//! computed in any order. Results are assembled in ascending scale order
//! with crossings in ascending index order regardless of execution.

use crate::contour::Contour;
use crate::css::{CssEntry, ScaleGrid, ScalePreview};
use crate::curvature::{CurvatureEstimator, ZeroCrossingMode};
use crate::smooth::smooth;
use crate::trace::{trace_event, trace_span};
use crate::util::CssResult;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Smooths, differentiates and scans `contour` at one scale.
pub(crate) fn analyze_scale(
    contour: &Contour,
    sigma: f64,
    estimator: &CurvatureEstimator,
    mode: ZeroCrossingMode,
) -> CssResult<ScalePreview> {
    let smoothed = smooth(contour, sigma)?;
    let curvature = estimator.estimate(&smoothed);
    let zero_crossings = curvature.zero_crossings(mode);
    trace_event!("zero_crossings", count = zero_crossings.len());
    Ok(ScalePreview {
        sigma,
        smoothed,
        curvature,
        zero_crossings,
    })
}

fn scale_entries(
    contour: &Contour,
    grid: &ScaleGrid,
    scale_idx: usize,
    estimator: &CurvatureEstimator,
    mode: ZeroCrossingMode,
) -> CssResult<Vec<CssEntry>> {
    let sigma = grid.sigma_at(scale_idx);
    let _span = trace_span!("css_scale", scale = scale_idx, sigma = sigma).entered();

    let preview = analyze_scale(contour, sigma, estimator, mode)?;
    Ok(preview
        .zero_crossings
        .positions()
        .map(|position| CssEntry {
            scale_idx,
            sigma,
            position,
        })
        .collect())
}

/// Sweeps all scales on the calling thread.
pub(crate) fn sweep_sequential(
    contour: &Contour,
    grid: &ScaleGrid,
    estimator: &CurvatureEstimator,
    mode: ZeroCrossingMode,
) -> CssResult<Vec<CssEntry>> {
    let _span = trace_span!(
        "css_build",
        points = contour.len(),
        scales = grid.len(),
        parallel = false
    )
    .entered();

    let mut entries = Vec::new();
    for scale_idx in 0..grid.len() {
        entries.extend(scale_entries(contour, grid, scale_idx, estimator, mode)?);
    }
    Ok(entries)
}

/// Sweeps scales in parallel (rayon).
#[cfg(feature = "rayon")]
pub(crate) fn sweep_parallel(
    contour: &Contour,
    grid: &ScaleGrid,
    estimator: &CurvatureEstimator,
    mode: ZeroCrossingMode,
) -> CssResult<Vec<CssEntry>> {
    let _span = trace_span!(
        "css_build",
        points = contour.len(),
        scales = grid.len(),
        parallel = true
    )
    .entered();

    let results: Vec<_> = (0..grid.len())
        .into_par_iter()
        .map(|scale_idx| scale_entries(contour, grid, scale_idx, estimator, mode))
        .collect();

    let mut entries = Vec::new();
    for result in results {
        entries.extend(result?);
    }
    Ok(entries)
}
