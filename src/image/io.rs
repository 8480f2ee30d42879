//! Convenience helpers for loading images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::contour::Contour;
use crate::image::boundary::{extract_boundary, BoundaryConfig};
use crate::image::OwnedImage;
use crate::util::{CssError, CssResult};
use image::imageops::FilterType;
use std::path::Path;

/// Creates an owned image from a grayscale image buffer.
pub fn owned_from_gray_image(img: &image::GrayImage) -> CssResult<OwnedImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    OwnedImage::new(img.as_raw().clone(), width, height)
}

/// Converts to grayscale, downscaling so neither side exceeds `max_dimension`.
///
/// The aspect ratio is kept and the scaled sizes are floored.
pub fn owned_from_dynamic_image(
    img: &image::DynamicImage,
    max_dimension: u32,
) -> CssResult<OwnedImage> {
    let gray = img.to_luma8();
    let (width, height) = gray.dimensions();
    let largest = width.max(height);
    if max_dimension == 0 || largest <= max_dimension {
        return owned_from_gray_image(&gray);
    }
    let scale = max_dimension as f64 / largest as f64;
    let new_width = ((width as f64 * scale).floor() as u32).max(1);
    let new_height = ((height as f64 * scale).floor() as u32).max(1);
    let resized = image::imageops::resize(&gray, new_width, new_height, FilterType::Triangle);
    owned_from_gray_image(&resized)
}

/// Loads an image from disk as grayscale, downscaled to `max_dimension`.
pub fn load_gray_image<P: AsRef<Path>>(path: P, max_dimension: u32) -> CssResult<OwnedImage> {
    let img = image::open(path).map_err(|err| CssError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img, max_dimension)
}

/// Loads an image and extracts its boundary contour.
pub fn load_contour<P: AsRef<Path>>(path: P, cfg: &BoundaryConfig) -> CssResult<Contour> {
    cfg.validate()?;
    let img = load_gray_image(path, cfg.max_dimension)?;
    extract_boundary(&img.view(), cfg)
}
