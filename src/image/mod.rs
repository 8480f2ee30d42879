//! Grayscale raster input for contour acquisition.
//!
//! `ImageView` borrows a row-major pixel buffer; `OwnedImage` is the owned
//! counterpart produced by file loading and by copying non-contiguous
//! arrays.

use crate::util::{CssError, CssResult};

pub mod boundary;
#[cfg(feature = "image-io")]
pub mod io;

/// Borrowed row-major 2D image view.
#[derive(Copy, Clone)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Views the first `width * height` elements of `data` as rows.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> CssResult<Self> {
        let needed = required_len(width, height)?;
        if data.len() < needed {
            return Err(CssError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the element at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }
}

fn required_len(width: usize, height: usize) -> CssResult<usize> {
    if width == 0 || height == 0 {
        return Err(CssError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(CssError::InvalidDimensions { width, height })
}

/// Owned contiguous grayscale image.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedImage {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl OwnedImage {
    /// Wraps a row-major buffer of exactly `width * height` pixels.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> CssResult<Self> {
        let needed = required_len(width, height)?;
        if data.len() < needed {
            return Err(CssError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(CssError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixel buffer in row-major order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a borrowed view of the whole image.
    pub fn view(&self) -> ImageView<'_, u8> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
        }
    }
}
