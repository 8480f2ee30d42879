//! Error types for cssmap.

use thiserror::Error;

/// Result alias for cssmap operations.
pub type CssResult<T> = std::result::Result<T, CssError>;

/// Errors that can occur when running cssmap algorithms.
///
/// An empty contour is not an error: smoothing returns it unchanged and the
/// scale-space builder returns an empty map.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CssError {
    /// The Gaussian scale is negative or not finite.
    #[error("invalid scale: sigma must be finite and >= 0 (got {sigma})")]
    InvalidScale { sigma: f64 },
    /// A configuration parameter is out of range.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
    /// A contour coordinate is NaN or infinite.
    #[error("non-finite coordinate at point {index}")]
    NonFiniteCoordinate { index: usize },
    /// Separate coordinate arrays have different lengths.
    #[error("coordinate length mismatch: {x_len} x values, {y_len} y values")]
    LengthMismatch { x_len: usize, y_len: usize },
    /// Image dimensions are zero or overflow.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Backing buffer is too small for the requested view.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Image decoding or file access failed.
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}
