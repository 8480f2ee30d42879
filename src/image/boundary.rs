//! Threshold-based boundary acquisition.
//!
//! A pixel darker than the threshold with at least one light 8-neighbor is a
//! boundary pixel. Boundary pixels are ordered by angle about the image
//! center and subsampled with a fixed stride. This is a coarse heuristic: it
//! orders star-shaped silhouettes correctly but scrambles shapes with several
//! boundary crossings along a ray.

use crate::contour::shapes::rectangle;
use crate::contour::{Contour, Point};
use crate::image::ImageView;
use crate::trace::{trace_event, trace_span};
use crate::util::{CssError, CssResult};

const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Parameters of the boundary heuristic.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryConfig {
    /// Pixels below this gray level are foreground.
    pub threshold: u8,
    /// Approximate number of contour points to keep.
    pub target_points: usize,
    /// Inset of the fallback rectangle from the image border.
    pub fallback_margin: f64,
    /// Points per side of the fallback rectangle.
    pub points_per_side: usize,
    /// Images larger than this in either dimension are downscaled on load.
    pub max_dimension: u32,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            threshold: 128,
            target_points: 150,
            fallback_margin: 20.0,
            points_per_side: 25,
            max_dimension: 600,
        }
    }
}

impl BoundaryConfig {
    /// Checks parameter ranges.
    pub fn validate(&self) -> CssResult<()> {
        if self.target_points == 0 {
            return Err(CssError::InvalidConfig {
                reason: "target_points must be > 0",
            });
        }
        if self.points_per_side == 0 {
            return Err(CssError::InvalidConfig {
                reason: "points_per_side must be > 0",
            });
        }
        if !self.fallback_margin.is_finite() || self.fallback_margin < 0.0 {
            return Err(CssError::InvalidConfig {
                reason: "fallback_margin must be finite and >= 0",
            });
        }
        if self.max_dimension == 0 {
            return Err(CssError::InvalidConfig {
                reason: "max_dimension must be > 0",
            });
        }
        Ok(())
    }
}

fn is_boundary(view: &ImageView<'_, u8>, x: usize, y: usize, threshold: u8) -> bool {
    match view.get(x, y) {
        Some(&v) if v < threshold => {}
        _ => return false,
    }
    NEIGHBORS.iter().any(|&(dx, dy)| {
        let nx = x as isize + dx;
        let ny = y as isize + dy;
        if nx < 0 || ny < 0 {
            return false;
        }
        matches!(view.get(nx as usize, ny as usize), Some(&v) if v >= threshold)
    })
}

/// Collects boundary pixels in row-major order, skipping the outer border.
pub fn boundary_pixels(view: &ImageView<'_, u8>, threshold: u8) -> Vec<Point> {
    let (width, height) = (view.width(), view.height());
    let mut pixels = Vec::new();
    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            if is_boundary(view, x, y, threshold) {
                pixels.push(Point::new(x as f64, y as f64));
            }
        }
    }
    pixels
}

/// Extracts a closed contour from a grayscale image.
///
/// Falls back to a rectangle inset by `fallback_margin` when no boundary
/// pixel is found.
pub fn extract_boundary(view: &ImageView<'_, u8>, cfg: &BoundaryConfig) -> CssResult<Contour> {
    cfg.validate()?;
    let _span = trace_span!("extract_boundary", width = view.width(), height = view.height())
        .entered();

    let width = view.width() as f64;
    let height = view.height() as f64;
    let mut pixels = boundary_pixels(view, cfg.threshold);
    trace_event!("boundary_pixels", count = pixels.len());

    if pixels.is_empty() {
        let m = cfg.fallback_margin;
        return Ok(rectangle(
            m,
            m,
            width - 2.0 * m,
            height - 2.0 * m,
            cfg.points_per_side,
        ));
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let mut keyed: Vec<(f64, Point)> = pixels
        .drain(..)
        .map(|p| ((p.y - cy).atan2(p.x - cx), p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    let step = (keyed.len() / cfg.target_points).max(1);
    Ok(keyed.into_iter().step_by(step).map(|(_, p)| p).collect())
}

#[cfg(test)]
mod tests {
    use super::{boundary_pixels, extract_boundary, BoundaryConfig};
    use crate::contour::Point;
    use crate::image::ImageView;

    fn disk(size: usize, radius: f64) -> Vec<u8> {
        let c = size as f64 / 2.0;
        let mut data = vec![255u8; size * size];
        for y in 0..size {
            for x in 0..size {
                let dx = x as f64 - c;
                let dy = y as f64 - c;
                if dx * dx + dy * dy <= radius * radius {
                    data[y * size + x] = 0;
                }
            }
        }
        data
    }

    #[test]
    fn blank_image_falls_back_to_inset_rectangle() {
        let data = vec![255u8; 100 * 80];
        let view = ImageView::from_slice(&data, 100, 80).unwrap();
        let c = extract_boundary(&view, &BoundaryConfig::default()).unwrap();
        assert_eq!(c.len(), 100);
        assert_eq!(c.points()[0], Point::new(20.0, 20.0));
        assert_eq!(c.points()[25], Point::new(80.0, 20.0));
        assert_eq!(c.points()[50], Point::new(80.0, 60.0));
        assert_eq!(c.points()[75], Point::new(20.0, 60.0));
    }

    #[test]
    fn dark_pixel_needs_a_light_neighbor() {
        let mut data = vec![0u8; 5 * 5];
        data[0] = 255;
        let view = ImageView::from_slice(&data, 5, 5).unwrap();
        // Only (1, 1) touches the light corner pixel.
        assert_eq!(boundary_pixels(&view, 128), vec![Point::new(1.0, 1.0)]);
    }

    #[test]
    fn disk_boundary_is_ordered_by_angle() {
        let data = disk(64, 20.0);
        let view = ImageView::from_slice(&data, 64, 64).unwrap();
        let cfg = BoundaryConfig::default();
        let c = extract_boundary(&view, &cfg).unwrap();
        assert!(c.len() >= 10);
        assert!(c.len() <= 2 * cfg.target_points);
        let angles: Vec<f64> = c
            .points()
            .iter()
            .map(|p| (p.y - 32.0).atan2(p.x - 32.0))
            .collect();
        assert!(angles.windows(2).all(|w| w[0] <= w[1]));
        for p in c.points() {
            let r = ((p.x - 32.0).powi(2) + (p.y - 32.0).powi(2)).sqrt();
            assert!((r - 20.0).abs() < 1.5, "radius {r}");
        }
    }

    #[test]
    fn subsampling_respects_target() {
        let data = disk(200, 80.0);
        let view = ImageView::from_slice(&data, 200, 200).unwrap();
        let cfg = BoundaryConfig {
            target_points: 40,
            ..BoundaryConfig::default()
        };
        let all = boundary_pixels(&view, cfg.threshold).len();
        let c = extract_boundary(&view, &cfg).unwrap();
        let step = (all / 40).max(1);
        assert_eq!(c.len(), all.div_ceil(step));
    }

    #[test]
    fn zero_target_points_is_rejected() {
        let data = vec![255u8; 16];
        let view = ImageView::from_slice(&data, 4, 4).unwrap();
        let cfg = BoundaryConfig {
            target_points: 0,
            ..BoundaryConfig::default()
        };
        assert!(extract_boundary(&view, &cfg).is_err());
    }
}
