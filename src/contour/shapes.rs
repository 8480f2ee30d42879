//! Procedural contour generators.
//!
//! These produce closed point sequences directly, standing in for image-based
//! acquisition in demos, benchmarks and tests.

use crate::contour::{Contour, Point};
use std::f64::consts::PI;

/// Samples `num_points` points uniformly in angle around a circle.
pub fn circle(center: Point, radius: f64, num_points: usize) -> Contour {
    (0..num_points)
        .map(|i| {
            let angle = (i as f64 / num_points as f64) * 2.0 * PI;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Walks an axis-aligned rectangle starting at its `(x, y)` corner.
///
/// Sides are traversed top, right, bottom, left with `points_per_side`
/// samples each; every side starts exactly at a corner.
pub fn rectangle(x: f64, y: f64, width: f64, height: f64, points_per_side: usize) -> Contour {
    let n = points_per_side as f64;
    let mut points = Vec::with_capacity(points_per_side * 4);
    for i in 0..points_per_side {
        points.push(Point::new(x + (i as f64 / n) * width, y));
    }
    for i in 0..points_per_side {
        points.push(Point::new(x + width, y + (i as f64 / n) * height));
    }
    for i in 0..points_per_side {
        points.push(Point::new(x + width - (i as f64 / n) * width, y + height));
    }
    for i in 0..points_per_side {
        points.push(Point::new(x, y + height - (i as f64 / n) * height));
    }
    Contour::new(points)
}

/// Builds a star with `num_tips` tips alternating between two radii.
///
/// The first vertex is an outer tip at angle `-pi/2`.
pub fn star(center: Point, outer_radius: f64, inner_radius: f64, num_tips: usize) -> Contour {
    let total = num_tips * 2;
    (0..total)
        .map(|i| {
            let angle = (i as f64 / total as f64) * 2.0 * PI - PI / 2.0;
            let radius = if i % 2 == 0 {
                outer_radius
            } else {
                inner_radius
            };
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Samples the classic parametric heart curve.
pub fn heart(center: Point, scale: f64, num_points: usize) -> Contour {
    (0..num_points)
        .map(|i| {
            let t = (i as f64 / num_points as f64) * 2.0 * PI;
            let x = scale * (16.0 * t.sin().powi(3));
            let y = -scale
                * (13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
            Point::new(center.x + x, center.y + y)
        })
        .collect()
}

/// Demo shapes with fixed parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoShape {
    /// 100-point circle of radius 200 centered at (300, 300).
    Circle,
    /// 300x200 rectangle at (150, 200), 25 points per side.
    Rectangle,
    /// 10-tip star with radii 200/80 centered at (300, 300).
    Star,
    /// 100-point heart with scale 15 centered at (300, 250).
    Heart,
}

impl DemoShape {
    /// All demo shapes in display order.
    pub const ALL: [DemoShape; 4] = [
        DemoShape::Circle,
        DemoShape::Rectangle,
        DemoShape::Star,
        DemoShape::Heart,
    ];

    /// Returns the lowercase shape name.
    pub fn name(self) -> &'static str {
        match self {
            DemoShape::Circle => "circle",
            DemoShape::Rectangle => "rectangle",
            DemoShape::Star => "star",
            DemoShape::Heart => "heart",
        }
    }

    /// Looks up a shape by case-insensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(name))
    }

    /// Generates the contour.
    pub fn contour(self) -> Contour {
        match self {
            DemoShape::Circle => circle(Point::new(300.0, 300.0), 200.0, 100),
            DemoShape::Rectangle => rectangle(150.0, 200.0, 300.0, 200.0, 25),
            DemoShape::Star => star(Point::new(300.0, 300.0), 200.0, 80.0, 10),
            DemoShape::Heart => heart(Point::new(300.0, 250.0), 15.0, 100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_shapes_have_expected_sizes() {
        assert_eq!(DemoShape::Circle.contour().len(), 100);
        assert_eq!(DemoShape::Rectangle.contour().len(), 100);
        assert_eq!(DemoShape::Star.contour().len(), 20);
        assert_eq!(DemoShape::Heart.contour().len(), 100);
    }

    #[test]
    fn rectangle_sides_start_at_corners() {
        let c = DemoShape::Rectangle.contour();
        assert_eq!(c.points()[0], Point::new(150.0, 200.0));
        assert_eq!(c.points()[25], Point::new(450.0, 200.0));
        assert_eq!(c.points()[50], Point::new(450.0, 400.0));
        assert_eq!(c.points()[75], Point::new(150.0, 400.0));
    }

    #[test]
    fn star_alternates_radii() {
        let center = Point::new(300.0, 300.0);
        let c = star(center, 200.0, 80.0, 10);
        for (i, p) in c.points().iter().enumerate() {
            let r = (*p - center).norm_sq().sqrt();
            let expected = if i % 2 == 0 { 200.0 } else { 80.0 };
            assert!((r - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(DemoShape::from_name("Star"), Some(DemoShape::Star));
        assert_eq!(DemoShape::from_name("HEART"), Some(DemoShape::Heart));
        assert_eq!(DemoShape::from_name("triangle"), None);
    }
}
