//! Closed planar contours.
//!
//! A `Contour` is an ordered sequence of points read circularly: the
//! successor of the last point is the first. All index arithmetic over a
//! contour goes through [`Contour::at`], which wraps any signed index onto the
//! sequence. Stages never mutate a contour in place; smoothing and
//! resampling return new values.

use crate::util::math::wrap_index;
use crate::util::{CssError, CssResult};
use std::ops::{Add, Mul, Sub};

pub mod shapes;

/// A point (or displacement) in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the z component of the cross product `self × rhs`.
    #[inline]
    pub fn cross(self, rhs: Point) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Returns the squared Euclidean norm.
    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds of a contour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Closed polyline stored as an ordered point sequence.
///
/// The empty contour is a valid value meaning "no contour loaded".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    /// Wraps a point sequence without validation.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the empty contour.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a contour, rejecting NaN or infinite coordinates.
    pub fn try_new(points: Vec<Point>) -> CssResult<Self> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(CssError::NonFiniteCoordinate { index });
        }
        Ok(Self { points })
    }

    /// Creates a contour from separate coordinate slices.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> CssResult<Self> {
        if xs.len() != ys.len() {
            return Err(CssError::LengthMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        let points = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| Point::new(x, y))
            .collect();
        Self::try_new(points)
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when no contour is loaded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the contour and returns its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Returns the point at a circular index.
    ///
    /// Any signed index is accepted and wrapped modulo the contour length.
    ///
    /// # Panics
    ///
    /// Panics if the contour is empty.
    #[inline]
    pub fn at(&self, idx: isize) -> Point {
        self.points[wrap_index(idx, self.points.len())]
    }

    /// Returns the axis-aligned bounds, or `None` for an empty contour.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.points.first()?;
        let mut bounds = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in &self.points[1..] {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    /// Returns the mean of all points, or `None` for an empty contour.
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let sum = self
            .points
            .iter()
            .fold(Point::default(), |acc, &p| acc + p);
        Some(sum * (1.0 / self.points.len() as f64))
    }

    /// Returns the closed perimeter length, including the closing segment.
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| (self.at(i as isize + 1) - self.points[i]).norm_sq().sqrt())
            .sum()
    }

    /// Subsamples the contour to `num_points` by uniform index stepping.
    ///
    /// Contours with at most `num_points` points are returned unchanged.
    pub fn resample(&self, num_points: usize) -> Contour {
        if self.points.len() <= num_points {
            return self.clone();
        }
        let step = self.points.len() as f64 / num_points as f64;
        let points = (0..num_points)
            .map(|i| self.points[(i as f64 * step) as usize])
            .collect();
        Contour { points }
    }
}

impl From<Vec<Point>> for Contour {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Contour {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
