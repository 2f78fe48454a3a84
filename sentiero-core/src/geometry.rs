//! Planar geometry primitives.
//!
//! Edge weights are never stored: they are recomputed from node positions with
//! [`euclidean_distance`] whenever they are needed.

use core::fmt;

/// A position in the plane.
///
/// # Examples
/// ```
/// use sentiero_core::Point;
///
/// let origin = Point::new(0.0, 0.0);
/// assert!((origin.distance_to(Point::new(3.0, 4.0)) - 5.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` when both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        euclidean_distance(self, other)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Computes `sqrt((x1 - x2)^2 + (y1 - y2)^2)`.
///
/// # Examples
/// ```
/// use sentiero_core::{Point, euclidean_distance};
///
/// let d = euclidean_distance(Point::new(100.0, 350.0), Point::new(1000.0, 350.0));
/// assert_eq!(d, 900.0);
/// ```
#[must_use]
pub fn euclidean_distance(left: Point, right: Point) -> f64 {
    let dx = left.x - right.x;
    let dy = left.y - right.y;
    dx.hypot(dy)
}

/// A drawable line between two positions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment {
    /// Start of the segment.
    pub from: Point,
    /// End of the segment.
    pub to: Point,
}

impl Segment {
    /// Creates a segment between two positions.
    #[must_use]
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        euclidean_distance(self.from, self.to)
    }
}
