#![forbid(unsafe_code)]

//! Geometric primitives in canvas coordinates.
//!
//! The chart core reasons about node bounds and scroll offsets in an
//! abstract `f64` canvas space. Measuring actual layout is the rendering
//! layer's job; bounds come in, scroll offsets go out.

use serde::{Deserialize, Serialize};

/// A point (or delta) in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise delta `self - other`.
    #[inline]
    #[must_use]
    pub fn delta(&self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Manhattan distance to another point.
    #[inline]
    #[must_use]
    pub fn manhattan_distance(&self, other: Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// An axis-aligned rectangle in canvas coordinates.
///
/// Unlike terminal cell rects this is continuous: zero-width or zero-height
/// bounds are legal (a collapsed measurement) and handled explicitly where
/// they matter.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Bounds {
    /// Create new bounds.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounds at the origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True if the bounds enclose no area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether a point lies inside the bounds.
    #[inline]
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Smallest bounds containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Bounds) -> Bounds {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Bounds::new(x, y, right - x, bottom - y)
    }

    /// Bounding box of an iterator of bounds, or `None` when empty.
    #[must_use]
    pub fn enclosing(bounds: impl IntoIterator<Item = Bounds>) -> Option<Bounds> {
        bounds
            .into_iter()
            .fold(None, |acc: Option<Bounds>, b| match acc {
                Some(acc) => Some(acc.union(&b)),
                None => Some(b),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_delta_and_distance() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(3.0, 24.0);
        assert_eq!(a.delta(b), Point::new(7.0, -4.0));
        assert_eq!(a.manhattan_distance(b), 11.0);
        assert_eq!(Point::ZERO.manhattan_distance(Point::ZERO), 0.0);
    }

    #[test]
    fn bounds_edges_and_center() {
        let b = Bounds::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.right(), 40.0);
        assert_eq!(b.bottom(), 60.0);
        assert_eq!(b.center(), Point::new(25.0, 40.0));
        assert!(!b.is_empty());
    }

    #[test]
    fn bounds_empty() {
        assert!(Bounds::new(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(Bounds::default().is_empty());
        assert!(!Bounds::from_size(1.0, 1.0).is_empty());
    }

    #[test]
    fn bounds_contains() {
        let b = Bounds::from_size(10.0, 10.0);
        assert!(b.contains(Point::ZERO));
        assert!(b.contains(Point::new(9.9, 9.9)));
        assert!(!b.contains(Point::new(10.0, 5.0)));
    }

    #[test]
    fn bounds_union() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, -5.0, 10.0, 10.0);
        let u = a.union(&b);
        assert_eq!(u, Bounds::new(0.0, -5.0, 15.0, 15.0));
    }

    #[test]
    fn enclosing_of_none_is_none() {
        assert_eq!(Bounds::enclosing(std::iter::empty()), None);
    }

    #[test]
    fn enclosing_of_many() {
        let boxes = [
            Bounds::new(0.0, 0.0, 1.0, 1.0),
            Bounds::new(4.0, 4.0, 2.0, 2.0),
            Bounds::new(-1.0, 2.0, 1.0, 1.0),
        ];
        let bbox = Bounds::enclosing(boxes).unwrap();
        assert_eq!(bbox, Bounds::new(-1.0, 0.0, 7.0, 6.0));
    }
}
