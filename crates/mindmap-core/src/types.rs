//! Geometry and text value types.

use serde::{Deserialize, Serialize};

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A position in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    /// Top-left corner
    pub x: f64,
    pub y: f64,
    /// Extent
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create bounds from a position and a size.
    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a point is inside the bounds.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Whether the two rectangles overlap.
    ///
    /// Rectangles that only touch along an edge do not intersect. On an axis
    /// where either extent is zero the spans are compared as closed
    /// intervals, so flat or empty bounds placed on top of each other still
    /// intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        spans_meet(self.x, self.width, other.x, other.width)
            && spans_meet(self.y, self.height, other.y, other.height)
    }

    /// Compute intersection with another bounds.
    pub fn intersect(&self, other: &Bounds) -> Option<Bounds> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x1 < x2 && y1 < y2 {
            Some(Bounds::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Compute union (bounding box) with another bounds.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Bounds::new(x1, y1, x2 - x1, y2 - y1)
    }
}

fn spans_meet(a: f64, a_len: f64, b: f64, b_len: f64) -> bool {
    if a_len == 0.0 || b_len == 0.0 {
        a <= b + b_len && b <= a + a_len
    } else {
        a < b + b_len && b < a + a_len
    }
}

/// Per-side padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    /// Same padding on all four sides.
    pub const fn uniform(value: f64) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Vertical and horizontal padding.
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
    }

    /// left + right
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// top + bottom
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Font sent along with every measurement request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font family
    pub family: String,
    /// Font size in pixels
    pub size: f64,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self { family: family.into(), size }
    }
}

/// Rectangle handed to a measurement call to constrain the text.
///
/// This is a hint for the host text engine, not a final layout size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbeBox {
    pub width: f64,
    pub height: f64,
}

impl ProbeBox {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new(10.0, 20.0, 100.0, 50.0);
        assert!(bounds.contains(50.0, 40.0));
        assert!(!bounds.contains(5.0, 40.0));
        assert!(!bounds.contains(50.0, 100.0));
    }

    #[test]
    fn test_bounds_intersection() {
        let a = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let b = Bounds::new(50.0, 50.0, 100.0, 100.0);
        let intersection = a.intersect(&b).unwrap();
        assert!((intersection.x - 50.0).abs() < 0.001);
        assert!((intersection.y - 50.0).abs() < 0.001);
        assert!((intersection.width - 50.0).abs() < 0.001);
        assert!((intersection.height - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Bounds::new(0.0, 0.0, 100.0, 40.0);
        let b = Bounds::new(100.0, 0.0, 100.0, 40.0);
        let c = Bounds::new(0.0, 40.0, 100.0, 40.0);
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_flat_bounds_on_the_same_spot_intersect() {
        let a = Bounds::new(0.0, 0.0, 64.0, 0.0);
        let b = Bounds::new(0.0, 0.0, 34.0, 0.0);
        assert!(a.intersects(&b));
        assert!(a.intersect(&b).is_none());

        let point = Bounds::new(10.0, 10.0, 0.0, 0.0);
        assert!(point.intersects(&point));
    }

    #[test]
    fn test_flat_bounds_apart_do_not_intersect() {
        let a = Bounds::new(0.0, 0.0, 64.0, 0.0);
        let below = Bounds::new(0.0, 10.0, 64.0, 0.0);
        let beside = Bounds::new(64.0, 0.0, 30.0, 0.0);
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&beside));
        assert!(Bounds::new(10.0, 10.0, 80.0, 30.0).intersects(&Bounds::new(20.0, 20.0, 40.0, 0.0)));
    }

    #[test]
    fn test_bounds_union() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(20.0, 5.0, 10.0, 20.0);
        assert_eq!(a.union(&b), Bounds::new(0.0, 0.0, 30.0, 25.0));
    }

    #[test]
    fn test_padding_sums() {
        let padding = Padding { top: 1.0, right: 2.0, bottom: 3.0, left: 4.0 };
        assert_eq!(padding.horizontal(), 6.0);
        assert_eq!(padding.vertical(), 4.0);
        assert_eq!(Padding::symmetric(5.0, 7.0).horizontal(), 14.0);
    }
}
