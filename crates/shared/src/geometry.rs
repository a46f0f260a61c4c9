use serde::{Deserialize, Serialize};

/// A point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Express this point relative to `origin`.
    pub fn relative_to(self, origin: Point) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative or not a number.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle spanned by two opposite corners, in either order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_degenerate(&self) -> bool {
        self.size().is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Whether the rectangle lies entirely inside `(0, 0, bounds)`.
    pub fn is_within(&self, bounds: Size) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.right() <= bounds.width
            && self.bottom() <= bounds.height
    }

    /// Intersect with `(0, 0, bounds)`. A rectangle entirely outside collapses
    /// to zero size on the nearest edge.
    pub fn clamp_within(&self, bounds: Size) -> Self {
        let max_w = bounds.width.max(0.0);
        let max_h = bounds.height.max(0.0);

        let left = self.x.clamp(0.0, max_w);
        let top = self.y.clamp(0.0, max_h);
        let right = self.right().clamp(0.0, max_w);
        let bottom = self.bottom().clamp(0.0, max_h);

        Self {
            x: left,
            y: top,
            width: (right - left).max(0.0),
            height: (bottom - top).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_relative_to() {
        let p = Point::new(113.0, 270.0).relative_to(Point::new(13.0, 70.0));
        assert_eq!(p, Point::new(100.0, 200.0));
    }

    #[test]
    fn test_rect_from_corners_any_direction() {
        let a = Point::new(50.0, 80.0);
        let b = Point::new(10.0, 120.0);

        let r = Rect::from_corners(a, b);
        assert_eq!(r, Rect::new(10.0, 80.0, 40.0, 40.0));
        assert_eq!(Rect::from_corners(b, a), r);
    }

    #[test]
    fn test_size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(300.0, 0.0).is_empty());
        assert!(Size::new(f32::NAN, 10.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_clamp_within() {
        let bounds = Size::new(300.0, 300.0);

        let inside = Rect::new(10.0, 10.0, 50.0, 50.0);
        assert_eq!(inside.clamp_within(bounds), inside);

        let overflowing = Rect::new(-20.0, 250.0, 100.0, 100.0);
        assert_eq!(
            overflowing.clamp_within(bounds),
            Rect::new(0.0, 250.0, 80.0, 50.0)
        );

        let outside = Rect::new(400.0, 400.0, 10.0, 10.0);
        let clamped = outside.clamp_within(bounds);
        assert!(clamped.is_degenerate());
        assert!(clamped.is_within(bounds));
    }
}
