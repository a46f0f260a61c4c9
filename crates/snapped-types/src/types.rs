use serde::{Deserialize, Serialize};
use shared::geometry::{Point, Rect, Size};

/// Selection rectangle in viewport-local coordinates.
pub type DisplayRect = Rect;

/// Top-left corner of the viewport within the screen.
pub type ViewportOrigin = Point;

/// Where the current drag gesture started, viewport-local.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureAnchor {
    pub x: f32,
    pub y: f32,
}

impl GestureAnchor {
    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for GestureAnchor {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// Measured size of the mask view the selection is drawn over.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Layout has produced a usable, non-zero size.
    pub fn is_measured(&self) -> bool {
        !self.as_size().is_empty() && self.width.is_finite() && self.height.is_finite()
    }

    pub fn as_size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Everything the layout pass reports about the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportLayout {
    pub size: ViewportSize,
    pub origin: ViewportOrigin,
}

impl ViewportLayout {
    pub fn new(size: ViewportSize, origin: ViewportOrigin) -> Self {
        Self { size, origin }
    }

    /// Convert a full-screen point into viewport-local coordinates.
    pub fn to_local(&self, screen_point: Point) -> Point {
        screen_point.relative_to(self.origin)
    }
}

/// Natural pixel dimensions of the uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceImageSize {
    pub width: u32,
    pub height: u32,
}

impl SourceImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Crop rectangle in source image pixels, as sent to the clip endpoint.
///
/// Signed because an unclamped selection can start left of or above the
/// image; [`SourcePixelRect::is_within`] is the check for submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourcePixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl SourcePixelRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn is_within(&self, source: SourceImageSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && i64::from(self.x) + i64::from(self.width) <= i64::from(source.width)
            && i64::from(self.y) + i64::from(self.height) <= i64::from(source.height)
    }
}
