//! Pure conversions between gesture points, the on-screen selection and
//! source image pixels.

use shared::geometry::{Point, Rect};
use snapped_types::{DisplayRect, GestureAnchor, SourceImageSize, SourcePixelRect, ViewportSize};

/// Record where a drag began. `point` must already be viewport-local.
pub fn begin_drag(point: Point) -> GestureAnchor {
    GestureAnchor::from(point)
}

/// Selection spanned between the anchor and the current point.
///
/// Not clamped: the rectangle may extend past the viewport while dragging.
pub fn update_drag(point: Point, anchor: GestureAnchor) -> DisplayRect {
    Rect::from_corners(anchor.point(), point)
}

/// Per-axis scale factors from viewport to source pixels, or `None` while
/// the viewport has not been measured.
pub fn scale_factors(viewport: ViewportSize, source: SourceImageSize) -> Option<(f64, f64)> {
    if !viewport.is_measured() {
        return None;
    }

    Some((
        f64::from(source.width) / f64::from(viewport.width),
        f64::from(source.height) / f64::from(viewport.height),
    ))
}

/// Map a display selection into source image pixels.
///
/// Each field is scaled then truncated toward zero, so the crop drifts up and
/// left and loses up to one pixel of width and height. Returns `None` when
/// the viewport is not ready.
pub fn to_source_space(
    rect: DisplayRect,
    viewport: ViewportSize,
    source: SourceImageSize,
) -> Option<SourcePixelRect> {
    let (sx, sy) = scale_factors(viewport, source)?;

    Some(SourcePixelRect {
        x: truncate(f64::from(rect.x) * sx),
        y: truncate(f64::from(rect.y) * sy),
        width: truncate(f64::from(rect.width) * sx),
        height: truncate(f64::from(rect.height) * sy),
    })
}

/// Clamp a selection into the viewport before display or submission.
pub fn clamp_to_viewport(rect: DisplayRect, viewport: ViewportSize) -> DisplayRect {
    rect.clamp_within(viewport.as_size())
}

// `as` saturates and maps NaN to 0.
fn truncate(value: f64) -> i32 {
    value.trunc() as i32
}
