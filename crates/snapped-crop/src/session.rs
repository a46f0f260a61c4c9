use shared::geometry::Point;
use snapped_config::CropConfig;
use snapped_types::{
    DisplayRect, GestureAnchor, SourceImageSize, SourcePixelRect, ViewportLayout, ViewportOrigin,
};

use crate::error::{CropError, Result};
use crate::transform;

/// Live state of one crop screen: the selection, the active gesture and the
/// measured viewport.
#[derive(Debug, Clone)]
pub struct CropSession {
    source: SourceImageSize,
    layout: Option<ViewportLayout>,
    fallback_origin: ViewportOrigin,
    default_selection: DisplayRect,
    selection: DisplayRect,
    anchor: Option<GestureAnchor>,
}

impl CropSession {
    pub fn new(
        source: SourceImageSize,
        default_selection: DisplayRect,
        fallback_origin: ViewportOrigin,
    ) -> Self {
        Self {
            source,
            layout: None,
            fallback_origin,
            default_selection,
            selection: default_selection,
            anchor: None,
        }
    }

    pub fn from_config(source: SourceImageSize, config: &CropConfig) -> Self {
        Self::new(source, config.default_selection, config.viewport_origin)
    }

    /// Layout measured or changed (resize, rotation).
    pub fn set_layout(&mut self, layout: ViewportLayout) {
        if !layout.size.is_measured() {
            tracing::debug!("Viewport reported without a usable size: {:?}", layout.size);
        }
        self.layout = Some(layout);
    }

    pub fn layout(&self) -> Option<ViewportLayout> {
        self.layout
    }

    pub fn source(&self) -> SourceImageSize {
        self.source
    }

    pub fn is_ready(&self) -> bool {
        self.layout.is_some_and(|layout| layout.size.is_measured())
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<GestureAnchor> {
        self.anchor
    }

    /// Current selection, unclamped.
    pub fn selection(&self) -> DisplayRect {
        self.selection
    }

    /// Screen position of the viewport: measured when available, otherwise
    /// the configured fallback.
    pub fn origin(&self) -> ViewportOrigin {
        self.layout
            .map(|layout| layout.origin)
            .unwrap_or(self.fallback_origin)
    }

    fn to_local(&self, screen_point: Point) -> Point {
        screen_point.relative_to(self.origin())
    }

    pub fn begin_drag(&mut self, screen_point: Point) -> GestureAnchor {
        if !self.is_ready() {
            tracing::debug!("Drag started before the viewport was measured");
        }

        let anchor = transform::begin_drag(self.to_local(screen_point));
        self.anchor = Some(anchor);
        anchor
    }

    /// Returns the new selection, or `None` when no gesture is active.
    pub fn update_drag(&mut self, screen_point: Point) -> Option<DisplayRect> {
        let anchor = self.anchor?;
        self.selection = transform::update_drag(self.to_local(screen_point), anchor);
        Some(self.selection)
    }

    pub fn end_drag(&mut self) {
        self.anchor = None;
    }

    /// Selection clamped to the viewport, for display.
    pub fn clamped_selection(&self) -> Result<DisplayRect> {
        let layout = self.ready_layout()?;
        Ok(transform::clamp_to_viewport(self.selection, layout.size))
    }

    /// Raw selection in source pixels, without clamping or validation.
    pub fn source_selection(&self) -> Result<SourcePixelRect> {
        let layout = self.ready_layout()?;
        transform::to_source_space(self.selection, layout.size, self.source)
            .ok_or(CropError::NotReady)
    }

    /// Validate the selection and convert it for submission.
    pub fn confirm(&self) -> Result<SourcePixelRect> {
        if self.source.is_empty() {
            return Err(CropError::EmptySource);
        }

        let layout = self.ready_layout()?;
        let clamped = transform::clamp_to_viewport(self.selection, layout.size);
        if clamped.is_degenerate() {
            return Err(CropError::DegenerateSelection {
                width: clamped.width,
                height: clamped.height,
            });
        }

        let region = transform::to_source_space(clamped, layout.size, self.source)
            .ok_or(CropError::NotReady)?;
        if region.is_degenerate() {
            return Err(CropError::DegenerateSelection {
                width: region.width as f32,
                height: region.height as f32,
            });
        }

        tracing::debug!("Crop confirmed: {region:?}");
        Ok(region)
    }

    pub fn reset(&mut self) {
        self.selection = self.default_selection;
        self.anchor = None;
    }

    fn ready_layout(&self) -> Result<ViewportLayout> {
        self.layout
            .filter(|layout| layout.size.is_measured())
            .ok_or(CropError::NotReady)
    }
}
