use serde::{Deserialize, Serialize};
use shared::geometry::{Point, Rect};

pub const DEFAULT_API_BASE_URL: &str =
    "http://ec2-13-48-29-237.eu-north-1.compute.amazonaws.com/api/v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Page size used when listing past searches.
    pub history_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 60,
            history_limit: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Viewport position within the screen, used until layout reports one.
    pub viewport_origin: Point,
    /// Selection shown when a crop session opens.
    pub default_selection: Rect,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            viewport_origin: Point::new(13.0, 70.0),
            default_selection: Rect::new(100.0, 200.0, 200.0, 200.0),
        }
    }
}

/// Dimensions driving the collapsing results header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsLayoutConfig {
    pub image_max_height: f32,
    pub filter_max_height: f32,
    pub header_max_height: f32,
    /// Scroll distance over which the header fully collapses.
    pub collapse_distance: f32,
    pub card_max_height: f32,
    pub card_border_radius: f32,
    pub padding_horizontal: f32,
    /// Grow window for the summary card, as fractions of `collapse_distance`.
    pub grow_start_fraction: f32,
    pub grow_end_fraction: f32,
}

impl Default for ResultsLayoutConfig {
    fn default() -> Self {
        Self {
            image_max_height: 400.0,
            filter_max_height: 48.0,
            header_max_height: 120.0,
            collapse_distance: 250.0,
            card_max_height: 91.0,
            card_border_radius: 16.0,
            padding_horizontal: 20.0,
            grow_start_fraction: 0.35,
            grow_end_fraction: 0.85,
        }
    }
}

impl ResultsLayoutConfig {
    /// Full-bleed card width for a screen, minus horizontal padding.
    pub fn card_max_width(&self, screen_width: f32) -> f32 {
        (screen_width - self.padding_horizontal * 2.0).max(0.0)
    }

    pub fn grow_start(&self) -> f32 {
        self.collapse_distance * self.grow_start_fraction
    }

    pub fn grow_end(&self) -> f32 {
        self.collapse_distance * self.grow_end_fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_window() {
        let layout = ResultsLayoutConfig::default();
        assert_eq!(layout.grow_start(), 87.5);
        assert_eq!(layout.grow_end(), 212.5);
    }

    #[test]
    fn test_card_max_width() {
        let layout = ResultsLayoutConfig::default();
        assert_eq!(layout.card_max_width(390.0), 350.0);
        assert_eq!(layout.card_max_width(30.0), 0.0);
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let layout: ResultsLayoutConfig =
            serde_json::from_str(r#"{ "collapse_distance": 300.0 }"#).unwrap();
        assert_eq!(layout.collapse_distance, 300.0);
        assert_eq!(layout.image_max_height, 400.0);
    }
}
