//! Request and response bodies exchanged with the search backend.

use serde::{Deserialize, Serialize};

use crate::types::SourcePixelRect;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub image_path: String,
    pub cloudinary_public_id: Option<String>,
    pub cloudinary_url: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Form body for `POST /images/clip-form`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipRequest {
    pub image_path: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloudinary_public_id: Option<String>,
}

impl ClipRequest {
    pub fn new(
        region: SourcePixelRect,
        image_path: impl Into<String>,
        cloudinary_public_id: Option<String>,
    ) -> Self {
        Self {
            image_path: image_path.into(),
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            cloudinary_public_id,
        }
    }

    pub fn region(&self) -> SourcePixelRect {
        SourcePixelRect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipResponse {
    pub image_path: String,
    pub original_image_path: String,
    pub cloudinary_public_id: Option<String>,
    pub cloudinary_url: Option<String>,
    pub original_cloudinary_public_id: Option<String>,
    pub original_cloudinary_url: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Form body for `POST /images/search`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    pub image_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_clipped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloudinary_public_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloudinary_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_cloudinary_public_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_cloudinary_url: Option<String>,
}

impl SearchRequest {
    /// Search on the uploaded image as-is.
    pub fn uploaded(upload: &UploadResponse) -> Self {
        let image_path = upload
            .cloudinary_url
            .clone()
            .unwrap_or_else(|| upload.image_path.clone());

        Self {
            image_path,
            is_clipped: Some(false),
            cloudinary_public_id: upload.cloudinary_public_id.clone(),
            cloudinary_url: upload.cloudinary_url.clone(),
            ..Self::default()
        }
    }

    /// Search on a clipped image, keeping a reference to the original.
    pub fn clipped(original: &UploadResponse, clip: &ClipResponse) -> Self {
        let original_url = original
            .cloudinary_url
            .clone()
            .unwrap_or_else(|| original.image_path.clone());
        let image_path = clip
            .cloudinary_url
            .clone()
            .unwrap_or_else(|| clip.image_path.clone());

        Self {
            image_path,
            original_image_path: Some(original_url.clone()),
            is_clipped: Some(true),
            cloudinary_public_id: clip.cloudinary_public_id.clone(),
            cloudinary_url: clip.cloudinary_url.clone(),
            original_cloudinary_public_id: original.cloudinary_public_id.clone(),
            original_cloudinary_url: Some(original_url),
        }
    }
}

/// One shopping match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: i64,
    pub search_id: i64,
    pub title: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<String>,
    pub brand: Option<String>,
    pub source: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub reviews_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub search_id: i64,
    pub search_time: String,
    pub image_path: String,
    pub original_image_path: Option<String>,
    #[serde(default)]
    pub is_clipped: bool,
    pub cloudinary_public_id: Option<String>,
    pub cloudinary_url: Option<String>,
    pub original_cloudinary_public_id: Option<String>,
    pub original_cloudinary_url: Option<String>,
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub total_results: usize,
}

impl SearchResponse {
    /// Image shown above the results: the original upload, else the searched
    /// image when it is a remote URL.
    pub fn header_image(&self) -> Option<&str> {
        self.original_cloudinary_url
            .as_deref()
            .or_else(|| Some(self.image_path.as_str()).filter(|path| path.starts_with("http")))
    }
}

/// A past search, as listed in the upload history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSummary {
    pub id: i64,
    pub image_path: String,
    pub original_image_path: Option<String>,
    #[serde(default)]
    pub is_clipped: bool,
    pub search_time: String,
    pub cloudinary_public_id: Option<String>,
    pub cloudinary_url: Option<String>,
    pub original_cloudinary_public_id: Option<String>,
    pub original_cloudinary_url: Option<String>,
    /// Present when listed with `include_results=true`.
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchList {
    pub searches: Vec<SearchSummary>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
}
