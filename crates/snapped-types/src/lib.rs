pub mod search;
pub mod types;

pub use search::{
    ClipRequest, ClipResponse, SearchList, SearchRequest, SearchResponse, SearchResult,
    SearchSummary, UploadResponse,
};
pub use types::{
    DisplayRect, GestureAnchor, SourceImageSize, SourcePixelRect, ViewportLayout, ViewportOrigin,
    ViewportSize,
};
