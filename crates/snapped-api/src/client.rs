use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use snapped_config::ApiConfig;
use snapped_types::{
    ClipRequest, ClipResponse, SearchList, SearchRequest, SearchResponse, UploadResponse,
};

use crate::error::{ApiError, Result};

const UPLOAD_PATH: &str = "/images/upload";
const CLIP_PATH: &str = "/images/clip-form";
const SEARCH_PATH: &str = "/images/search";
const SEARCHES_PATH: &str = "/images/searches";

/// Async client for the search backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    history_limit: u32,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            history_limit: config.history_limit,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Upload a local image as `multipart/form-data`.
    pub async fn upload_image(&self, path: &Path) -> Result<UploadResponse> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ApiError::InvalidPath(path.to_path_buf()))?
            .to_string();

        let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Uploading {} ({} bytes)", file_name, bytes.len());
        let request = self.upload_request(file_name, bytes)?;
        self.send_json(request).await
    }

    fn upload_request(&self, file_name: String, bytes: Vec<u8>) -> Result<RequestBuilder> {
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("image/jpeg")?;
        let form = Form::new().part("file", part).text("optimize", "true");

        Ok(self.client.post(self.url(UPLOAD_PATH)).multipart(form))
    }

    /// Cut a region out of a previously uploaded image.
    pub async fn clip_image(&self, request: &ClipRequest) -> Result<ClipResponse> {
        tracing::debug!(
            "Clipping {} at {}x{}+{}+{}",
            request.image_path,
            request.width,
            request.height,
            request.x,
            request.y
        );
        self.send_json(self.clip_request(request)).await
    }

    fn clip_request(&self, request: &ClipRequest) -> RequestBuilder {
        self.client.post(self.url(CLIP_PATH)).form(request)
    }

    pub async fn search_products(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let response: SearchResponse = self.send_json(self.search_request(request)).await?;
        tracing::info!(
            "Search {} returned {} results",
            response.search_id,
            response.total_results
        );
        Ok(response)
    }

    fn search_request(&self, request: &SearchRequest) -> RequestBuilder {
        self.client.post(self.url(SEARCH_PATH)).form(request)
    }

    pub async fn get_search(&self, search_id: i64) -> Result<SearchResponse> {
        let request = self
            .client
            .get(self.url(&format!("{SEARCHES_PATH}/{search_id}")));
        self.send_json(request).await
    }

    /// Past searches, newest first, each with its results.
    pub async fn list_searches(&self) -> Result<SearchList> {
        self.send_json(self.list_request()).await
    }

    fn list_request(&self) -> RequestBuilder {
        self.client.get(self.url(SEARCHES_PATH)).query(&[
            ("limit", self.history_limit.to_string()),
            ("include_results", "true".to_string()),
        ])
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let body = Self::check_status(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn check_status(response: Response) -> Result<String> {
        let status = response.status();
        let url = response.url().clone();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("{} {} failed: {}", status.as_u16(), url, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapped_types::SourcePixelRect;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: "http://localhost:8000/api/v1/".to_string(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    fn body_text(builder: RequestBuilder) -> String {
        let request = builder.build().unwrap();
        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let api = client();
        assert_eq!(api.base_url(), "http://localhost:8000/api/v1");
        assert_eq!(
            api.url(SEARCH_PATH),
            "http://localhost:8000/api/v1/images/search"
        );
    }

    #[test]
    fn test_clip_request_is_form_encoded() {
        let api = client();
        let clip = ClipRequest::new(
            SourcePixelRect::new(300, 400, 150, 100),
            "uploads/shot.jpg",
            None,
        );

        let request = api.clip_request(&clip).build().unwrap();
        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request.headers()["content-type"],
            "application/x-www-form-urlencoded"
        );

        let body = body_text(api.clip_request(&clip));
        assert_eq!(
            body,
            "image_path=uploads%2Fshot.jpg&x=300&y=400&width=150&height=100"
        );
    }

    #[test]
    fn test_search_request_omits_unset_fields() {
        let api = client();
        let request = SearchRequest {
            image_path: "https://cdn/x.jpg".to_string(),
            is_clipped: Some(false),
            ..SearchRequest::default()
        };

        let body = body_text(api.search_request(&request));
        assert_eq!(body, "image_path=https%3A%2F%2Fcdn%2Fx.jpg&is_clipped=false");
    }

    #[test]
    fn test_list_request_query() {
        let request = client().list_request().build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8000/api/v1/images/searches?limit=50&include_results=true"
        );
    }

    #[test]
    fn test_upload_request_is_multipart() {
        let request = client()
            .upload_request("shot.jpg".to_string(), vec![0xFF, 0xD8, 0xFF])
            .unwrap()
            .build()
            .unwrap();

        let content_type = request.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
        assert!(request.url().as_str().ends_with("/images/upload"));
    }

    #[test]
    fn test_transient_errors() {
        let server = ApiError::Status {
            status: 502,
            body: String::new(),
        };
        let client_side = ApiError::Status {
            status: 422,
            body: String::new(),
        };
        assert!(server.is_transient());
        assert!(!client_side.is_transient());
    }
}
