//! Client for the upstream video REST API.
//!
//! [`VideoApi`] is the seam the controllers talk through; [`HttpVideoApi`]
//! is the reqwest-backed implementation used by the web server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::constants::{ADMIN_VIDEO_PATH, ALL_VIDEOS_PATH, PUBLISHED_VIDEOS_PATH, USER_AGENT};
use crate::models::{Video, VideoInput};

/// Failure talking to the upstream API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Error text supplied by the server, if any.
    ///
    /// JSON bodies of the form `{"detail": "..."}` yield the detail string;
    /// any other non-empty body is returned verbatim.
    #[must_use]
    pub fn server_message(&self) -> Option<String> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        let body = body.trim();
        if body.is_empty() {
            return None;
        }
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string));
        Some(detail.unwrap_or_else(|| body.to_string()))
    }

    /// HTTP status code for status errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Operations offered by the video REST API.
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// `GET /videos`: published videos only.
    async fn published_videos(&self) -> Result<Vec<Video>, ApiError>;

    /// `GET /admin/videos/all`: every video, drafts included.
    async fn all_videos(&self) -> Result<Vec<Video>, ApiError>;

    /// `POST /admin/video`
    async fn create_video(&self, input: &VideoInput) -> Result<(), ApiError>;

    /// `PUT /admin/video/{id}`
    async fn update_video(&self, id: i64, input: &VideoInput) -> Result<(), ApiError>;

    /// `DELETE /admin/video/{id}`
    async fn delete_video(&self, id: i64) -> Result<(), ApiError>;
}

/// reqwest implementation of [`VideoApi`].
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpVideoApi {
    client: Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl HttpVideoApi {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Url::parse(base_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session_cookie: None,
        })
    }

    /// Attach a session cookie (`name=value`) to every request.
    #[must_use]
    pub fn with_session(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(Url::parse(&format!("{}{path}", self.base_url))?)
    }

    fn video_endpoint(&self, id: i64) -> Result<Url, ApiError> {
        self.endpoint(&format!("{ADMIN_VIDEO_PATH}/{id}"))
    }

    fn with_credentials(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session_cookie {
            Some(cookie) => request.header(COOKIE, cookie),
            None => request,
        }
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str, credentials: bool) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "Fetching video list");

        let mut request = self.client.get(url);
        if credentials {
            request = self.with_credentials(request);
        }

        let body = check(request.send().await?).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_json(&self, request: RequestBuilder, input: &VideoInput) -> Result<(), ApiError> {
        let request = self
            .with_credentials(request)
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(input)?);
        check(request.send().await?).await?;
        Ok(())
    }
}

#[async_trait]
impl VideoApi for HttpVideoApi {
    async fn published_videos(&self) -> Result<Vec<Video>, ApiError> {
        self.get_list(PUBLISHED_VIDEOS_PATH, false).await
    }

    async fn all_videos(&self) -> Result<Vec<Video>, ApiError> {
        self.get_list(ALL_VIDEOS_PATH, true).await
    }

    async fn create_video(&self, input: &VideoInput) -> Result<(), ApiError> {
        let url = self.endpoint(ADMIN_VIDEO_PATH)?;
        debug!(url = %url, title = %input.title, "Creating video");
        self.send_json(self.client.post(url), input).await
    }

    async fn update_video(&self, id: i64, input: &VideoInput) -> Result<(), ApiError> {
        let url = self.video_endpoint(id)?;
        debug!(url = %url, id, "Updating video");
        self.send_json(self.client.put(url), input).await
    }

    async fn delete_video(&self, id: i64) -> Result<(), ApiError> {
        let url = self.video_endpoint(id)?;
        debug!(url = %url, id, "Deleting video");
        let request = self.with_credentials(self.client.delete(url));
        check(request.send().await?).await?;
        Ok(())
    }
}

/// Read the body, turning non-2xx responses into [`ApiError::Status`].
async fn check(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let url = response.url().clone();
    let body = response.text().await?;

    if !status.is_success() {
        warn!(url = %url, status = status.as_u16(), "Upstream API returned an error");
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}
