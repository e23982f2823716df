//! Shared constants used across the application.

/// User agent sent with upstream API requests.
pub const USER_AGENT: &str = concat!("video-showcase/", env!("CARGO_PKG_VERSION"));

/// Upstream endpoint listing published videos.
pub const PUBLISHED_VIDEOS_PATH: &str = "/videos";

/// Upstream endpoint listing every video, drafts included.
pub const ALL_VIDEOS_PATH: &str = "/admin/videos/all";

/// Upstream endpoint for creating, updating and deleting videos.
pub const ADMIN_VIDEO_PATH: &str = "/admin/video";

/// Label shown for videos without a publish date.
pub const NOT_PUBLISHED_LABEL: &str = "Not published yet";

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch videos";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load videos";
pub const ADD_SUCCESS_MESSAGE: &str = "Video added successfully";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add video";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update video";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete video";
pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete this video?";
