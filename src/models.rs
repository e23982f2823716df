//! Video records as exchanged with the upstream API.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::constants::NOT_PUBLISHED_LABEL;

static YOUTUBE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:v=|youtu\.be/)([\w-]+)").expect("valid regex"));

/// Naive timestamp layouts accepted for `published_at`, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// A video record as returned by the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub youtube_link: String,
    pub thumbnail_url: String,
    /// `None` marks a draft.
    #[serde(default, deserialize_with = "deserialize_published_at")]
    pub published_at: Option<DateTime<Utc>>,
}

impl Video {
    /// Human-readable publish date label.
    #[must_use]
    pub fn publish_label(&self) -> String {
        publish_label(self.published_at)
    }

    /// YouTube video id extracted from the link, if any.
    #[must_use]
    pub fn youtube_id(&self) -> Option<&str> {
        extract_youtube_id(&self.youtube_link)
    }

    /// Embeddable player URL, when the link carries a YouTube id.
    #[must_use]
    pub fn embed_url(&self) -> Option<String> {
        self.youtube_id()
            .map(|id| format!("https://www.youtube.com/embed/{id}"))
    }
}

/// Payload for creating or updating a video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInput {
    pub title: String,
    pub youtube_link: String,
}

impl VideoInput {
    #[must_use]
    pub fn new(title: impl Into<String>, youtube_link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            youtube_link: youtube_link.into(),
        }
    }
}

impl From<&Video> for VideoInput {
    fn from(video: &Video) -> Self {
        Self::new(video.title.clone(), video.youtube_link.clone())
    }
}

/// Format a publish date as `Published on 15 January 2024`.
#[must_use]
pub fn publish_label(published_at: Option<DateTime<Utc>>) -> String {
    match published_at {
        Some(at) => format!("Published on {}", at.format("%-d %B %Y")),
        None => NOT_PUBLISHED_LABEL.to_string(),
    }
}

/// Extract the YouTube video id from a `watch?v=` or `youtu.be/` link.
#[must_use]
pub fn extract_youtube_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse the timestamp formats the API is known to emit.
///
/// Naive values are taken as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_published_at<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_timestamp(s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("unrecognised timestamp: {s}"))),
    }
}
