//! Public listing controller.
//!
//! Holds the cards rendered from the last `GET /videos` response and filters
//! them by title without going back to the API.

use tracing::{error, info};

use crate::api::VideoApi;
use crate::constants::FETCH_FAILED_MESSAGE;
use crate::models::Video;

/// One rendered card and whether the current search shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCard {
    pub video: Video,
    pub visible: bool,
}

impl ListingCard {
    /// Text the search matches against.
    #[must_use]
    pub fn title_text(&self) -> &str {
        &self.video.title
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListingStatus {
    /// Nothing fetched yet.
    #[default]
    Pending,
    Loaded,
    /// The fetch failed; the message replaces the grid.
    Failed(String),
}

/// Controller behind the public video grid.
#[derive(Debug, Clone, Default)]
pub struct PublicListing {
    cards: Vec<ListingCard>,
    status: ListingStatus,
    query: String,
}

impl PublicListing {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch published videos and replace the grid.
    ///
    /// Failures are logged and replace the grid with an inline error. There
    /// is no retry.
    pub async fn fetch_videos(&mut self, api: &dyn VideoApi) {
        match api.published_videos().await {
            Ok(videos) => {
                info!(count = videos.len(), "Loaded published videos");
                self.render_videos(videos);
            }
            Err(e) => {
                error!("Error loading videos: {e}");
                self.cards.clear();
                self.status = ListingStatus::Failed(FETCH_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Replace every card with one per record, in order, all visible.
    pub fn render_videos(&mut self, videos: Vec<Video>) {
        self.cards = videos
            .into_iter()
            .map(|video| ListingCard {
                video,
                visible: true,
            })
            .collect();
        self.status = ListingStatus::Loaded;
        self.query.clear();
    }

    /// Show cards whose title contains `query`, ignoring case, and hide the
    /// rest. Returns how many cards are visible.
    pub fn search(&mut self, query: &str) -> usize {
        let needle = query.trim().to_lowercase();
        for card in &mut self.cards {
            card.visible = card.title_text().to_lowercase().contains(&needle);
        }
        self.query = query.trim().to_string();
        self.visible_count()
    }

    #[must_use]
    pub fn cards(&self) -> &[ListingCard] {
        &self.cards
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &ListingCard> {
        self.cards.iter().filter(|c| c.visible)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_cards().count()
    }

    #[must_use]
    pub fn status(&self) -> &ListingStatus {
        &self.status
    }

    /// Inline error message when the last fetch failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            ListingStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The trimmed query of the last search.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Newest published video, by publish date.
    #[must_use]
    pub fn latest(&self) -> Option<&Video> {
        self.cards
            .iter()
            .map(|c| &c.video)
            .filter(|v| v.published_at.is_some())
            .max_by_key(|v| v.published_at)
    }

    #[must_use]
    pub fn find(&self, id: i64) -> Option<&Video> {
        self.cards.iter().map(|c| &c.video).find(|v| v.id == id)
    }
}
