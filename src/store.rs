//! In-memory projection of the latest list response.
//!
//! [`VideoStore`] keeps the server's ordering and an id index, and reports
//! what changed on each replacement. [`ReloadSequencer`] hands out tickets so
//! that only the most recently requested reload is ever applied.

use std::collections::HashMap;

use tracing::warn;

use crate::models::Video;

/// Ordered list of videos keyed by id.
#[derive(Debug, Clone, Default)]
pub struct VideoStore {
    videos: Vec<Video>,
    index: HashMap<i64, usize>,
}

/// Ids that changed between two store contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreDiff {
    pub added: Vec<i64>,
    pub removed: Vec<i64>,
    pub changed: Vec<i64>,
}

impl StoreDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

impl VideoStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a server response.
    #[must_use]
    pub fn from_videos(videos: Vec<Video>) -> Self {
        let mut store = Self::new();
        store.replace(videos);
        store
    }

    /// Replace the contents with a fresh server response.
    ///
    /// Order follows the response. A repeated id keeps its first position and
    /// takes the later record's values.
    pub fn replace(&mut self, videos: Vec<Video>) -> StoreDiff {
        let mut next: Vec<Video> = Vec::with_capacity(videos.len());
        let mut index = HashMap::with_capacity(videos.len());

        for video in videos {
            if let Some(&pos) = index.get(&video.id) {
                warn!(id = video.id, "Duplicate video id in response");
                next[pos] = video;
            } else {
                index.insert(video.id, next.len());
                next.push(video);
            }
        }

        let diff = self.diff_against(&next, &index);
        self.videos = next;
        self.index = index;
        diff
    }

    fn diff_against(&self, next: &[Video], next_index: &HashMap<i64, usize>) -> StoreDiff {
        let mut diff = StoreDiff::default();
        for video in next {
            match self.get(video.id) {
                None => diff.added.push(video.id),
                Some(old) if old != video => diff.changed.push(video.id),
                Some(_) => {}
            }
        }
        diff.removed = self
            .videos
            .iter()
            .map(|v| v.id)
            .filter(|id| !next_index.contains_key(id))
            .collect();
        diff
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Video> {
        self.index.get(&id).map(|&pos| &self.videos[pos])
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Video] {
        &self.videos
    }

    pub fn iter(&self) -> impl Iterator<Item = &Video> {
        self.videos.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Token identifying one reload request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReloadTicket(u64);

impl ReloadTicket {
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing reload tickets.
#[derive(Debug, Clone, Default)]
pub struct ReloadSequencer {
    issued: u64,
    applied: Option<u64>,
}

impl ReloadSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new reload. Every earlier ticket becomes stale.
    pub fn issue(&mut self) -> ReloadTicket {
        self.issued += 1;
        ReloadTicket(self.issued)
    }

    /// Whether `ticket` is the most recently issued one.
    #[must_use]
    pub fn is_current(&self, ticket: ReloadTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Record that the response for `ticket` is being applied.
    ///
    /// Returns `false`, and records nothing, for stale tickets.
    pub fn accept(&mut self, ticket: ReloadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.applied = Some(ticket.0);
        true
    }

    /// Sequence number of the last issued ticket.
    #[must_use]
    pub fn last_issued(&self) -> Option<u64> {
        (self.issued > 0).then_some(self.issued)
    }

    /// Sequence number of the last applied reload.
    #[must_use]
    pub fn last_applied(&self) -> Option<u64> {
        self.applied
    }
}
