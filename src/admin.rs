//! Admin panel controller.
//!
//! The panel state is the store of the last accepted list response plus an
//! explicit [`RowState`] per card. User actions are synchronous transitions
//! that may return a [`Command`]; [`AdminPanel::run`] executes commands
//! against a [`VideoApi`] and follows up with the reload every successful
//! mutation requires.

use std::collections::HashMap;

use tracing::{debug, error, info, warn};

use crate::api::{ApiError, VideoApi};
use crate::constants::{
    ADD_FAILED_MESSAGE, ADD_SUCCESS_MESSAGE, DELETE_FAILED_MESSAGE, LOAD_FAILED_MESSAGE,
    UPDATE_FAILED_MESSAGE,
};
use crate::models::{Video, VideoInput};
use crate::notice::Notice;
use crate::store::{ReloadSequencer, ReloadTicket, VideoStore};

static LOCKED: RowState = RowState::Locked;

/// Current title and link input values of an editing row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub youtube_link: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, youtube_link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            youtube_link: youtube_link.into(),
        }
    }
}

impl From<&Video> for Draft {
    fn from(video: &Video) -> Self {
        Self::new(video.title.clone(), video.youtube_link.clone())
    }
}

impl From<Draft> for VideoInput {
    fn from(draft: Draft) -> Self {
        Self::new(draft.title, draft.youtube_link)
    }
}

impl From<VideoInput> for Draft {
    fn from(input: VideoInput) -> Self {
        Self::new(input.title, input.youtube_link)
    }
}

/// Per-card UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RowState {
    /// Read-only inputs; actions are Edit and Delete.
    #[default]
    Locked,
    /// Writable inputs holding the draft; actions are Save and Cancel.
    Editing(Draft),
}

impl RowState {
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self, Self::Locked)
    }
}

/// Whether the user confirmed a destructive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Reload(ReloadTicket),
    Create(VideoInput),
    Update { id: i64, input: VideoInput },
    Delete { id: i64 },
}

/// What happened to a reload response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    Applied,
    Stale,
    Failed,
}

/// Controller behind the admin video list and add form.
#[derive(Debug, Clone, Default)]
pub struct AdminPanel {
    store: VideoStore,
    rows: HashMap<i64, RowState>,
    add_form: Draft,
    notice: Option<Notice>,
    // Set while `notice` holds the error of a failed reload.
    notice_from_reload: bool,
    sequencer: ReloadSequencer,
}

impl AdminPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Transitions ==========

    /// Start a full reload. Any reload already in flight becomes stale.
    pub fn request_reload(&mut self) -> Command {
        Command::Reload(self.issue_ticket())
    }

    fn issue_ticket(&mut self) -> ReloadTicket {
        self.sequencer.issue()
    }

    /// Unlock the inputs of one card. Returns `false` for unknown ids.
    pub fn enable_edit(&mut self, id: i64) -> bool {
        let Some(video) = self.store.get(id) else {
            warn!(id, "Edit requested for unknown video");
            return false;
        };
        let draft = Draft::from(video);
        self.rows.insert(id, RowState::Editing(draft));
        true
    }

    /// Put the card for `id` into editing with the submitted values.
    ///
    /// Unlike [`AdminPanel::enable_edit`], the card does not need to be
    /// loaded: a save carries its own values and is sent regardless.
    pub fn open_edit(&mut self, id: i64, draft: Draft) {
        self.rows.insert(id, RowState::Editing(draft));
    }

    /// Replace the input values of an editing card.
    pub fn update_draft(&mut self, id: i64, draft: Draft) -> bool {
        match self.rows.get_mut(&id) {
            Some(RowState::Editing(current)) => {
                *current = draft;
                true
            }
            _ => false,
        }
    }

    /// Persist the draft of an editing card.
    pub fn save_edit(&mut self, id: i64) -> Option<Command> {
        match self.rows.get(&id) {
            Some(RowState::Editing(draft)) => Some(Command::Update {
                id,
                input: draft.clone().into(),
            }),
            _ => {
                debug!(id, "Save requested for a locked row");
                None
            }
        }
    }

    /// Discard unsaved edits. The reload resets every row, not only `id`.
    pub fn cancel_edit(&mut self, id: i64) -> Command {
        debug!(id, "Cancelling edit");
        self.request_reload()
    }

    /// Delete a video once the user has confirmed.
    pub fn delete_video(&mut self, id: i64, confirmation: Confirmation) -> Option<Command> {
        match confirmation {
            Confirmation::Confirmed => Some(Command::Delete { id }),
            Confirmation::Declined => None,
        }
    }

    /// Submit the add-video form.
    pub fn submit_add(&mut self, input: VideoInput) -> Command {
        self.add_form = Draft::from(input.clone());
        Command::Create(input)
    }

    /// Apply the response for a reload.
    ///
    /// Only the most recently issued ticket is applied. A successful reload
    /// returns every row to [`RowState::Locked`]; a failed one leaves the
    /// previous cards and row states untouched.
    pub fn apply_reload(
        &mut self,
        ticket: ReloadTicket,
        result: Result<Vec<Video>, ApiError>,
    ) -> ReloadOutcome {
        if !self.sequencer.is_current(ticket) {
            debug!(ticket = ticket.sequence(), "Discarding stale reload response");
            return ReloadOutcome::Stale;
        }

        match result {
            Ok(videos) => {
                self.sequencer.accept(ticket);
                let diff = self.store.replace(videos);
                debug!(
                    added = diff.added.len(),
                    removed = diff.removed.len(),
                    changed = diff.changed.len(),
                    "Reloaded admin video list"
                );
                self.rows.clear();
                if self.notice_from_reload {
                    self.notice = None;
                    self.notice_from_reload = false;
                }
                ReloadOutcome::Applied
            }
            Err(e) => {
                error!("Error loading videos: {e}");
                // The outcome of a mutation outranks the reload that follows it.
                if self.notice.is_none() || self.notice_from_reload {
                    let message = e
                        .server_message()
                        .unwrap_or_else(|| LOAD_FAILED_MESSAGE.to_string());
                    self.notice = Some(Notice::error(message));
                    self.notice_from_reload = true;
                }
                ReloadOutcome::Failed
            }
        }
    }

    // ========== Effects ==========

    /// Fetch every video and re-render all cards locked.
    pub async fn load_videos(&mut self, api: &dyn VideoApi) -> ReloadOutcome {
        let ticket = self.issue_ticket();
        let result = api.all_videos().await;
        self.apply_reload(ticket, result)
    }

    /// Execute `command` and every follow-up it produces.
    pub async fn run(&mut self, api: &dyn VideoApi, command: Command) {
        let mut next = Some(command);
        while let Some(command) = next {
            next = self.execute(api, command).await;
        }
    }

    /// Execute one command, returning the follow-up reload on success.
    pub async fn execute(&mut self, api: &dyn VideoApi, command: Command) -> Option<Command> {
        match command {
            Command::Reload(ticket) => {
                let result = api.all_videos().await;
                self.apply_reload(ticket, result);
                None
            }
            Command::Create(input) => match api.create_video(&input).await {
                Ok(()) => {
                    info!(title = %input.title, "Video added");
                    self.notify(Notice::success(ADD_SUCCESS_MESSAGE));
                    self.add_form = Draft::default();
                    Some(self.request_reload())
                }
                Err(e) => {
                    error!("Failed to add video: {e}");
                    let message = e
                        .server_message()
                        .unwrap_or_else(|| ADD_FAILED_MESSAGE.to_string());
                    self.notify(Notice::error(message));
                    None
                }
            },
            Command::Update { id, input } => match api.update_video(id, &input).await {
                Ok(()) => {
                    info!(id, "Video updated");
                    Some(self.request_reload())
                }
                Err(e) => {
                    error!(id, "Failed to update video: {e}");
                    self.notify(Notice::error(UPDATE_FAILED_MESSAGE));
                    None
                }
            },
            Command::Delete { id } => match api.delete_video(id).await {
                Ok(()) => {
                    info!(id, "Video deleted");
                    Some(self.request_reload())
                }
                Err(e) => {
                    error!(id, "Failed to delete video: {e}");
                    self.notify(Notice::error(DELETE_FAILED_MESSAGE));
                    None
                }
            },
        }
    }

    // ========== Accessors ==========

    #[must_use]
    pub fn videos(&self) -> &[Video] {
        self.store.as_slice()
    }

    #[must_use]
    pub fn store(&self) -> &VideoStore {
        &self.store
    }

    /// State of the card for `id`; unknown and untouched rows are locked.
    #[must_use]
    pub fn row_state(&self, id: i64) -> &RowState {
        self.rows.get(&id).unwrap_or(&LOCKED)
    }

    /// Ids of every card currently being edited.
    #[must_use]
    pub fn editing_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self
            .rows
            .iter()
            .filter(|(_, state)| !state.is_locked())
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Current values of the add-video form.
    #[must_use]
    pub fn add_form(&self) -> &Draft {
        &self.add_form
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Whether any reload has been requested since the panel was created.
    #[must_use]
    pub fn has_requested_reload(&self) -> bool {
        self.sequencer.last_issued().is_some()
    }

    fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_from_reload = false;
    }
}
