//! Card components for displaying videos.
//!
//! Public cards are read-only; admin cards render the row's
//! [`RowState`](crate::admin::RowState) as locked inputs with Edit/Delete or
//! writable inputs with Save/Cancel.

use maud::{html, Markup, Render};

use super::button::Button;
use super::form::Input;
use crate::admin::{AdminPanel, Draft, RowState};
use crate::listing::ListingCard;
use crate::models::Video;

/// A read-only card for the public grid.
#[derive(Debug, Clone)]
pub struct VideoCard<'a> {
    pub video: &'a Video,
    pub hidden: bool,
}

impl<'a> VideoCard<'a> {
    #[must_use]
    pub const fn new(video: &'a Video) -> Self {
        Self {
            video,
            hidden: false,
        }
    }

    #[must_use]
    pub const fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

impl Render for VideoCard<'_> {
    fn render(&self) -> Markup {
        let video = self.video;
        html! {
            article class="video-card" data-video-id=(video.id) hidden[self.hidden] {
                img src=(video.thumbnail_url) alt=(video.title) loading="lazy";
                h3 { (video.title) }
                a href=(video.youtube_link) target="_blank" rel="noopener noreferrer" { "Watch Video" }
            }
        }
    }
}

/// The public grid: one card per rendered record, in order.
#[derive(Debug, Clone)]
pub struct VideoGrid<'a> {
    pub cards: &'a [ListingCard],
}

impl<'a> VideoGrid<'a> {
    #[must_use]
    pub const fn new(cards: &'a [ListingCard]) -> Self {
        Self { cards }
    }
}

impl Render for VideoGrid<'_> {
    fn render(&self) -> Markup {
        html! {
            div id="videos" class="video-grid" {
                @for card in self.cards {
                    (VideoCard::new(&card.video).hidden(!card.visible))
                }
            }
        }
    }
}

/// An editable card for the admin list.
#[derive(Debug, Clone)]
pub struct AdminVideoCard<'a> {
    pub video: &'a Video,
    pub state: &'a RowState,
}

impl<'a> AdminVideoCard<'a> {
    #[must_use]
    pub const fn new(video: &'a Video, state: &'a RowState) -> Self {
        Self { video, state }
    }

    fn render_locked(&self, title_id: &str, link_id: &str) -> Markup {
        let id = self.video.id;
        let edit_href = format!("/admin?edit={id}");
        let delete_href = format!("/admin/videos/{id}/delete");
        html! {
            (Input::text().id(title_id).class("locked").value(&self.video.title).readonly())
            (Input::url().id(link_id).class("locked").value(&self.video.youtube_link).readonly())
            div class="card-actions" {
                (Button::secondary("Edit").href(&edit_href).class("edit-btn"))
                (Button::danger("Delete").href(&delete_href).class("danger-btn"))
            }
        }
    }

    fn render_editing(&self, draft: &Draft, title_id: &str, link_id: &str) -> Markup {
        let id = self.video.id;
        let save_action = format!("/admin/videos/{id}");
        let cancel_action = format!("/admin/videos/{id}/cancel");
        html! {
            form action=(save_action) method="post" class="edit-form" {
                (Input::text().name("title").id(title_id).value(&draft.title).required().autofocus())
                (Input::url().name("youtube_link").id(link_id).value(&draft.youtube_link).required())
                div class="card-actions" {
                    (Button::primary("Save").r#type("submit").class("save-btn"))
                    (Button::outline("Cancel").r#type("submit").formaction(&cancel_action).class("cancel-btn"))
                }
            }
        }
    }
}

impl Render for AdminVideoCard<'_> {
    fn render(&self) -> Markup {
        let video = self.video;
        let title_id = format!("title-{}", video.id);
        let link_id = format!("link-{}", video.id);
        let state_class = match self.state {
            RowState::Locked => "video-card locked-card",
            RowState::Editing(_) => "video-card editing-card",
        };

        html! {
            article class=(state_class) data-video-id=(video.id) {
                img src=(video.thumbnail_url) alt=(video.title) loading="lazy";
                p class="publish-date" { (video.publish_label()) }
                @match self.state {
                    RowState::Locked => {
                        (self.render_locked(&title_id, &link_id))
                    }
                    RowState::Editing(draft) => {
                        (self.render_editing(draft, &title_id, &link_id))
                    }
                }
            }
        }
    }
}

/// The admin card list.
#[derive(Debug, Clone, Copy)]
pub struct AdminVideoList<'a> {
    pub panel: &'a AdminPanel,
}

impl<'a> AdminVideoList<'a> {
    #[must_use]
    pub const fn new(panel: &'a AdminPanel) -> Self {
        Self { panel }
    }
}

impl Render for AdminVideoList<'_> {
    fn render(&self) -> Markup {
        html! {
            div id="videoList" class="video-list" {
                @for video in self.panel.videos() {
                    (AdminVideoCard::new(video, self.panel.row_state(video.id)))
                }
            }
        }
    }
}

/// Shown in place of a grid with nothing in it.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl EmptyState<'_> {
    #[must_use]
    pub const fn no_videos() -> Self {
        Self {
            message: "No videos yet.",
        }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            p class="empty-state" { (self.message) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NOT_PUBLISHED_LABEL;
    use chrono::{TimeZone, Utc};

    fn sample_video(id: i64) -> Video {
        Video {
            id,
            title: format!("Service {id}"),
            youtube_link: format!("https://youtu.be/v{id}"),
            thumbnail_url: format!("https://img.youtube.com/vi/v{id}/hqdefault.jpg"),
            published_at: None,
        }
    }

    #[test]
    fn test_video_card_basic() {
        let video = sample_video(1);
        let html = VideoCard::new(&video).render().into_string();

        assert!(html.contains("video-card"));
        assert!(html.contains("<h3>Service 1</h3>"));
        assert!(html.contains(r#"href="https://youtu.be/v1""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("Watch Video"));
        assert!(!html.contains("hidden"));
    }

    #[test]
    fn test_video_grid_preserves_order_and_visibility() {
        let cards = vec![
            ListingCard {
                video: sample_video(2),
                visible: true,
            },
            ListingCard {
                video: sample_video(1),
                visible: false,
            },
        ];
        let html = VideoGrid::new(&cards).render().into_string();

        assert_eq!(html.matches("<article").count(), 2);
        let first = html.find(r#"data-video-id="2""#).unwrap();
        let second = html.find(r#"data-video-id="1""#).unwrap();
        assert!(first < second);
        assert_eq!(html.matches(" hidden").count(), 1);
    }

    #[test]
    fn test_admin_card_locked() {
        let video = sample_video(5);
        let html = AdminVideoCard::new(&video, &RowState::Locked)
            .render()
            .into_string();

        assert!(html.contains(r#"id="title-5""#));
        assert!(html.contains(r#"id="link-5""#));
        assert_eq!(html.matches("readonly").count(), 2);
        assert!(html.contains("Edit"));
        assert!(html.contains("Delete"));
        assert!(!html.contains("Save"));
        assert!(html.contains(NOT_PUBLISHED_LABEL));
    }

    #[test]
    fn test_admin_card_editing() {
        let video = sample_video(5);
        let state = RowState::Editing(Draft::new("Draft title", "https://youtu.be/draft"));
        let html = AdminVideoCard::new(&video, &state).render().into_string();

        assert!(!html.contains("readonly"));
        assert!(html.contains(r#"value="Draft title""#));
        assert!(html.contains("autofocus"));
        assert!(html.contains("Save"));
        assert!(html.contains("Cancel"));
        assert!(html.contains(r#"formaction="/admin/videos/5/cancel""#));
        assert!(!html.contains(">Delete<"));
    }

    #[test]
    fn test_admin_card_published_label() {
        let mut video = sample_video(3);
        video.published_at = Some(Utc.with_ymd_and_hms(2024, 2, 29, 10, 0, 0).unwrap());
        let html = AdminVideoCard::new(&video, &RowState::Locked)
            .render()
            .into_string();

        assert!(html.contains("Published on 29 February 2024"));
        assert!(!html.contains(NOT_PUBLISHED_LABEL));
    }

    #[test]
    fn test_empty_state() {
        let html = EmptyState::no_videos().render().into_string();
        assert!(html.contains("No videos yet."));
    }
}
