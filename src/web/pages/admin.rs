//! Admin panel pages.

use maud::{html, Markup};

use crate::admin::AdminPanel;
use crate::components::{
    AdminVideoList, BaseLayout, Button, EmptyState, Form, FormGroup, Input, MessageArea,
};
use crate::constants::DELETE_CONFIRM_PROMPT;
use crate::models::Video;

/// Render the add form, the message area and every card of the panel.
#[must_use]
pub fn render_admin_page(panel: &AdminPanel, site_title: &str) -> Markup {
    let form = panel.add_form();
    let add_form = Form::post(
        "/admin/videos",
        html! {
            (FormGroup::new("Title", Input::text().name("title").id("title").value(&form.title).required()))
            (FormGroup::new(
                "YouTube link",
                Input::url().name("youtube_link").id("youtube_link").value(&form.youtube_link).required(),
            ))
            (Button::primary("Add Video").r#type("submit"))
        },
    )
    .id("videoForm");

    let content = html! {
        h1 { "Manage Videos" }
        section class="add-video" {
            h2 { "Add Video" }
            (add_form)
            (MessageArea::new("formMessage", panel.notice()))
        }
        section class="videos" {
            h2 { "All Videos" }
            @if panel.videos().is_empty() {
                (EmptyState::no_videos())
            }
            (AdminVideoList::new(panel))
        }
    };

    BaseLayout::new("Admin", site_title).render(content)
}

/// Ask the user to confirm deleting `video`.
#[must_use]
pub fn render_delete_confirm_page(video: &Video, site_title: &str) -> Markup {
    let action = format!("/admin/videos/{}/delete", video.id);
    let content = html! {
        h1 { "Delete Video" }
        article class="confirm-delete" {
            img src=(video.thumbnail_url) alt=(video.title);
            p { strong { (video.title) } }
            p { (DELETE_CONFIRM_PROMPT) }
            (Form::post(&action, html! {
                (Input::hidden("confirm", "yes"))
                (Button::danger("Delete").r#type("submit"))
                " "
                (Button::outline("Cancel").href("/admin"))
            }))
        }
    };

    BaseLayout::new("Delete Video", site_title).render(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::Command;
    use crate::models::VideoInput;

    fn video(id: i64) -> Video {
        Video {
            id,
            title: format!("Video {id}"),
            youtube_link: format!("https://youtu.be/v{id}"),
            thumbnail_url: format!("https://img.example.com/{id}.jpg"),
            published_at: None,
        }
    }

    fn loaded_panel() -> AdminPanel {
        let mut panel = AdminPanel::new();
        let Command::Reload(ticket) = panel.request_reload() else {
            panic!("expected reload");
        };
        panel.apply_reload(ticket, Ok(vec![video(1), video(2)]));
        panel
    }

    #[test]
    fn test_admin_page_renders_every_card() {
        let html = render_admin_page(&loaded_panel(), "Video Gallery").into_string();
        assert!(html.contains(r#"id="videoForm""#));
        assert!(html.contains(r#"id="formMessage""#));
        assert_eq!(html.matches("locked-card").count(), 2);
        assert!(!html.contains("No videos yet."));
    }

    #[test]
    fn test_admin_page_editing_row() {
        let mut panel = loaded_panel();
        panel.enable_edit(2);
        let html = render_admin_page(&panel, "Video Gallery").into_string();
        assert_eq!(html.matches("locked-card").count(), 1);
        assert_eq!(html.matches("editing-card").count(), 1);
    }

    #[test]
    fn test_admin_page_keeps_add_form_values() {
        let mut panel = loaded_panel();
        panel.submit_add(VideoInput::new("Pending title", "https://youtu.be/p"));
        let html = render_admin_page(&panel, "Video Gallery").into_string();
        assert!(html.contains(r#"value="Pending title""#));
    }

    #[test]
    fn test_delete_confirm_page() {
        let html = render_delete_confirm_page(&video(3), "Video Gallery").into_string();
        assert!(html.contains(DELETE_CONFIRM_PROMPT));
        assert!(html.contains(r#"action="/admin/videos/3/delete""#));
        assert!(html.contains(r#"name="confirm" value="yes""#));
    }
}
