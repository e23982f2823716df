//! Single-video watch page.

use maud::{html, Markup};

use crate::components::{BaseLayout, Button};
use crate::models::Video;

/// Render the embedded player for `video`, or a plain link when the video
/// is not on YouTube.
#[must_use]
pub fn render_watch_page(video: &Video, site_title: &str) -> Markup {
    let content = html! {
        article class="watch" {
            h1 { (video.title) }
            p class="publish-date" { (video.publish_label()) }
            @if let Some(embed) = video.embed_url() {
                div class="player" {
                    iframe
                        src=(embed)
                        title=(video.title)
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen {}
                }
            } @else {
                img src=(video.thumbnail_url) alt=(video.title);
            }
            p {
                (Button::outline("Open on YouTube").href(&video.youtube_link))
                " "
                (Button::outline("All videos").href("/"))
            }
        }
    };

    BaseLayout::new(&video.title, site_title).render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(link: &str) -> Video {
        Video {
            id: 1,
            title: "Intro".to_string(),
            youtube_link: link.to_string(),
            thumbnail_url: "https://img.example.com/1.jpg".to_string(),
            published_at: None,
        }
    }

    #[test]
    fn test_watch_page_embeds_youtube() {
        let html = render_watch_page(&video("https://www.youtube.com/watch?v=abc"), "Video Gallery")
            .into_string();
        assert!(html.contains(r#"src="https://www.youtube.com/embed/abc""#));
        assert!(html.contains("<title>Intro - Video Gallery</title>"));
    }

    #[test]
    fn test_watch_page_without_youtube_id() {
        let html = render_watch_page(&video("https://vimeo.com/1"), "Video Gallery").into_string();
        assert!(!html.contains("iframe"));
        assert!(html.contains(r#"href="https://vimeo.com/1""#));
    }
}
