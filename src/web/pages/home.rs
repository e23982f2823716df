//! Public listing page.

use maud::{html, Markup};

use crate::components::{BaseLayout, Button, EmptyState, Form, Input, VideoGrid};
use crate::listing::PublicListing;

/// Render the public video grid with its search bar.
///
/// Cards hidden by the current search are still emitted (with `hidden`) so
/// the client-side search can show them again without a reload.
#[must_use]
pub fn render_home_page(listing: &PublicListing, site_title: &str) -> Markup {
    let search = Form::get(
        "/",
        html! {
            (Input::search()
                .name("q")
                .id("searchInput")
                .value(listing.query())
                .placeholder("Search videos"))
            (Button::primary("Search").r#type("submit").id("searchBtn"))
        },
    )
    .id("searchForm")
    .class("search-bar");

    let content = html! {
        h1 { "Videos" }
        (search)
        @if let Some(message) = listing.error_message() {
            div id="videos" class="video-grid" {
                p class="fetch-error" { (message) }
            }
        } @else if listing.cards().is_empty() {
            div id="videos" class="video-grid" {
                (EmptyState::no_videos())
            }
        } @else {
            (VideoGrid::new(listing.cards()))
        }
    };

    BaseLayout::new("Videos", site_title)
        .with_script("/static/js/search.js")
        .render(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Video;

    fn video(id: i64, title: &str) -> Video {
        Video {
            id,
            title: title.to_string(),
            youtube_link: format!("https://youtu.be/v{id}"),
            thumbnail_url: format!("https://img.example.com/{id}.jpg"),
            published_at: None,
        }
    }

    #[test]
    fn test_home_page_lists_cards() {
        let mut listing = PublicListing::new();
        listing.render_videos(vec![video(1, "Alpha"), video(2, "Beta")]);
        let html = render_home_page(&listing, "Video Gallery").into_string();

        assert!(html.contains(r#"id="searchInput""#));
        assert!(html.contains(r#"id="searchBtn""#));
        assert_eq!(html.matches(r#"class="video-card""#).count(), 2);
        assert!(html.contains("/static/js/search.js"));
    }

    #[test]
    fn test_home_page_keeps_query() {
        let mut listing = PublicListing::new();
        listing.render_videos(vec![video(1, "Alpha"), video(2, "Beta")]);
        listing.search("alp");
        let html = render_home_page(&listing, "Video Gallery").into_string();

        assert!(html.contains(r#"value="alp""#));
        assert_eq!(html.matches(" hidden").count(), 1);
    }

    #[test]
    fn test_home_page_empty() {
        let mut listing = PublicListing::new();
        listing.render_videos(Vec::new());
        let html = render_home_page(&listing, "Video Gallery").into_string();
        assert!(html.contains("No videos yet."));
    }
}
