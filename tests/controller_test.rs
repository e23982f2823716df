//! Integration tests for the listing and admin controllers against a mock API.

use std::time::Duration;

use serde_json::json;
use video_showcase::admin::{AdminPanel, Confirmation, Draft, ReloadOutcome, RowState};
use video_showcase::api::HttpVideoApi;
use video_showcase::constants::{
    ADD_FAILED_MESSAGE, ADD_SUCCESS_MESSAGE, DELETE_FAILED_MESSAGE, FETCH_FAILED_MESSAGE,
    UPDATE_FAILED_MESSAGE,
};
use video_showcase::listing::{ListingStatus, PublicListing};
use video_showcase::models::VideoInput;
use video_showcase::notice::Notice;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> HttpVideoApi {
    HttpVideoApi::new(&server.uri(), Duration::from_secs(5)).expect("Failed to build client")
}

fn video_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "youtube_link": format!("https://youtu.be/v{id}"),
        "thumbnail_url": format!("https://img.youtube.com/vi/v{id}/hqdefault.jpg"),
        "published_at": null,
    })
}

/// Mount `GET /admin/videos/all` returning `first` once, then `rest` forever.
async fn mount_admin_list(server: &MockServer, first: serde_json::Value, rest: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/admin/videos/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(first))
        .up_to_n_times(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/videos/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rest))
        .mount(server)
        .await;
}

// ========== Public listing ==========

#[tokio::test]
async fn test_listing_fetch_renders_one_card_per_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            video_json(3, "Three"),
            video_json(1, "One"),
            video_json(2, "Two"),
        ])))
        .mount(&server)
        .await;

    let mut listing = PublicListing::new();
    listing.fetch_videos(&client(&server)).await;

    let ids: Vec<i64> = listing.cards().iter().map(|c| c.video.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(listing.status(), &ListingStatus::Loaded);
    assert_eq!(listing.visible_count(), 3);
}

#[tokio::test]
async fn test_listing_fetch_failure_shows_inline_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut listing = PublicListing::new();
    listing.render_videos(Vec::new());
    listing.fetch_videos(&client(&server)).await;

    assert_eq!(listing.error_message(), Some(FETCH_FAILED_MESSAGE));
    assert!(listing.cards().is_empty());
}

#[tokio::test]
async fn test_listing_search_does_not_refetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            video_json(1, "Morning Devotion"),
            video_json(2, "Evening Devotion"),
            video_json(3, "Choir Practice"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut listing = PublicListing::new();
    listing.fetch_videos(&client(&server)).await;

    assert_eq!(listing.search("devotion"), 2);
    assert_eq!(listing.search("CHOIR"), 1);
    assert_eq!(listing.search("nothing"), 0);
    assert_eq!(listing.search(""), 3);
}

// ========== Admin panel ==========

#[tokio::test]
async fn test_admin_load_locks_every_row() {
    let server = MockServer::start().await;
    mount_admin_list(
        &server,
        json!([video_json(1, "One"), video_json(2, "Two")]),
        json!([video_json(1, "One"), video_json(2, "Two")]),
    )
    .await;

    let api = client(&server);
    let mut panel = AdminPanel::new();
    assert_eq!(panel.load_videos(&api).await, ReloadOutcome::Applied);
    panel.enable_edit(2);
    assert_eq!(panel.load_videos(&api).await, ReloadOutcome::Applied);

    assert_eq!(panel.videos().len(), 2);
    assert!(panel.editing_ids().is_empty());
}

#[tokio::test]
async fn test_admin_add_success_clears_form_and_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/video"))
        .respond_with(ResponseTemplate::new(201).set_body_json(video_json(7, "Intro")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/videos/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([video_json(7, "Intro")])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let mut panel = AdminPanel::new();
    let command = panel.submit_add(VideoInput::new("Intro", "https://youtu.be/x"));
    panel.run(&api, command).await;

    assert_eq!(panel.add_form(), &Draft::default());
    assert_eq!(panel.notice(), Some(&Notice::success(ADD_SUCCESS_MESSAGE)));
    assert_eq!(panel.videos().len(), 1);
    assert_eq!(panel.videos()[0].title, "Intro");
}

#[tokio::test]
async fn test_admin_add_failure_keeps_form_and_shows_server_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/video"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Invalid YouTube link"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/videos/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let api = client(&server);
    let mut panel = AdminPanel::new();
    let command = panel.submit_add(VideoInput::new("Intro", "nope"));
    panel.run(&api, command).await;

    assert_eq!(panel.add_form(), &Draft::new("Intro", "nope"));
    assert_eq!(panel.notice(), Some(&Notice::error("Invalid YouTube link")));
}

#[tokio::test]
async fn test_admin_add_failure_without_body_uses_generic_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/video"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = client(&server);
    let mut panel = AdminPanel::new();
    let command = panel.submit_add(VideoInput::new("Intro", "https://youtu.be/x"));
    panel.run(&api, command).await;

    assert_eq!(panel.notice(), Some(&Notice::error(ADD_FAILED_MESSAGE)));
}

#[tokio::test]
async fn test_admin_save_success_reloads_locked() {
    let server = MockServer::start().await;
    mount_admin_list(
        &server,
        json!([video_json(5, "Old title")]),
        json!([video_json(5, "New title")]),
    )
    .await;
    Mock::given(method("PUT"))
        .and(path("/admin/video/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(video_json(5, "New title")))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let mut panel = AdminPanel::new();
    panel.load_videos(&api).await;
    assert!(panel.enable_edit(5));
    panel.update_draft(5, Draft::new("New title", "https://youtu.be/v5"));
    let command = panel.save_edit(5).expect("editing row saves");
    panel.run(&api, command).await;

    assert_eq!(panel.row_state(5), &RowState::Locked);
    assert_eq!(panel.videos()[0].title, "New title");
    assert!(panel.notice().is_none());
}

#[tokio::test]
async fn test_admin_save_failure_keeps_row_editing() {
    let server = MockServer::start().await;
    mount_admin_list(
        &server,
        json!([video_json(5, "Old title")]),
        json!([video_json(5, "Old title")]),
    )
    .await;
    Mock::given(method("PUT"))
        .and(path("/admin/video/5"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;

    let api = client(&server);
    let mut panel = AdminPanel::new();
    panel.load_videos(&api).await;
    panel.enable_edit(5);
    let draft = Draft::new("Unsaved", "https://youtu.be/unsaved");
    panel.update_draft(5, draft.clone());
    let command = panel.save_edit(5).expect("editing row saves");
    panel.run(&api, command).await;

    assert_eq!(panel.row_state(5), &RowState::Editing(draft));
    assert_eq!(panel.notice(), Some(&Notice::error(UPDATE_FAILED_MESSAGE)));
}

#[tokio::test]
async fn test_admin_cancel_discards_every_edit() {
    let server = MockServer::start().await;
    mount_admin_list(
        &server,
        json!([video_json(1, "One"), video_json(2, "Two")]),
        json!([video_json(1, "One"), video_json(2, "Two")]),
    )
    .await;

    let api = client(&server);
    let mut panel = AdminPanel::new();
    panel.load_videos(&api).await;
    panel.enable_edit(1);
    panel.enable_edit(2);
    panel.update_draft(2, Draft::new("scratch", "scratch"));

    let command = panel.cancel_edit(1);
    panel.run(&api, command).await;

    assert!(panel.editing_ids().is_empty());
    assert_eq!(panel.store().get(2).map(|v| v.title.as_str()), Some("Two"));
}

#[tokio::test]
async fn test_admin_delete_success_reloads() {
    let server = MockServer::start().await;
    mount_admin_list(
        &server,
        json!([video_json(1, "One"), video_json(2, "Two")]),
        json!([video_json(2, "Two")]),
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/video/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let mut panel = AdminPanel::new();
    panel.load_videos(&api).await;
    let command = panel
        .delete_video(1, Confirmation::Confirmed)
        .expect("confirmed delete");
    panel.run(&api, command).await;

    let ids: Vec<i64> = panel.videos().iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![2]);
}

#[tokio::test]
async fn test_admin_delete_failure_leaves_list_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/videos/all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([video_json(1, "One"), video_json(2, "Two")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/video/1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let mut panel = AdminPanel::new();
    panel.load_videos(&api).await;
    let command = panel
        .delete_video(1, Confirmation::Confirmed)
        .expect("confirmed delete");
    panel.run(&api, command).await;

    assert_eq!(panel.videos().len(), 2);
    assert_eq!(panel.notice(), Some(&Notice::error(DELETE_FAILED_MESSAGE)));
}

#[tokio::test]
async fn test_admin_declined_delete_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let mut panel = AdminPanel::new();
    assert!(panel.delete_video(1, Confirmation::Declined).is_none());
}
