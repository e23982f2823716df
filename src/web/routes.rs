use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use super::pages;
use super::AppState;
use crate::admin::{AdminPanel, Confirmation, Draft};
use crate::api::HttpVideoApi;
use crate::listing::PublicListing;
use crate::models::VideoInput;

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/watch", get(watch_latest))
        .route("/watch/:id", get(watch_video))
        .route("/admin", get(admin_panel))
        .route("/admin/videos", post(add_video))
        .route("/admin/videos/:id", post(save_video))
        .route("/admin/videos/:id/cancel", post(cancel_edit))
        .route(
            "/admin/videos/:id/delete",
            get(confirm_delete).post(delete_video),
        )
        .route("/healthz", get(health))
}

// ========== Public Routes ==========

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

async fn home(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let mut listing = PublicListing::new();
    listing.fetch_videos(&state.api).await;

    if let Some(query) = params.q.as_deref().filter(|q| !q.trim().is_empty()) {
        let visible = listing.search(query);
        tracing::debug!(query, visible, "Filtered public listing");
    }

    Html(pages::render_home_page(&listing, &state.config.site_title).into_string()).into_response()
}

async fn watch_latest(State(state): State<AppState>) -> Response {
    let mut listing = PublicListing::new();
    listing.fetch_videos(&state.api).await;

    match listing.latest() {
        Some(video) => Redirect::to(&format!("/watch/{}", video.id)).into_response(),
        None => Redirect::to("/").into_response(),
    }
}

async fn watch_video(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let mut listing = PublicListing::new();
    listing.fetch_videos(&state.api).await;

    if let Some(message) = listing.error_message() {
        return (StatusCode::BAD_GATEWAY, message.to_string()).into_response();
    }

    match listing.find(id) {
        Some(video) => {
            Html(pages::render_watch_page(video, &state.config.site_title).into_string())
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Video not found").into_response(),
    }
}

async fn health() -> &'static str {
    "OK"
}

// ========== Admin Routes ==========

/// API client carrying the caller's session cookie, when present.
fn admin_api(state: &AppState, headers: &HeaderMap) -> HttpVideoApi {
    let name = state.config.session_cookie_name.as_str();
    let session = headers
        .get_all("cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        });

    match session {
        Some(value) => state.api.clone().with_session(format!("{name}={value}")),
        None => state.api.clone(),
    }
}

/// Load the list for rendering when no command reloaded it already.
async fn load_unless_reloaded(panel: &mut AdminPanel, api: &HttpVideoApi) {
    if !panel.has_requested_reload() {
        panel.load_videos(api).await;
    }
}

fn render_panel(state: &AppState, panel: &AdminPanel) -> Response {
    Html(pages::render_admin_page(panel, &state.config.site_title).into_string()).into_response()
}

#[derive(Debug, Deserialize)]
pub struct AdminParams {
    edit: Option<i64>,
}

async fn admin_panel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AdminParams>,
) -> Response {
    let api = admin_api(&state, &headers);
    let mut panel = AdminPanel::new();
    panel.load_videos(&api).await;

    if let Some(id) = params.edit {
        panel.enable_edit(id);
    }

    render_panel(&state, &panel)
}

async fn add_video(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<VideoInput>,
) -> Response {
    let api = admin_api(&state, &headers);
    let mut panel = AdminPanel::new();

    let command = panel.submit_add(input);
    panel.run(&api, command).await;
    load_unless_reloaded(&mut panel, &api).await;

    render_panel(&state, &panel)
}

async fn save_video(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Form(input): Form<VideoInput>,
) -> Response {
    let api = admin_api(&state, &headers);
    let mut panel = AdminPanel::new();
    // Loaded first so a failed save can re-render the row being edited.
    panel.load_videos(&api).await;

    panel.open_edit(id, Draft::from(input));
    if let Some(command) = panel.save_edit(id) {
        panel.run(&api, command).await;
    }

    render_panel(&state, &panel)
}

async fn cancel_edit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let api = admin_api(&state, &headers);
    let mut panel = AdminPanel::new();

    let command = panel.cancel_edit(id);
    panel.run(&api, command).await;

    render_panel(&state, &panel)
}

async fn confirm_delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let api = admin_api(&state, &headers);
    let mut panel = AdminPanel::new();
    panel.load_videos(&api).await;

    match panel.store().get(id) {
        Some(video) => Html(
            pages::render_delete_confirm_page(video, &state.config.site_title).into_string(),
        )
        .into_response(),
        None if panel.notice().is_some() => render_panel(&state, &panel),
        None => (StatusCode::NOT_FOUND, "Video not found").into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    confirm: Option<String>,
}

async fn delete_video(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Form(form): Form<DeleteForm>,
) -> Response {
    let api = admin_api(&state, &headers);
    let mut panel = AdminPanel::new();

    let confirmation = Confirmation::from(form.confirm.as_deref() == Some("yes"));
    if let Some(command) = panel.delete_video(id, confirmation) {
        panel.run(&api, command).await;
    }
    load_unless_reloaded(&mut panel, &api).await;

    render_panel(&state, &panel)
}
