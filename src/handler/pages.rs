use crate::app::AppState;
use crate::view;
use axum::extract::{Path, State};
use axum::response::Html;
use tracing::info;

/// Handler for GET /
pub async fn landing_handler(State(state): State<AppState>) -> Html<String> {
    Html(view::landing(&state.landing_video_id))
}

/// Handler for GET /videos/{vid}
pub async fn video_handler(Path(vid): Path<String>) -> Html<String> {
    info!(video_id = %vid, "Video page requested");
    Html(view::video(&vid))
}
