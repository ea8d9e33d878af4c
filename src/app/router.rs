use crate::app::AppState;
use crate::handler::health::health_handler;
use crate::handler::pages::{landing_handler, video_handler};
use crate::handler::random::random_handler;
use axum::Router;
use axum::routing::get;

/// Build the HTTP router (pages + health).
pub fn main_router(state: AppState) -> Router {
    let v1_health_router = Router::new().route("/v1/health", get(health_handler));

    let pages_router = Router::new()
        .route("/", get(landing_handler))
        .route("/videos/{vid}", get(video_handler))
        .route("/random", get(random_handler))
        .route("/random/", get(random_handler))
        .with_state(state);

    Router::new().merge(v1_health_router).merge(pages_router)
}
