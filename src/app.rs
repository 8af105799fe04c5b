use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/overview", get(handlers::get_overview))
        .route("/api/tracks/:name", get(handlers::get_track))
        .with_state(state)
}
