use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/style.css", get(handlers::style))
        .route("/healthz", get(handlers::healthz))
        .route("/daily-routine", get(handlers::daily_routine))
        .route("/daily-routine/post", post(handlers::create_post))
        .route("/daily-routine/reply/:post_id", post(handlers::create_reply))
        .route("/contact", post(handlers::contact))
        .route("/blogs", post(handlers::save_blog))
        .route("/blogs/:id/delete", post(handlers::delete_blog))
        .with_state(state)
}
