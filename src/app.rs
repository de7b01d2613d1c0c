use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/login", post(handlers::login))
        .route("/api/logout", post(handlers::logout))
        .route("/api/session", get(handlers::session))
        .route("/api/chores", get(handlers::list_chores).post(handlers::create_chore))
        .route(
            "/api/chores/:id",
            put(handlers::update_chore).delete(handlers::delete_chore),
        )
        .route("/api/chores/:id/complete", post(handlers::complete_chore))
        .route("/api/chores/:id/toggle", post(handlers::toggle_chore))
        .route("/api/members", get(handlers::list_members).post(handlers::create_member))
        .route("/api/members/:id", delete(handlers::delete_member))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
