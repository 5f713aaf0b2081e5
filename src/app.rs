use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/habits", get(handlers::get_habits).post(handlers::add_habit))
        .route("/api/habits/reload", post(handlers::reload))
        .route("/api/habits/reset", post(handlers::reset_progress))
        .route("/api/habits/:id", patch(handlers::rename_habit).delete(handlers::delete_habit))
        .route("/api/habits/:id/mark", post(handlers::mark_habit))
        .route("/api/error/clear", post(handlers::clear_error))
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
