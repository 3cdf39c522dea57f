use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/challenge", get(handlers::get_challenge))
        .route("/api/challenge/start", post(handlers::start_challenge))
        .route("/api/challenge/day", post(handlers::set_day))
        .route("/api/challenge/level", post(handlers::set_level))
        .route("/api/challenge/pause", post(handlers::pause_challenge))
        .route("/api/challenge/resume", post(handlers::resume_challenge))
        .route("/api/challenge/abort", post(handlers::abort_challenge))
        .route("/api/workout", get(handlers::get_workout))
        .route("/api/workout/complete", post(handlers::complete_workout))
        .route("/api/exercises", get(handlers::get_exercises))
        .route("/api/history", get(handlers::get_history))
        .with_state(state)
}
