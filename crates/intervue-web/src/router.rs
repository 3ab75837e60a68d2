//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    ai::generate_questions,
    auth::{login, me, register},
    dashboard::stats,
    interviews::{clear_current, complete, delete_one, get_current, get_one, list, save_current},
    system::{health, root},
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/",       get(root))
        .route("/health", get(health))

        // Accounts
        .route("/api/auth/register", post(register))
        .route("/api/auth/login",    post(login))
        .route("/api/auth/me",       get(me))

        // Questions
        .route("/api/ai/questions",  post(generate_questions))

        // Interviews
        .route("/api/interviews",          get(list))
        .route("/api/interviews/current",  get(get_current).put(save_current).delete(clear_current))
        .route("/api/interviews/complete", post(complete))
        .route("/api/interviews/{id}",     get(get_one).delete(delete_one))

        .route("/api/dashboard/stats", get(stats))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
