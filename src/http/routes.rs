use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Job catalog
        .route("/jobs", get(handlers::list_jobs))
        .route("/jobs/:job_id", get(handlers::get_job))
        // Interview control
        .route("/interviews/start", post(handlers::start_interview))
        .route(
            "/interviews/:interview_id/submit",
            post(handlers::submit_response),
        )
        .route(
            "/interviews/:interview_id/finish",
            post(handlers::finish_interview),
        )
        // Interview queries
        .route(
            "/interviews/:interview_id/status",
            get(handlers::get_interview_status),
        )
        .route(
            "/interviews/:interview_id/transcript",
            get(handlers::get_interview_transcript),
        )
        // Tracing middleware for request logging; permissive CORS for the
        // browser front-end
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
