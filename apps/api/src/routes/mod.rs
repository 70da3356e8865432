pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::analytics::handlers as analytics;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resumes
        .route(
            "/api/v1/resumes",
            get(resumes::handle_list).post(resumes::handle_upload),
        )
        .route("/api/v1/filters", get(resumes::handle_filters))
        // Analytics
        .route(
            "/api/v1/analytics/by-country",
            get(analytics::handle_by_country),
        )
        .route(
            "/api/v1/analytics/by-job-title",
            get(analytics::handle_by_job_title),
        )
        .route("/api/v1/analytics/counts", get(analytics::handle_counts))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
